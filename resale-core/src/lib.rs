//! Core calculation engine for second-hand residential sale costs.
//!
//! The engine is a pair of pure functions, [`calc_seller`] and [`calc_buyer`],
//! over plain input records. They are total: invalid inputs propagate
//! arithmetically instead of failing. Input validity is a separate advisory
//! layer in [`validate`], and the calculators never consult it.
//!
//! The policy model here is a simplified, city-parameterized approximation
//! for reference only, not a comprehensive rendering of tax law.

pub mod amount;
pub mod calculations;
pub mod models;
pub mod validate;

pub use calculations::{calc_buyer, calc_seller};
pub use models::*;
pub use validate::{ValidationIssue, validate_buyer_input, validate_seller_input};
