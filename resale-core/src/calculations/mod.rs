//! Cost breakdown calculations for both sides of a resale transaction.
//!
//! Both calculators are pure and total: they never fail, and identical
//! inputs always produce identical results.

pub mod buyer;
pub mod common;
pub mod seller;

pub use buyer::calc_buyer;
pub use seller::calc_seller;
