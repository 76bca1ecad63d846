//! City policy reference data.
//!
//! Builtin presets plus a CSV loader for user-supplied policy files. All of
//! it is static, behavior-free lookup data for the calculation engine.

pub mod cities;
pub mod loader;

pub use cities::{DEFAULT_CITY_NAME, builtin_cities, city_by_name};
pub use loader::{CityPolicyLoader, CityPolicyLoaderError, merge_policies};
