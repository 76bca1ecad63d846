mod buyer;
mod city_policy;
mod pit_mode;
mod seller;

pub use buyer::{BuyerDraft, BuyerInput, BuyerResult};
pub use city_policy::{CityPolicy, DeedTaxPreset};
pub use pit_mode::{ParsePitModeError, PitMode};
pub use seller::{SellerDraft, SellerInput, SellerResult};
