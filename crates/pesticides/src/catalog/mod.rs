//! Typed product table.
//!
//! - **Product**: one label row with ten columns
//! - **PreHarvestInterval**: days, or a verbatim label exception
//! - **EffectRating**: efficacy grade or grade range
//!
//! The table itself is fixed at compile time in [`PESTICIDES`].

mod data;
mod efficacy;
mod product;

pub use data::{COLUMNS, PESTICIDES};
pub use efficacy::{EffectRating, Efficacy};
pub use product::{PreHarvestInterval, Product};
