//! Prelude module for convenient imports
//!
//! ```ignore
//! use pesticides::prelude::*;
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Product table
pub use crate::catalog::{EffectRating, Efficacy, PESTICIDES, PreHarvestInterval, Product};

// Export
pub use crate::export::{ExportFormat, OutputFormat, export_catalog, resolve_encoding};
