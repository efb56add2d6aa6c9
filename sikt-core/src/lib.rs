//! # sikt-core
//!
//! Record model and processing primitives for the sikt toolkit.
//! Built around a small, strict data model with order-preserving,
//! side-effect-free transforms.
//!
//! ### Key Submodules:
//! - `record`: typed `Record` model with a strict deserialization boundary
//! - `filter`: the filter-and-project routine
//! - `accumulator`: order-preserving record collector with bulk transform
//! - `pricing`: positive-price totals

pub mod accumulator;
pub mod error;
pub mod filter;
pub mod pricing;
pub mod record;

pub mod prelude {
    pub use crate::accumulator::*;
    pub use crate::error::*;
    pub use crate::filter::*;
    pub use crate::pricing::*;
    pub use crate::record::*;
}

pub use accumulator::Accumulator;
pub use error::RecordError;
pub use filter::project_active;
pub use pricing::total;
pub use record::{records_from_json, ProcessedRecord, Projection, Record};
