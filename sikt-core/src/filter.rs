//! ## sikt-core::filter
//! **Filter-and-project routine**
//!
//! Keeps active records, emits the `{id, name, value}` projection for
//! each, preserving input order. Inactive records are dropped silently;
//! the routine has no side effects and cannot fail.

use tracing::debug;

use crate::record::{Projection, Record};

/// Project the active subset of `records`, in input order.
pub fn project_active(records: &[Record]) -> Vec<Projection> {
    let projections: Vec<Projection> = records
        .iter()
        .filter(|record| record.active)
        .map(Projection::from)
        .collect();

    debug!(
        input = records.len(),
        kept = projections.len(),
        "projected active records"
    );

    projections
}
