//! Crate-level utilities used by models.
//!
//! - [`constraint`]: numeric invariants carried in the type system.
//! - [`thermo`]: vapor-pressure correlations and mixture bookkeeping.

pub mod constraint;
pub mod thermo;
