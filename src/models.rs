//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently
//! `separation`). This organization may grow as more unit operations are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic live. The model module re-exports
//! the pieces of `core` that are useful on their own, and its
//! [`twine_core::Model`] implementation is a thin adapter over them.

pub mod separation;
