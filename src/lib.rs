//! PMIC part reference catalog.
//!
//! This crate loads a catalog of power-management IC part records into an
//! immutable in-memory [`catalog::Catalog`] and answers three read-only
//! queries over it: reference search, derived model-key listing, and
//! aggregate statistics.
//!
//! The binary `pmicbase` exposes each query as a CLI subcommand.

pub mod catalog;
pub mod model;
pub mod stats;
