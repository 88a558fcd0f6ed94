//! # Core Module
//!
//! Fundamental data models and static lookup tables for the dashboard
//! library, shared by every derivation in [`crate::render`].
//!
//! ## Overview
//!
//! The core module owns the vocabulary of the external pipeline: the four
//! design phases and their progress ranges, the job status payload the
//! service publishes, and the residue records produced by sequence
//! annotation. None of these types hold behavior beyond cheap accessors;
//! the interesting transformations live one layer up.
//!
//! ## Key Components
//!
//! - [`models`] - Phase enumeration, status payloads, and residue records
//! - [`utils`] - Static amino-acid classification and naming tables

pub mod models;
pub mod utils;
