//! # Core Models Module
//!
//! Data structures describing what the external pipeline reports and what
//! the render layer produces.
//!
//! - [`phase`] - The fixed four-phase pipeline enumeration and its progress ranges
//! - [`report`] - The job status payload published by the pipeline service
//! - [`residue`] - Chemical residue classes and annotated residue records

pub mod phase;
pub mod report;
pub mod residue;
