//! # Foldview Core Library
//!
//! A render-state derivation library for protein-design pipeline dashboards.
//! It converts the two inputs a dashboard receives from the external pipeline
//! service (a scalar job-progress value and a designed amino-acid sequence)
//! into plain, typed render records that any view-binding layer (terminal,
//! web, or otherwise) can draw without further logic.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep the
//! computation separate from every effect, so the whole crate can be unit
//! tested without a running pipeline or a terminal.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Phase`,
//!   `StatusReport`, `AnnotatedResidue`) and the static amino-acid
//!   classification tables.
//!
//! - **[`render`]: The Derivation Core.** Pure, total functions that map a
//!   progress value to per-phase card states and a raw sequence string to
//!   annotated, layout-indexed residues. Same input, same output; callers
//!   may invoke them on every poll, including duplicate or out-of-order
//!   notifications.
//!
//! - **[`submission`]: The Request Boundary.** A typed design-job request
//!   with the service's defaults and a total validation function, so a
//!   front-end can reject malformed submissions before they ever reach the
//!   pipeline.

pub mod core;
pub mod render;
pub mod submission;
