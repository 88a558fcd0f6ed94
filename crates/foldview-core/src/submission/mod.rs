//! # Submission Module
//!
//! Typed design-job requests and their validation rules.
//!
//! The pipeline service accepts a handful of sampling parameters with a web
//! form in front of them; this module is the form's contract as data. A
//! front-end builds a [`request::DesignRequest`], calls
//! [`request::DesignRequest::validate`] before handing it to the service,
//! and surfaces [`request::DesignRequest::warnings`] as non-fatal notices.

pub mod request;
