//! Headers module
//!
//! This module provides a constants for HTTP headers.
//!

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const APPLICATION_JSON: &str = "application/json";
