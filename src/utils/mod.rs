//! Utility functions shared across layers.
//!
//! - [`alias`] - Alias generation and validation
//! - [`url_check`] - Redirect target validation
//! - [`db_error`] - Database error classification

pub mod alias;
pub mod db_error;
pub mod url_check;
