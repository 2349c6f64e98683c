//! Utility functions for alias generation, URL checks and database errors.
//!
//! - [`alias_generator`] - Random alias generation and custom alias validation
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - Classification of driver errors

pub mod alias_generator;
pub mod db_error;
pub mod url_validator;
