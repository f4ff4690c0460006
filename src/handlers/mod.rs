//! HTTP handlers for the person resource.

pub mod person;
pub use person::*;
