//! Person resource handler and the identifier validator it gates on.

mod person;
pub mod validation;
pub use person::PersonService;
pub use validation::{is_valid_id, parse_id};
