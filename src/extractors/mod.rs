//! Request extractors.

mod payload;
mod person_id;
pub use payload::Payload;
pub use person_id::PersonId;
