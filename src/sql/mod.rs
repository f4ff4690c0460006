//! Safe SQL builder: identifiers come from the table mapping only, values are always parameters.

mod builder;
pub use builder::*;
