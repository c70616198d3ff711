pub mod types;

pub use types::{Conversion, conversion_kind, generate_type_conversion};
