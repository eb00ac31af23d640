//! Custom extractors shared by the domain routers.

pub mod json_query;
pub mod uuid_path;
pub mod validated_json;

pub use json_query::{JsonQuery, empty_as_none};
pub use uuid_path::UuidPath;
pub use validated_json::{ValidatedJson, null_as_default};
