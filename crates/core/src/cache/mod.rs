mod error;
mod keys;
mod noop;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{course_key, entity_key, parse_entity_key, COURSE_KIND};
pub use noop::NoopCache;
pub use serialization::{deserialize_course, serialize_course, SerializationError};
pub use traits::Cache;
