use std::fmt::Display;

use uuid::Uuid;

/// Entity kind used to namespace course keys.
pub const COURSE_KIND: &str = "course";

/// Returns the cache key for an entity: `"<kind>:<id>"`.
///
/// Namespacing by kind keeps repositories that share one cache instance
/// from colliding on identical IDs.
///
/// # Examples
///
/// ```
/// use catalog_core::cache::entity_key;
///
/// assert_eq!(entity_key("course", 42), "course:42");
/// ```
pub fn entity_key(kind: &str, id: impl Display) -> String {
    format!("{kind}:{id}")
}

/// Returns the cache key for a single course.
pub fn course_key(course_id: Uuid) -> String {
    entity_key(COURSE_KIND, course_id)
}

/// Splits a cache key back into its kind and ID parts.
///
/// Returns `None` if the key has no `:` separator or either side is empty.
///
/// # Examples
///
/// ```
/// use catalog_core::cache::parse_entity_key;
///
/// assert_eq!(parse_entity_key("course:abc"), Some(("course", "abc")));
/// assert_eq!(parse_entity_key("course"), None);
/// ```
pub fn parse_entity_key(key: &str) -> Option<(&str, &str)> {
    let (kind, id) = key.split_once(':')?;
    if kind.is_empty() || id.is_empty() {
        return None;
    }
    Some((kind, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_key() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            course_key(id),
            "course:550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_keys_differ_by_kind() {
        let id = Uuid::new_v4();
        assert_ne!(entity_key("course", id), entity_key("teacher", id));
    }

    #[test]
    fn test_parse_course_key() {
        let id = Uuid::new_v4();
        let key = course_key(id);
        let id_str = id.to_string();

        assert_eq!(parse_entity_key(&key), Some((COURSE_KIND, id_str.as_str())));
    }

    #[test]
    fn test_parse_keeps_colons_in_id() {
        assert_eq!(parse_entity_key("course:a:b"), Some(("course", "a:b")));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_entity_key(""), None);
        assert_eq!(parse_entity_key(":123"), None);
        assert_eq!(parse_entity_key("course:"), None);
        assert_eq!(parse_entity_key("nocolon"), None);
    }
}
