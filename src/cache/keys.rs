//! Cache key derivation
//!
//! Each record is cached under two independent keys. Nothing links them, so
//! one can be present while the other is missing or stale.

/// Key of the by-id view: `user:<id>`.
pub fn user_key(id: i64) -> String {
    format!("user:{}", id)
}

/// Key of the by-name view: `name:<name>`.
pub fn name_key(name: &str) -> String {
    format!("name:{}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_formats() {
        assert_eq!(user_key(7), "user:7");
        assert_eq!(name_key("alice"), "name:alice");
        assert_eq!(name_key("a b/c"), "name:a b/c");
    }
}
