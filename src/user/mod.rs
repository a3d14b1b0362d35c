//! User records and roster helpers.
//!
//! The user directory owns these records. Everything in this crate treats a
//! roster as an immutable snapshot for the duration of one call.

pub mod types;

pub use types::{User, UserId};

/// Find a user in a roster by canonical id.
pub fn find_user<'a>(roster: &'a [User], id: &UserId) -> Option<&'a User> {
    roster.iter().find(|u| &u.id == id)
}

/// Find a user by an externally supplied key, such as a CLI argument.
///
/// An exact id match wins. Otherwise a user whose id renders the same way
/// matches, so `"123"` typed by a person finds a directory id of `Str("123")`
/// as well as `Int(123)`. Ids stored on records are still compared exactly.
pub fn lookup_user<'a>(roster: &'a [User], key: &UserId) -> Option<&'a User> {
    find_user(roster, key).or_else(|| {
        let rendered = key.to_string();
        roster.iter().find(|u| u.id.to_string() == rendered)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_user() {
        let roster = vec![User::new(1, ["a"], ["b"]), User::new("x", ["c"], ["d"])];
        assert!(find_user(&roster, &UserId::Int(1)).is_some());
        assert!(find_user(&roster, &UserId::from("x")).is_some());
        assert!(find_user(&roster, &UserId::from("1")).is_none());
    }

    #[test]
    fn test_lookup_numeric_string_id() {
        let roster: Vec<User> = serde_json::from_str(
            r#"[{"_id": "123", "skills": ["go"]}, {"_id": "456", "skills": ["go"]}]"#,
        )
        .unwrap();
        let key = UserId::parse("123");
        assert_eq!(key, UserId::Int(123));
        let found = lookup_user(&roster, &key).unwrap();
        assert_eq!(found.id, UserId::Str("123".into()));
    }

    #[test]
    fn test_lookup_prefers_exact_match() {
        let roster = vec![User::new("7", ["a"], ["b"]), User::new(7, ["c"], ["d"])];
        let found = lookup_user(&roster, &UserId::Int(7)).unwrap();
        assert_eq!(found.id, UserId::Int(7));
        assert!(lookup_user(&roster, &UserId::Int(8)).is_none());
    }
}
