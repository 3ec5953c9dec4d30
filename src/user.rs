// Display-name fallbacks for the profile and greeting headers. The
// profile comes from the auth provider and any field may be absent.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

/// Full name, then username, then "User".
pub fn display_name(user: Option<&UserProfile>) -> String {
    let Some(user) = user else {
        return "User".to_string();
    };

    let first = user.first_name.as_deref().unwrap_or("");
    let last = user.last_name.as_deref().unwrap_or("");
    let full_name = format!("{} {}", first, last).trim().to_string();
    if !full_name.is_empty() {
        return full_name;
    }

    match user.username.as_deref() {
        Some(username) if !username.is_empty() => username.to_string(),
        _ => "User".to_string(),
    }
}

/// First name, then username, then "there". A present-but-empty first
/// name is returned unchanged.
pub fn first_name(user: Option<&UserProfile>) -> String {
    let Some(user) = user else {
        return "there".to_string();
    };

    user.first_name
        .clone()
        .or_else(|| user.username.clone())
        .unwrap_or_else(|| "there".to_string())
}

/// Uppercased initials for the avatar, "U" when nothing is available.
pub fn initials(user: Option<&UserProfile>) -> String {
    let Some(user) = user else {
        return "U".to_string();
    };

    let mut initials = String::new();
    for name in [user.first_name.as_deref(), user.last_name.as_deref()] {
        if let Some(first_char) = name.and_then(|name| name.chars().next()) {
            initials.extend(first_char.to_uppercase());
        }
    }

    if initials.is_empty() {
        "U".to_string()
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: Option<&str>, last: Option<&str>, username: Option<&str>) -> UserProfile {
        UserProfile {
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            username: username.map(str::to_string),
        }
    }

    #[test]
    fn prefers_full_name() {
        let user = profile(Some("Ada"), Some("Lovelace"), Some("ada42"));
        assert_eq!(display_name(Some(&user)), "Ada Lovelace");
    }

    #[test]
    fn falls_back_to_single_name_then_username() {
        let first_only = profile(Some("Ada"), None, Some("ada42"));
        assert_eq!(display_name(Some(&first_only)), "Ada");

        let username_only = profile(None, None, Some("ada42"));
        assert_eq!(display_name(Some(&username_only)), "ada42");

        let nothing = profile(None, None, None);
        assert_eq!(display_name(Some(&nothing)), "User");
        assert_eq!(display_name(None), "User");
    }

    #[test]
    fn first_name_ignores_last_name() {
        let user = profile(Some("Ada"), Some("Lovelace"), Some("ada42"));
        assert_eq!(first_name(Some(&user)), "Ada");

        let username_only = profile(None, None, Some("ada42"));
        assert_eq!(first_name(Some(&username_only)), "ada42");

        assert_eq!(first_name(None), "there");
    }

    #[test]
    fn first_name_keeps_a_present_but_empty_value() {
        let user = profile(Some(""), None, Some("ada42"));
        assert_eq!(first_name(Some(&user)), "");
    }

    #[test]
    fn builds_uppercase_initials() {
        let user = profile(Some("ada"), Some("lovelace"), None);
        assert_eq!(initials(Some(&user)), "AL");

        let first_only = profile(Some("Ada"), None, None);
        assert_eq!(initials(Some(&first_only)), "A");

        assert_eq!(initials(None), "U");
        assert_eq!(initials(Some(&profile(None, None, Some("ada42")))), "U");
    }
}
