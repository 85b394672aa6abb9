use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Role of a user account.
    UserRole, "user role" {
        Admin => "ADMIN",
        User => "USER",
        PremiumUser => "PREMIUM_USER",
    }
}

/// User entity - the public profile the API exposes (never the password hash).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
}

impl User {
    /// Typed role. The API stores roles in lower case (`"user"`); parsing
    /// ignores case.
    pub fn user_role(&self) -> Option<UserRole> {
        self.role.as_deref()?.parse().ok()
    }

    /// "First Last", or whichever part is present, or the email.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lowercase_role() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "email": "jane@example.com",
            "first_name": "Jane",
            "last_name": null,
            "role": "user",
            "created_at": "2024-02-01T09:00:00",
            "last_login": null
        }))
        .unwrap();

        assert_eq!(user.user_role(), Some(UserRole::User));
        assert_eq!(user.display_name(), "Jane");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: User =
            serde_json::from_value(json!({"id": 2, "email": "anon@example.com"})).unwrap();

        assert_eq!(user.display_name(), "anon@example.com");
        assert_eq!(user.user_role(), None);
    }
}
