//! The identity record the auth endpoints return.

use serde::{Deserialize, Serialize};

/// A user as the backend reports it. The auth endpoints omit `username`;
/// campaign payloads include it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserInfo {
    /// Display name, falling back to the email address when no name parts
    /// are recorded.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (true, true) => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserInfo {
            id: 1,
            email: "frodo@shire.example".to_string(),
            username: None,
            first_name: None,
            last_name: None,
        };
        assert_eq!(user.display_name(), "frodo@shire.example");

        user.first_name = Some("Frodo".to_string());
        assert_eq!(user.display_name(), "Frodo");

        user.last_name = Some("Baggins".to_string());
        assert_eq!(user.display_name(), "Frodo Baggins");
    }
}
