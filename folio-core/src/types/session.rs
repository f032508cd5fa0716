//! Session types

use serde::{Deserialize, Serialize};

/// Authentication state reported by the site backend.
///
/// Field names follow the wire format of the `auth` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Whether the visitor is signed in
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,

    /// Display name chosen by the visitor, empty until set
    #[serde(default)]
    pub nickname: String,

    /// Account email, present only when signed in
    #[serde(default)]
    pub email: String,

    /// URL the visitor should open to sign in
    #[serde(rename = "loginURL", default)]
    pub login_url: String,

    /// URL the visitor should open to sign out
    #[serde(rename = "logoutURL", default)]
    pub logout_url: String,
}

impl Session {
    /// A signed-in session without a nickname must be prompted for one
    /// before the visitor may post or delete comments.
    #[must_use]
    pub fn needs_nickname(&self) -> bool {
        self.logged_in && self.nickname.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{
            "loggedIn": true,
            "nickname": "esap",
            "email": "apts-1547@esaps.net",
            "logoutURL": "/logout"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.logged_in);
        assert_eq!(session.nickname, "esap");
        assert_eq!(session.logout_url, "/logout");
        assert!(session.login_url.is_empty());
    }

    #[test]
    fn logged_out_session_never_needs_nickname() {
        let json = r#"{"loggedIn": false, "loginURL": "/login"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(!session.needs_nickname());
    }

    #[test]
    fn blank_nickname_needs_prompt() {
        let session = Session {
            logged_in: true,
            nickname: "   ".to_string(),
            ..Session::default()
        };
        assert!(session.needs_nickname());
    }
}
