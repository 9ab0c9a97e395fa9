use crate::errors::BilledError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize, serde_derive::Serialize,
)]
pub enum UserType {
    Employee,
    Admin,
}

/// The connected user, as stored by the application after login. Handed to
/// every controller at construction.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize, serde_derive::Serialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl Session {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }

    /// Parses the stored `{"type": ..., "email": ...}` user object.
    pub fn from_json(s: &str) -> Result<Self, BilledError> {
        serde_json::from_str(s).map_err(|e| BilledError::InvalidSession {
            details: e.to_string(),
        })
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }
}
