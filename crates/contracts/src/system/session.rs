use serde::{Deserialize, Serialize};

/// Profile of a connected user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Employee => "Employee",
            UserType::Admin => "Admin",
        }
    }
}

/// Session identity persisted by the login flow under the localStorage key
/// `"user"`. Read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
}

impl SessionUser {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }
}
