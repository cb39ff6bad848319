use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};

/// Role of the logged-in user as reported by the API at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Colaborador,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Colaborador => "Colaborador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "colaborador" => Ok(Role::Colaborador),
            other => Err(AdminError::InvalidInput(format!(
                "Unknown role '{}'. Expected Admin or Colaborador",
                other
            ))),
        }
    }
}

/// The session marker persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        role: Role,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },
}

impl Session {
    pub fn authenticated(role: Role, token: Option<String>) -> Self {
        Session::Authenticated { role, token }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { role, .. } => Some(*role),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => token.as_deref(),
        }
    }

    /// The role, or `NotAuthenticated` for an anonymous session.
    pub fn require(&self) -> AdminResult<Role> {
        self.role().ok_or(AdminError::NotAuthenticated)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Anonymous => write!(f, "not logged in"),
            Session::Authenticated { role, .. } => write!(f, "logged in as {}", role),
        }
    }
}
