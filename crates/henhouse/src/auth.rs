//! Sessions, roles and capability checks.
//!
//! Sessions arrive already established (here: from `--user`/`--role` or the
//! environment). Handlers call [`authorize`] before touching protected data;
//! the record pipeline itself never checks access.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::error::{AuthError, ConfigError};

/// Role attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Returns true if this role holds `capability`.
    pub fn grants(self, capability: Capability) -> bool {
        match self {
            Role::Admin => true,
            Role::Staff => matches!(
                capability,
                Capability::ViewRecords | Capability::PublishPost
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }
}

impl FromStr for Role {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            // "simple" is what older session issuers call ordinary staff
            "staff" | "simple" => Ok(Role::Staff),
            _ => Err(ConfigError::InvalidRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something a session may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewRecords,
    PublishPost,
    ManageFaq,
    EditAbout,
    DeleteContent,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Capability::ViewRecords => "view egg records",
            Capability::PublishPost => "publish blog posts",
            Capability::ManageFaq => "manage FAQ entries",
            Capability::EditAbout => "edit the about page",
            Capability::DeleteContent => "delete content",
        };
        f.write_str(text)
    }
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: String,
    pub role: Role,
}

impl Session {
    pub fn new(user: impl Into<String>, role: Role) -> Self {
        Self {
            user: user.into(),
            role,
        }
    }
}

/// Checks that `session` exists and holds `capability`.
pub fn authorize(session: Option<&Session>, capability: Capability) -> Result<&Session, AuthError> {
    let Some(session) = session else {
        warn!(%capability, "denied: no session");
        return Err(AuthError::Unauthorized);
    };

    if session.role.grants(capability) {
        Ok(session)
    } else {
        warn!(
            user = %session.user,
            role = %session.role,
            %capability,
            "denied: missing capability"
        );
        Err(AuthError::Forbidden {
            user: session.user.clone(),
            capability,
        })
    }
}
