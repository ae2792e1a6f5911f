//! Environment-driven configuration.
//!
//! Values come from `HENHOUSE_*` variables with defaults; global CLI flags
//! are applied on top with [`Config::with_overrides`].

use std::env;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::auth::{Role, Session};
use crate::error::ConfigError;

pub const DATA_DIR_VAR: &str = "HENHOUSE_DATA_DIR";
pub const SHEET_VAR: &str = "HENHOUSE_SHEET";
pub const USER_VAR: &str = "HENHOUSE_USER";
pub const ROLE_VAR: &str = "HENHOUSE_ROLE";

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_SHEET_FILE: &str = "eggs.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    sheet: Option<PathBuf>,
    pub user: Option<String>,
    pub role: Option<Role>,
}

/// Values given on the command line. `None` keeps the environment value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub sheet: Option<PathBuf>,
    pub user: Option<String>,
    pub role: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = var(DATA_DIR_VAR).map(PathBuf::from).unwrap_or_else(|| {
            info!("{DATA_DIR_VAR} not set, using default: {DEFAULT_DATA_DIR}");
            PathBuf::from(DEFAULT_DATA_DIR)
        });
        let sheet = var(SHEET_VAR).map(PathBuf::from);
        if sheet.is_none() {
            debug!("{SHEET_VAR} not set, reading {DEFAULT_SHEET_FILE} from the data directory");
        }
        let role = var(ROLE_VAR).map(|r| r.parse::<Role>()).transpose()?;

        Ok(Config {
            data_dir,
            sheet,
            user: var(USER_VAR),
            role,
        })
    }

    /// Applies command-line values over the environment.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(dir) = overrides.data_dir {
            self.data_dir = dir;
        }
        if let Some(sheet) = overrides.sheet {
            self.sheet = Some(sheet);
        }
        if let Some(user) = overrides.user {
            self.user = Some(user);
        }
        if let Some(role) = overrides.role {
            self.role = Some(role.parse()?);
        }
        Ok(self)
    }

    /// Path of the egg record export.
    pub fn sheet_path(&self) -> PathBuf {
        self.sheet
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_SHEET_FILE))
    }

    /// The session described by the configured user and role.
    ///
    /// A user without a role is staff.
    pub fn session(&self) -> Result<Option<Session>, ConfigError> {
        match (&self.user, self.role) {
            (Some(user), role) => Ok(Some(Session::new(
                user.clone(),
                role.unwrap_or(Role::Staff),
            ))),
            (None, Some(_)) => Err(ConfigError::RoleWithoutUser),
            (None, None) => Ok(None),
        }
    }
}
