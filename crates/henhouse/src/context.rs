//! Per-process state handed to every handler.

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::debug;

use crate::auth::Session;
use crate::config::Config;
use crate::content::Database;
use crate::eggs::{source_for_path, RecordSource};
use crate::error::Result;

/// Long-lived resources and the request's session.
///
/// The document store is opened here once and closed by
/// [`AppContext::close`] at shutdown.
pub struct AppContext {
    pub config: Config,
    pub session: Option<Session>,
    pub db: Database,
    /// Creation time stamped on new documents.
    pub now: DateTime<Utc>,
    /// The local calendar day, for "today" statistics.
    pub today: NaiveDate,
}

impl AppContext {
    pub fn open(config: Config) -> Result<Self> {
        let session = config.session()?;
        let db = Database::open(&config.data_dir)?;
        debug!(
            user = session.as_ref().map(|s| s.user.as_str()),
            sheet = %config.sheet_path().display(),
            "application context ready"
        );
        Ok(AppContext {
            config,
            session,
            db,
            now: Utc::now(),
            today: Local::now().date_naive(),
        })
    }

    /// Pins the clock, for reproducible output.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self.today = now.date_naive();
        self
    }

    /// The configured egg record source.
    pub fn record_source(&self) -> Box<dyn RecordSource> {
        source_for_path(&self.config.sheet_path())
    }

    pub fn close(self) -> Result<()> {
        self.db.close()?;
        Ok(())
    }
}
