//! The single "about" page document.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::content::store::{Collection, Database};
use crate::error::ContentError;

const COLLECTION: &str = "about";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

pub struct AboutPage<'db> {
    doc: Collection<'db, About>,
}

impl<'db> AboutPage<'db> {
    pub fn new(db: &'db Database) -> Self {
        AboutPage {
            doc: db.collection(COLLECTION),
        }
    }

    /// The stored page, or empty content when it was never set.
    pub fn show(&self) -> Result<About, ContentError> {
        Ok(self.doc.first()?.unwrap_or_default())
    }

    /// Replaces the page content.
    pub fn set(&self, content: &str, now: DateTime<Utc>) -> Result<About, ContentError> {
        let about = self.doc.upsert_first(About {
            content: content.to_string(),
            updated_at: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        })?;
        info!(bytes = about.content.len(), "updated about page");
        Ok(about)
    }
}
