//! Frequently asked questions.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::content::require;
use crate::content::store::{Collection, Database, Document};
use crate::error::ContentError;

const COLLECTION: &str = "faq";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Document for FaqEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
}

impl NewFaq {
    pub fn validate(&self) -> Result<(), ContentError> {
        require(&[
            ("question", self.question.as_str()),
            ("answer", self.answer.as_str()),
        ])
    }
}

pub struct Faqs<'db> {
    entries: Collection<'db, FaqEntry>,
}

impl<'db> Faqs<'db> {
    pub fn new(db: &'db Database) -> Self {
        Faqs {
            entries: db.collection(COLLECTION),
        }
    }

    pub fn list(&self) -> Result<Vec<FaqEntry>, ContentError> {
        Ok(self.entries.all()?)
    }

    pub fn create(&self, new: NewFaq) -> Result<FaqEntry, ContentError> {
        new.validate()?;
        let entry = self.entries.insert(FaqEntry {
            id: Uuid::new_v4().to_string(),
            question: new.question.trim().to_string(),
            answer: new.answer.trim().to_string(),
        })?;
        info!(id = %entry.id, "added FAQ entry");
        Ok(entry)
    }

    pub fn delete(&self, id: &str) -> Result<(), ContentError> {
        if self.entries.remove(id)? {
            info!(id, "deleted FAQ entry");
            Ok(())
        } else {
            Err(ContentError::NotFound {
                kind: "FAQ entry",
                id: id.to_string(),
            })
        }
    }
}
