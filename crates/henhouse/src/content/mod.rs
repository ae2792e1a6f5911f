//! Blog, FAQ and about page content backed by the document store.
//!
//! These types do no access control; handlers authorize first.

pub mod about;
pub mod blog;
pub mod faq;
pub mod store;

pub use about::{About, AboutPage};
pub use blog::{Blog, Blogs, NewBlog};
pub use faq::{FaqEntry, Faqs, NewFaq};
pub use store::{Collection, Database, Document};

use crate::error::{ContentError, ValidationError};

/// Fails with every `(field, value)` pair whose value is blank.
pub(crate) fn require(fields: &[(&str, &str)]) -> Result<(), ContentError> {
    let missing: Vec<ValidationError> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| ValidationError::required(*field))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ContentError::Validation(missing))
    }
}
