//! Blog posts.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::content::store::{Collection, Database, Document};
use crate::content::require;
use crate::error::ContentError;

const COLLECTION: &str = "blogs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    /// RFC 3339 creation time, set by the server.
    pub date: String,
}

impl Document for Blog {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields supplied by the author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl NewBlog {
    /// Every blank required field is reported, not just the first.
    pub fn validate(&self) -> Result<(), ContentError> {
        require(&[
            ("title", self.title.as_str()),
            ("content", self.content.as_str()),
            ("imageUrl", self.image_url.as_str()),
        ])
    }
}

pub struct Blogs<'db> {
    posts: Collection<'db, Blog>,
}

impl<'db> Blogs<'db> {
    pub fn new(db: &'db Database) -> Self {
        Blogs {
            posts: db.collection(COLLECTION),
        }
    }

    pub fn list(&self) -> Result<Vec<Blog>, ContentError> {
        Ok(self.posts.all()?)
    }

    pub fn show(&self, id: &str) -> Result<Blog, ContentError> {
        self.posts.get(id)?.ok_or_else(|| ContentError::NotFound {
            kind: "blog post",
            id: id.to_string(),
        })
    }

    pub fn create(&self, new: NewBlog, now: DateTime<Utc>) -> Result<Blog, ContentError> {
        new.validate()?;
        let blog = Blog {
            id: Uuid::new_v4().to_string(),
            title: new.title.trim().to_string(),
            content: new.content,
            image_url: new.image_url.trim().to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let blog = self.posts.insert(blog)?;
        info!(id = %blog.id, title = %blog.title, "published blog post");
        Ok(blog)
    }

    pub fn delete(&self, id: &str) -> Result<(), ContentError> {
        if self.posts.remove(id)? {
            info!(id, "deleted blog post");
            Ok(())
        } else {
            Err(ContentError::NotFound {
                kind: "blog post",
                id: id.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_blog(title: &str, content: &str, image_url: &str) -> NewBlog {
        NewBlog {
            title: title.into(),
            content: content.into(),
            image_url: image_url.into(),
        }
    }

    #[test]
    fn validation_reports_all_missing_fields() {
        let err = new_blog(" ", "body", "").validate().unwrap_err();
        match err {
            ContentError::Validation(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["title", "imageUrl"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn create_sets_id_and_date() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();
        let blogs = Blogs::new(&db);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        let blog = blogs
            .create(new_blog("Spring flock", "New pullets arrived.", "/img/pullets.jpg"), now)
            .unwrap();

        assert_eq!(blog.date, "2024-03-01T09:30:00.000Z");
        assert!(Uuid::parse_str(&blog.id).is_ok());
        assert_eq!(blogs.show(&blog.id).unwrap(), blog);
        assert_eq!(blogs.list().unwrap(), vec![blog]);
    }

    #[test]
    fn invalid_post_is_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();
        let blogs = Blogs::new(&db);

        assert!(blogs.create(NewBlog::default(), Utc::now()).is_err());
        assert!(blogs.list().unwrap().is_empty());
    }

    #[test]
    fn delete_and_show_missing() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();
        let blogs = Blogs::new(&db);
        let blog = blogs
            .create(new_blog("t", "c", "i"), Utc::now())
            .unwrap();

        blogs.delete(&blog.id).unwrap();
        assert!(matches!(
            blogs.show(&blog.id),
            Err(ContentError::NotFound { .. })
        ));
        assert!(matches!(
            blogs.delete(&blog.id),
            Err(ContentError::NotFound { .. })
        ));
    }
}
