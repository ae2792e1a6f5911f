//! `blog`, `faq` and `about` commands.

use serde::Serialize;

use crate::auth::{authorize, Capability};
use crate::content::{AboutPage, Blog, Blogs, FaqEntry, Faqs, NewBlog, NewFaq};
use crate::context::AppContext;
use crate::error::{OutputError, Result};
use crate::output::{CommandOutput, Message};

#[derive(Debug, Serialize)]
struct PostList<'a> {
    posts: &'a [Blog],
}

#[derive(Debug, Serialize)]
struct FaqList<'a> {
    entries: &'a [FaqEntry],
}

fn message<T: Serialize>(text: String, item: Option<&T>) -> Result<CommandOutput> {
    let mut msg = Message::new(text);
    if let Some(item) = item {
        msg = msg.with_item(item).map_err(OutputError::from)?;
    }
    Ok(CommandOutput::new("message", &msg)?)
}

pub fn blog_list(ctx: &AppContext) -> Result<CommandOutput> {
    let posts = Blogs::new(&ctx.db).list()?;
    Ok(CommandOutput::new("blog/list", &PostList { posts: &posts })?.with_rows(&posts)?)
}

pub fn blog_show(ctx: &AppContext, id: &str) -> Result<CommandOutput> {
    let post = Blogs::new(&ctx.db).show(id)?;
    Ok(CommandOutput::new("blog/show", &post)?)
}

pub fn blog_add(ctx: &AppContext, new: NewBlog) -> Result<CommandOutput> {
    let session = authorize(ctx.session.as_ref(), Capability::PublishPost)?;
    let post = Blogs::new(&ctx.db).create(new, ctx.now)?;
    message(
        format!("{} published \"{}\" ({})", session.user, post.title, post.id),
        Some(&post),
    )
}

pub fn blog_delete(ctx: &AppContext, id: &str) -> Result<CommandOutput> {
    authorize(ctx.session.as_ref(), Capability::DeleteContent)?;
    Blogs::new(&ctx.db).delete(id)?;
    message::<Blog>(format!("Deleted blog post {}", id), None)
}

pub fn faq_list(ctx: &AppContext) -> Result<CommandOutput> {
    let entries = Faqs::new(&ctx.db).list()?;
    Ok(CommandOutput::new("faq/list", &FaqList { entries: &entries })?.with_rows(&entries)?)
}

pub fn faq_add(ctx: &AppContext, new: NewFaq) -> Result<CommandOutput> {
    authorize(ctx.session.as_ref(), Capability::ManageFaq)?;
    let entry = Faqs::new(&ctx.db).create(new)?;
    message(format!("Added FAQ entry {}", entry.id), Some(&entry))
}

pub fn faq_delete(ctx: &AppContext, id: &str) -> Result<CommandOutput> {
    authorize(ctx.session.as_ref(), Capability::DeleteContent)?;
    Faqs::new(&ctx.db).delete(id)?;
    message::<FaqEntry>(format!("Deleted FAQ entry {}", id), None)
}

pub fn about_show(ctx: &AppContext) -> Result<CommandOutput> {
    let about = AboutPage::new(&ctx.db).show()?;
    Ok(CommandOutput::new("about/show", &about)?)
}

pub fn about_set(ctx: &AppContext, content: &str) -> Result<CommandOutput> {
    authorize(ctx.session.as_ref(), Capability::EditAbout)?;
    let about = AboutPage::new(&ctx.db).set(content, ctx.now)?;
    message("Updated the about page".to_string(), Some(&about))
}
