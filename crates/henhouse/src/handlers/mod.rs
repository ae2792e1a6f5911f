//! Command handlers.
//!
//! Handlers check access, call into the domain modules and return a
//! [`CommandOutput`]; they never format or print anything themselves.

mod content;
mod eggs;

use crate::cli::{AboutCommand, BlogCommand, Command, EggsCommand, FaqCommand};
use crate::content::{NewBlog, NewFaq};
use crate::context::AppContext;
use crate::error::Result;
use crate::output::CommandOutput;

/// Runs `command` against `ctx`.
pub fn dispatch(ctx: &AppContext, command: &Command) -> Result<CommandOutput> {
    match command {
        Command::Eggs(EggsCommand::List(filters)) => eggs::list(ctx, filters),
        Command::Eggs(EggsCommand::Stats(args)) => eggs::stats(ctx, args),
        Command::Eggs(EggsCommand::Houses(filters)) => eggs::houses(ctx, filters),

        Command::Blog(BlogCommand::List) => content::blog_list(ctx),
        Command::Blog(BlogCommand::Show { id }) => content::blog_show(ctx, id),
        Command::Blog(BlogCommand::Add {
            title,
            content: body,
            image_url,
        }) => content::blog_add(
            ctx,
            NewBlog {
                title: title.clone(),
                content: body.clone(),
                image_url: image_url.clone(),
            },
        ),
        Command::Blog(BlogCommand::Delete { id }) => content::blog_delete(ctx, id),

        Command::Faq(FaqCommand::List) => content::faq_list(ctx),
        Command::Faq(FaqCommand::Add { question, answer }) => content::faq_add(
            ctx,
            NewFaq {
                question: question.clone(),
                answer: answer.clone(),
            },
        ),
        Command::Faq(FaqCommand::Delete { id }) => content::faq_delete(ctx, id),

        Command::About(AboutCommand::Show) => content::about_show(ctx),
        Command::About(AboutCommand::Set { content: text }) => content::about_set(ctx, text),
    }
}
