//! Template rendering with minijinja.

use console::Style;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::OutputError;
use crate::output::templates::TEMPLATES;
use crate::output::TextMode;

/// A template environment bound to one [`TextMode`].
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(mode: TextMode) -> Result<Self, OutputError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, mode);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Renderer { env })
    }

    /// Renders the named template with `data` as context.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, OutputError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(Value::from_serialize(data))?)
    }
}

fn register_filters(env: &mut Environment<'static>, mode: TextMode) {
    // {{ value | style("header") }}
    env.add_filter("style", move |value: Value, name: String| -> String {
        apply_style(&value.to_string(), &name, mode)
    });

    // {{ value | pad(12) }} left-aligns, {{ value | rpad(7) }} right-aligns
    env.add_filter("pad", |value: Value, width: usize| -> String {
        let text = fit(&value.to_string(), width);
        let fill = width.saturating_sub(text.width());
        format!("{}{}", text, " ".repeat(fill))
    });
    env.add_filter("rpad", |value: Value, width: usize| -> String {
        let text = fit(&value.to_string(), width);
        let fill = width.saturating_sub(text.width());
        format!("{}{}", " ".repeat(fill), text)
    });

    // {{ 410.0 | num }} => "410", {{ 91.256 | num }} => "91.26"
    env.add_filter("num", |value: Value| -> String {
        match f64::try_from(value.clone()) {
            Ok(n) => format_number(n),
            Err(_) => value.to_string(),
        }
    });
}

fn apply_style(text: &str, name: &str, mode: TextMode) -> String {
    match mode {
        TextMode::Plain => text.to_string(),
        TextMode::Debug => format!("[{}]{}[/{}]", name, text, name),
        TextMode::Styled => match style_for(name) {
            Some(style) => style.force_styling(true).apply_to(text).to_string(),
            None => text.to_string(),
        },
    }
}

fn style_for(name: &str) -> Option<Style> {
    let style = Style::new();
    Some(match name {
        "header" => style.bold().cyan(),
        "label" | "muted" | "info" => style.dim(),
        "count" => style.yellow(),
        "house" => style.magenta(),
        "success" => style.green(),
        "warning" => style.yellow().bold(),
        "error" => style.red().bold(),
        _ => return None,
    })
}

/// Truncates `text` to `width` display columns, ending in `…` when cut.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let limit = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        let text = format!("{:.2}", n);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
