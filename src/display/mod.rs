//! Terminal display for `repo show`
//!
//! Renders a repository through [`Renderer`] and prints it styled with
//! termimad when colors are enabled, or as raw Markdown otherwise.

use std::io::IsTerminal;

use termimad::crossterm::style::{Attribute, Color::*};
use termimad::{gray, MadSkin};

use crate::config::Config;
use crate::models::Repository;
use crate::renderer::Renderer;

/// Render `repository` and print it to stdout
pub fn print_repository(repository: &Repository, config: &Config) {
    let markdown = Renderer::new(config).render(repository);
    if should_use_colors() {
        repository_skin().print_text(&markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Color decision for the current process environment and stdout
fn should_use_colors() -> bool {
    colors_enabled(|name| std::env::var(name).ok(), std::io::stdout().is_terminal())
}

/// Decide whether output gets colors.
///
/// `NO_COLOR` wins over everything, `CLICOLOR_FORCE` (other than `0`) enables
/// colors even when piped, `CLICOLOR=0` disables them; otherwise colors follow
/// `is_tty`.
pub fn colors_enabled(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }
    if var("CLICOLOR_FORCE").is_some_and(|val| val != "0") {
        return true;
    }
    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }
    is_tty
}

/// Skin for repository summaries
fn repository_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    // Repository title, then section headers
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);
    skin.headers[1].add_attr(Attribute::Bold);

    // Commit ids
    skin.inline_code.set_fg(Yellow);
    skin.inline_code.set_bg(gray(3));

    skin.table.set_fg(White);
    skin.italic.set_fg(Green);
    skin.bullet.set_fg(Cyan);

    skin
}
