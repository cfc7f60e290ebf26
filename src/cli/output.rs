//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use itertools::Itertools;

use crate::application::Section;
use crate::config::RenderStyle;
use crate::domain::TreeRender;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Body lines of a section: one value per line, or the outline.
pub fn section_lines(section: &Section, style: RenderStyle) -> Vec<String> {
    match (&section.tree, style) {
        (None, _) => Vec::new(),
        (Some(_), RenderStyle::List) => section.values(),
        (Some(tree), RenderStyle::Tree) => tree
            .to_tree_string()
            .to_string()
            .lines()
            .map(str::to_string)
            .collect(),
    }
}

/// Print a titled section; an absent tree prints a warning instead of a body.
pub fn section(section: &Section, style: RenderStyle) {
    header(&format!("{}:", section.title));
    if section.tree.is_none() {
        warning("root rejected, nothing left");
        return;
    }
    info(&section_lines(section, style).iter().join("\n"));
}
