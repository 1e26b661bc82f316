use colored::Colorize;
use ledger_config::Theme;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

static THEME: OnceLock<RwLock<Theme>> = OnceLock::new();

/// Switches the palette used by subsequent messages.
pub fn set_theme(theme: Theme) {
    let lock = THEME.get_or_init(|| RwLock::new(Theme::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = theme;
    }
}

fn theme() -> Theme {
    THEME
        .get_or_init(|| RwLock::new(Theme::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[+]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, theme: Theme) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{} {}", label(kind), text),
    };

    match (theme, kind) {
        (_, MessageKind::Info) => base,
        (_, MessageKind::Section) => base.bold().to_string(),
        (Theme::Dark, MessageKind::Success) => base.bright_green().to_string(),
        (Theme::Dark, MessageKind::Warning) => base.bright_yellow().to_string(),
        (Theme::Dark, MessageKind::Error) => base.bright_red().to_string(),
        (Theme::Light, MessageKind::Success) => base.green().to_string(),
        (Theme::Light, MessageKind::Warning) => base.yellow().to_string(),
        (Theme::Light, MessageKind::Error) => base.red().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, theme());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints an unlabelled line, e.g. a list row.
pub fn line(message: impl fmt::Display) {
    println!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_messages_are_never_colored() {
        let styled = apply_style(MessageKind::Info, "hello", Theme::Dark);
        assert_eq!(styled, "[i] hello");
    }

    #[test]
    fn warnings_keep_their_label() {
        colored::control::set_override(false);
        let styled = apply_style(MessageKind::Warning, "careful", Theme::Light);
        assert_eq!(styled, "[!] careful");
    }
}
