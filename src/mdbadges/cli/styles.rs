use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown in front of text whose style name is not in the theme.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const SNIPPET: &str = "snippet";
    pub const BADGE_ID: &str = "badge_id";
    pub const MUTED: &str = "muted";
    pub const SUGGESTION: &str = "suggestion";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static MDB_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADING, Style::new().cyan().bold())
        .add(names::LABEL, Style::new().bold())
        .add(names::SNIPPET, Style::new().color256(214))
        .add(names::BADGE_ID, Style::new().green())
        .add(names::MUTED, Style::new().dim())
        .add(names::SUGGESTION, Style::new().yellow())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
