use crate::config::MdbConfig;
use crate::error::CategoryHint;
use crate::format::FormattedBadge;
use crate::resolve::Resolver;
use crate::suggest::Suggestion;
use serde::Serialize;

pub mod add;
pub mod categories;
pub mod config;
pub mod copy;
pub mod create;
pub mod doctor;
pub mod lookup;
pub mod random;
pub mod search;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A badge ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBadge {
    pub category: String,
    pub id: String,
    pub label: String,
    pub badge: FormattedBadge,
}

/// A badge name that did not resolve, with what the engine offered instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeMiss {
    pub category: String,
    pub name: String,
    pub suggestions: Vec<Suggestion>,
    /// Set when a badge with exactly this name lives in another category.
    pub elsewhere: Option<CategoryHint>,
}

impl BadgeMiss {
    pub fn new(
        resolver: &Resolver<'_>,
        category: String,
        name: &str,
        suggestions: Vec<Suggestion>,
    ) -> Self {
        let elsewhere = resolver
            .locate_badge(name)
            .filter(|hint| hint.category != category);
        Self {
            category,
            name: name.to_string(),
            suggestions,
            elsewhere,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub label: String,
    pub badge_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeListing {
    pub category: String,
    pub id: String,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub badges: Vec<RenderedBadge>,
    pub misses: Vec<BadgeMiss>,
    pub suggestions: Vec<Suggestion>,
    pub categories: Vec<CategorySummary>,
    pub listings: Vec<BadgeListing>,
    pub config: Option<MdbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        if !self.messages.contains(&message) {
            self.messages.push(message);
        }
    }

    pub fn with_badges(mut self, badges: Vec<RenderedBadge>) -> Self {
        self.badges = badges;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategorySummary>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_listings(mut self, listings: Vec<BadgeListing>) -> Self {
        self.listings = listings;
        self
    }

    pub fn with_config(mut self, config: MdbConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
