//! # Rendering
//!
//! Styled terminal output from minijinja templates. Templates choose styles
//! through the `style` filter, which looks names up in [`MDB_THEME`] and
//! degrades to plain text when color is off.
//!
//! Width math (column padding) stays in Rust and uses display width, so
//! labels with wide characters still line up.

use super::styles::{names, MDB_THEME};
use super::templates::{
    BADGES_TEMPLATE, BADGE_PAIR_TEMPLATE, CATEGORIES_TEMPLATE, CONFIG_TEMPLATE, LISTING_TEMPLATE,
    MESSAGES_TEMPLATE, MISSES_TEMPLATE, SEARCH_TEMPLATE,
};
use console::Term;
use mdbadges::commands::{
    BadgeListing, BadgeMiss, CategorySummary, CmdMessage, MessageLevel, RenderedBadge,
};
use mdbadges::config::MdbConfig;
use mdbadges::normalize::display_label;
use mdbadges::suggest::Suggestion;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Whether stdout should get ANSI styling.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Whether stderr should get ANSI styling. Checked apart from stdout, since
/// either one may be redirected on its own.
pub fn stderr_supports_color() -> bool {
    Term::stderr().features().colors_supported()
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        MDB_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.render_str(template, data)
}

/// Spaces needed to pad `text` to `width` display columns.
fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

#[derive(Serialize)]
struct BadgeLine<'a> {
    label: &'a str,
    category: &'a str,
    output: &'a str,
}

#[derive(Serialize)]
struct BadgesData<'a> {
    badges: Vec<BadgeLine<'a>>,
}

pub fn render_badges(badges: &[RenderedBadge], html: bool, use_color: bool) -> String {
    if badges.is_empty() {
        return String::new();
    }
    let data = BadgesData {
        badges: badges
            .iter()
            .map(|b| BadgeLine {
                label: &b.label,
                category: &b.category,
                output: b.badge.output(html),
            })
            .collect(),
    };
    render_template(BADGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        badges
            .iter()
            .map(|b| format!("{}\n", b.badge.output(html)))
            .collect()
    })
}

#[derive(Serialize)]
struct BadgePairData<'a> {
    label: &'a str,
    category: &'a str,
    markdown: &'a str,
    html: &'a str,
}

/// Both representations of one badge, for `random` and `create`.
pub fn render_badge_pair(badge: &RenderedBadge, use_color: bool) -> String {
    let data = BadgePairData {
        label: &badge.label,
        category: &badge.category,
        markdown: &badge.badge.markdown,
        html: &badge.badge.html,
    };
    render_template(BADGE_PAIR_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n{}\n", badge.badge.markdown, badge.badge.html))
}

#[derive(Serialize)]
struct SuggestionLine<'a> {
    id: &'a str,
    label: &'a str,
    padding: String,
}

#[derive(Serialize)]
struct HintData<'a> {
    category: &'a str,
    badge: &'a str,
}

#[derive(Serialize)]
struct MissData<'a> {
    name: &'a str,
    category: String,
    category_id: &'a str,
    elsewhere: Option<HintData<'a>>,
    spaced: bool,
    suggestions: Vec<SuggestionLine<'a>>,
}

#[derive(Serialize)]
struct MissesData<'a> {
    misses: Vec<MissData<'a>>,
}

pub fn render_misses(misses: &[BadgeMiss], use_color: bool) -> String {
    if misses.is_empty() {
        return String::new();
    }
    let data = MissesData {
        misses: misses
            .iter()
            .map(|miss| {
                let width = column_width(miss.suggestions.iter().map(|s| s.id.as_str()));
                MissData {
                    name: &miss.name,
                    category: display_label(&miss.category),
                    category_id: &miss.category,
                    elsewhere: miss.elsewhere.as_ref().map(|hint| HintData {
                        category: &hint.category,
                        badge: &hint.badge,
                    }),
                    spaced: miss.name.trim().contains(char::is_whitespace),
                    suggestions: miss
                        .suggestions
                        .iter()
                        .map(|s| SuggestionLine {
                            id: &s.id,
                            label: &s.label,
                            padding: padding(&s.id, width),
                        })
                        .collect(),
                }
            })
            .collect(),
    };
    render_template(MISSES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        misses
            .iter()
            .map(|m| format!("Badge '{}' was not found.\n", m.name))
            .collect()
    })
}

#[derive(Serialize)]
struct SearchLine<'a> {
    id: &'a str,
    category: &'a str,
    padding: String,
    category_padding: String,
}

#[derive(Serialize)]
struct SearchData<'a> {
    results: Vec<SearchLine<'a>>,
    empty: bool,
}

pub fn render_search(results: &[Suggestion], use_color: bool) -> String {
    let id_width = column_width(results.iter().map(|s| s.id.as_str()));
    let category_width = column_width(results.iter().map(|s| s.category.as_str()));
    let data = SearchData {
        results: results
            .iter()
            .map(|s| SearchLine {
                id: &s.id,
                category: &s.category,
                padding: padding(&s.id, id_width),
                category_padding: padding(&s.category, category_width),
            })
            .collect(),
        empty: results.is_empty(),
    };
    render_template(SEARCH_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct CategoryLine<'a> {
    label: &'a str,
    id: &'a str,
    count: usize,
    padding: String,
    id_padding: String,
}

#[derive(Serialize)]
struct CategoriesData<'a> {
    categories: Vec<CategoryLine<'a>>,
}

pub fn render_categories(categories: &[CategorySummary], use_color: bool) -> String {
    let label_width = column_width(categories.iter().map(|c| c.label.as_str()));
    let id_width = column_width(categories.iter().map(|c| c.id.as_str()));
    let data = CategoriesData {
        categories: categories
            .iter()
            .map(|c| CategoryLine {
                label: &c.label,
                id: &c.id,
                count: c.badge_count,
                padding: padding(&c.label, label_width),
                id_padding: padding(&c.id, id_width),
            })
            .collect(),
    };
    render_template(CATEGORIES_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct ListingLine<'a> {
    id: &'a str,
    label: &'a str,
    padding: String,
}

#[derive(Serialize)]
struct ListingData<'a> {
    title: String,
    badges: Vec<ListingLine<'a>>,
}

pub fn render_listings(listings: &[BadgeListing], use_color: bool) -> String {
    let Some(first) = listings.first() else {
        return String::new();
    };
    let width = column_width(listings.iter().map(|l| l.id.as_str()));
    let data = ListingData {
        title: format!("{} ({})", display_label(&first.category), first.category),
        badges: listings
            .iter()
            .map(|l| ListingLine {
                id: &l.id,
                label: &l.label,
                padding: padding(&l.id, width),
            })
            .collect(),
    };
    render_template(LISTING_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
    padding: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

pub fn render_config(config: &MdbConfig, use_color: bool) -> String {
    let pairs = config.list_all();
    let width = column_width(pairs.iter().map(|(k, _)| *k));
    let data = ConfigData {
        entries: pairs
            .into_iter()
            .map(|(key, value)| ConfigEntry {
                key,
                value,
                padding: padding(key, width),
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

pub fn render_messages(messages: &[&CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: &msg.content,
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Splits messages into what belongs on stdout (info, success) and what
/// belongs on stderr (warnings, errors).
fn split_messages(messages: &[CmdMessage]) -> (Vec<&CmdMessage>, Vec<&CmdMessage>) {
    messages
        .iter()
        .partition(|m| !matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
}

/// Info and success go to stdout; warnings and errors to stderr so piped
/// snippets stay clean. Each stream gets its own color decision.
pub fn print_messages(messages: &[CmdMessage], out_color: bool, err_color: bool) {
    let (quiet, loud) = split_messages(messages);
    print!("{}", render_messages(&quiet, out_color));
    eprint!("{}", render_messages(&loud, err_color));
}
