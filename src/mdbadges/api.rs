//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! mdbadges operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::<name>::run`
//! - **Applies configuration** (default style, HTML mode, suggestion settings)
//!   to requests that left those fields open
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no process control. Clipboard access and
//! randomness are passed in, so the whole surface can be driven from tests.

use crate::catalog::Catalog;
use crate::commands;
use crate::commands::add::AddRequest;
use crate::commands::copy::CopyRequest;
use crate::commands::create::CreateRequest;
use crate::commands::lookup::LookupRequest;
use crate::config::MdbConfig;
use crate::error::Result;
use crate::resolve::Resolver;
use rand::Rng;
use std::path::Path;

pub struct BadgeApi {
    catalog: Catalog,
    config: MdbConfig,
}

impl BadgeApi {
    pub fn new(catalog: Catalog, config: MdbConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MdbConfig {
        &self.config
    }

    /// A resolver over the catalog with the configured suggestion settings.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.catalog)
            .with_suggestions(self.config.suggestion_limit, self.config.suggestion_threshold)
    }

    /// Whether output should be HTML, given the `--html` flag.
    pub fn html(&self, flag: bool) -> bool {
        flag || self.config.html
    }

    pub fn lookup(&self, mut request: LookupRequest) -> Result<commands::CmdResult> {
        request.style = self.style(request.style);
        commands::lookup::run(&self.resolver(), &request)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.catalog)
    }

    pub fn show(&self, category: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.resolver(), category)
    }

    pub fn search(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(
            &self.catalog,
            keyword,
            self.config.suggestion_limit,
            self.config.suggestion_threshold,
        )
    }

    pub fn copy<F>(&self, mut request: CopyRequest, sink: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&str) -> Result<()>,
    {
        request.style = self.style(request.style);
        request.html = self.html(request.html);
        commands::copy::run(&self.resolver(), &request, sink)
    }

    pub fn random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        style: Option<String>,
    ) -> Result<commands::CmdResult> {
        let style = self.style(style);
        commands::random::run(&self.catalog, rng, style.as_deref())
    }

    pub fn create(&self, mut request: CreateRequest) -> Result<commands::CmdResult> {
        request.style = self.style(request.style);
        commands::create::run(&request)
    }

    pub fn add(&self, mut request: AddRequest, file: &Path) -> Result<commands::CmdResult> {
        request.style = self.style(request.style);
        request.html = self.html(request.html);
        commands::add::run(&self.resolver(), &request, file)
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.catalog)
    }

    pub fn show_config(&self) -> Result<commands::CmdResult> {
        commands::config::run(&self.config)
    }

    fn style(&self, requested: Option<String>) -> Option<String> {
        requested.or_else(|| self.config.default_style.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::sample_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn api_with(config: MdbConfig) -> BadgeApi {
        BadgeApi::new(sample_catalog(), config)
    }

    fn lookup(category: &str, badges: &[&str]) -> LookupRequest {
        LookupRequest {
            category: category.into(),
            badges: badges.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn lookup_uses_configured_style() {
        let api = api_with(MdbConfig {
            default_style: Some("flat-square".into()),
            ..Default::default()
        });
        let result = api.lookup(lookup("social-media", &["discord"])).unwrap();
        assert!(result.badges[0].badge.markdown.contains("style=flat-square"));
    }

    #[test]
    fn explicit_style_beats_config() {
        let api = api_with(MdbConfig {
            default_style: Some("flat-square".into()),
            ..Default::default()
        });
        let mut request = lookup("social-media", &["discord"]);
        request.style = Some("plastic".into());
        let result = api.lookup(request).unwrap();
        assert!(result.badges[0].badge.markdown.contains("style=plastic"));
    }

    #[test]
    fn unknown_configured_style_only_warns() {
        let api = api_with(MdbConfig {
            default_style: Some("shiny".into()),
            ..Default::default()
        });
        let result = api.lookup(lookup("social-media", &["discord"])).unwrap();
        assert_eq!(result.badges.len(), 1);
        assert!(!result.badges[0].badge.markdown.contains("style="));
        assert!(result.messages[0].content.contains("shiny"));
        assert_eq!(api.categories().unwrap().categories.len(), 3);
    }

    #[test]
    fn suggestion_limit_comes_from_config() {
        let api = api_with(MdbConfig {
            suggestion_limit: 1,
            suggestion_threshold: 0.0,
            ..Default::default()
        });
        let result = api.lookup(lookup("social-media", &["disc"])).unwrap();
        assert_eq!(result.misses[0].suggestions.len(), 1);

        let result = api.search("d").unwrap();
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn html_flag_or_config() {
        assert!(api_with(MdbConfig::default()).html(true));
        assert!(!api_with(MdbConfig::default()).html(false));
        let api = api_with(MdbConfig {
            html: true,
            ..Default::default()
        });
        assert!(api.html(false));
    }

    #[test]
    fn dispatches_listing_commands() {
        let api = api_with(MdbConfig::default());
        assert_eq!(api.categories().unwrap().categories.len(), 3);
        assert_eq!(api.show("games").unwrap().listings.len(), 2);
        assert!(!api.doctor().unwrap().has_errors());
        assert!(api.show_config().unwrap().config.is_some());
    }

    #[test]
    fn random_and_create_dispatch() {
        let api = api_with(MdbConfig::default());
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(api.random(&mut rng, None).unwrap().badges.len(), 1);

        let created = api
            .create(CreateRequest {
                text: "docs".into(),
                color: "0a0".into(),
                logo: "readthedocs".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(created.badges.len(), 1);
    }

    #[test]
    fn copy_uses_html_from_config() {
        let api = api_with(MdbConfig {
            html: true,
            ..Default::default()
        });
        let mut copied = String::new();
        api.copy(
            CopyRequest {
                category: "games".into(),
                badge: "steam".into(),
                ..Default::default()
            },
            |text| {
                copied = text.to_string();
                Ok(())
            },
        )
        .unwrap();
        assert!(copied.starts_with("<img "));
    }
}
