use super::render::{
    print_messages, render_badge_pair, render_badges, render_categories, render_config,
    render_listings, render_misses, render_search, stderr_supports_color, stdout_supports_color,
};
use super::setup::{Cli, Commands, CreateArgs, OutputArgs, SingleOutputArgs};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use mdbadges::api::BadgeApi;
use mdbadges::catalog::Catalog;
use mdbadges::clipboard::copy_to_clipboard;
use mdbadges::commands::add::AddRequest;
use mdbadges::commands::copy::CopyRequest;
use mdbadges::commands::create::CreateRequest;
use mdbadges::commands::lookup::LookupRequest;
use mdbadges::commands::CmdResult;
use mdbadges::config::MdbConfig;
use mdbadges::error::{BadgeError, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Filter directives for diagnostics, e.g. `MDBADGES_LOG=debug`.
const LOG_ENV: &str = "MDBADGES_LOG";

struct AppContext {
    api: BadgeApi,
    use_color: bool,
    err_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Show { category }) => handle_show(&ctx, &category),
        Some(Commands::Search { keyword }) => handle_search(&ctx, &keyword),
        Some(Commands::Copy {
            category,
            badge,
            output,
        }) => handle_copy(&ctx, category, badge, output),
        Some(Commands::Random { style }) => handle_random(&ctx, style),
        Some(Commands::Create(args)) => handle_create(&ctx, args),
        Some(Commands::Add {
            category,
            badge,
            file,
            output,
        }) => handle_add(&ctx, category, badge, file, output),
        Some(Commands::Doctor) => handle_doctor(&ctx),
        Some(Commands::Config) => handle_config(&ctx),
        None => match cli.lookup.category {
            Some(category) => handle_lookup(&ctx, category, cli.lookup.badges, cli.lookup.output),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

/// Prints an error to stderr, with a pointer to the right category when the
/// badge was found elsewhere.
pub fn report_error(error: &BadgeError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    if let BadgeError::CategoryNotFound { hint, .. } = error {
        match hint {
            Some(hint) => eprintln!(
                "'{}' is in the '{}' category. Try: {}",
                hint.badge,
                hint.category,
                format!("mdb {} {}", hint.category, hint.badge).cyan()
            ),
            None => eprintln!(
                "Run {} for a list of categories.",
                "mdb categories".cyan()
            ),
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let catalog = Catalog::builtin()?;
    let config = MdbConfig::load_default()?;
    Ok(AppContext {
        api: BadgeApi::new(catalog, config),
        use_color: stdout_supports_color(),
        err_color: stderr_supports_color(),
    })
}

fn print_result(ctx: &AppContext, result: &CmdResult, html: bool) {
    print!("{}", render_badges(&result.badges, html, ctx.use_color));
    print!("{}", render_listings(&result.listings, ctx.use_color));
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    eprint!("{}", render_misses(&result.misses, ctx.err_color));
}

fn handle_lookup(
    ctx: &AppContext,
    category: String,
    badges: Vec<String>,
    output: OutputArgs,
) -> Result<()> {
    let html = ctx.api.html(output.html);
    let result = ctx.api.lookup(LookupRequest {
        category,
        badges,
        style: output.style,
        links: output.links,
    })?;
    print_result(ctx, &result, html);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print!("{}", render_categories(&result.categories, ctx.use_color));
    Ok(())
}

fn handle_show(ctx: &AppContext, category: &str) -> Result<()> {
    let result = ctx.api.show(category)?;
    print_result(ctx, &result, false);
    Ok(())
}

fn handle_search(ctx: &AppContext, keyword: &str) -> Result<()> {
    let result = ctx.api.search(keyword)?;
    if result.messages.is_empty() {
        print!("{}", render_search(&result.suggestions, ctx.use_color));
    }
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    Ok(())
}

fn handle_copy(
    ctx: &AppContext,
    category: String,
    badge: String,
    output: SingleOutputArgs,
) -> Result<()> {
    let result = ctx.api.copy(
        CopyRequest {
            category,
            badge,
            style: output.style,
            link: output.link,
            html: output.html,
        },
        copy_to_clipboard,
    )?;
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    eprint!("{}", render_misses(&result.misses, ctx.err_color));
    Ok(())
}

fn handle_random(ctx: &AppContext, style: Option<String>) -> Result<()> {
    let result = ctx.api.random(&mut rand::thread_rng(), style)?;
    for badge in &result.badges {
        print!("{}", render_badge_pair(badge, ctx.use_color));
    }
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    Ok(())
}

fn handle_create(ctx: &AppContext, args: CreateArgs) -> Result<()> {
    let result = ctx.api.create(CreateRequest {
        text: args.text,
        color: args.color,
        logo: args.logo,
        alt: args.alt,
        logo_color: args.logo_color,
        style: args.style,
        link: args.link,
    })?;
    for badge in &result.badges {
        print!("{}", render_badge_pair(badge, ctx.use_color));
    }
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    Ok(())
}

fn handle_add(
    ctx: &AppContext,
    category: String,
    badge: String,
    file: PathBuf,
    output: SingleOutputArgs,
) -> Result<()> {
    let result = ctx.api.add(
        AddRequest {
            category,
            badge,
            style: output.style,
            link: output.link,
            html: output.html,
        },
        &file,
    )?;
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    eprint!("{}", render_misses(&result.misses, ctx.err_color));
    Ok(())
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    if result.has_errors() {
        return Err(BadgeError::Catalog("the built-in catalog has problems".into()));
    }
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_config()?;
    print_messages(&result.messages, ctx.use_color, ctx.err_color);
    if let Some(config) = &result.config {
        print!("{}", render_config(config, ctx.use_color));
    }
    Ok(())
}
