use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdb",
    bin_name = "mdb",
    version,
    args_conflicts_with_subcommands = true
)]
#[command(about = "Find Shields.io badges and print them as Markdown or HTML", long_about = None)]
#[command(after_help = "Examples:\n  mdb social-media discord reddit\n  mdb \"Social Media\" discord --html -s for-the-badge\n  mdb search play")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// `mdb <category> <badge>...`
#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Category to look in (e.g. social-media or "Social Media")
    pub category: Option<String>,

    /// Badge names; lists the category when omitted
    pub badges: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print HTML instead of Markdown
    #[arg(long)]
    pub html: bool,

    /// Badge style: flat, flat-square, plastic, social, for-the-badge
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Link target; repeat to give each badge its own, in order
    #[arg(short = 'l', long = "link", value_name = "URL")]
    pub links: Vec<String>,
}

/// Output options for commands that produce a single badge.
#[derive(Args, Debug, Clone, Default)]
pub struct SingleOutputArgs {
    /// Use HTML instead of Markdown
    #[arg(long)]
    pub html: bool,

    /// Badge style: flat, flat-square, plastic, social, for-the-badge
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Link target for the badge
    #[arg(short, long, value_name = "URL")]
    pub link: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all categories
    #[command(alias = "cat", display_order = 1)]
    Categories,

    /// List the badges in a category
    #[command(alias = "badges", display_order = 2)]
    Show {
        /// Category name
        category: String,
    },

    /// Search every category for a badge
    #[command(visible_alias = "s", aliases = ["find", "lookup"], display_order = 3)]
    Search {
        /// Keyword to match against badge names
        keyword: String,
    },

    /// Copy a badge to the clipboard
    #[command(alias = "c", display_order = 4)]
    Copy {
        category: String,
        badge: String,

        #[command(flatten)]
        output: SingleOutputArgs,
    },

    /// Show a random badge
    #[command(alias = "r", display_order = 5)]
    Random {
        /// Badge style
        #[arg(short, long, value_name = "STYLE")]
        style: Option<String>,
    },

    /// Build a custom badge
    #[command(alias = "generate", display_order = 6)]
    Create(CreateArgs),

    /// Append a badge to an existing file
    #[command(display_order = 7)]
    Add {
        category: String,
        badge: String,

        /// File to append to (must exist)
        #[arg(default_value = "README.md")]
        file: PathBuf,

        #[command(flatten)]
        output: SingleOutputArgs,
    },

    /// Check the built-in catalog for problems
    #[command(display_order = 8)]
    Doctor,

    /// Show the effective configuration
    #[command(display_order = 9)]
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Text on the badge
    #[arg(short, long)]
    pub text: String,

    /// Background color as hex (e.g. #ff5733)
    #[arg(short, long)]
    pub color: String,

    /// Simple Icons logo name (e.g. rust)
    #[arg(long)]
    pub logo: String,

    /// Alt text (defaults to the badge text)
    #[arg(long)]
    pub alt: Option<String>,

    /// Logo color (defaults to white)
    #[arg(long, value_name = "COLOR")]
    pub logo_color: Option<String>,

    /// Badge style
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Link target for the badge
    #[arg(short, long, value_name = "URL")]
    pub link: Option<String>,
}
