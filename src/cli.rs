//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// appforge - demo app generator
///
/// Turn an app idea or a category into a ready-to-open demo page.
#[derive(Parser, Debug)]
#[command(
    name = "appforge",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate demo mini-applications from an idea or a category",
    long_about = "appforge picks one of its built-in mini-application templates (game, todo list, \
                  timer, dashboard, comments, product card, gallery, calculator) from a free-text \
                  idea or a category and writes a self-contained HTML page with the app mounted.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appforge generate \"I want a calculator app\"  \x1b[90m# Pick by keywords\x1b[0m\n   \
                  appforge generate --category games          \x1b[90m# Pick from a category\x1b[0m\n   \
                  appforge random -o demo.html                \x1b[90m# Random template\x1b[0m\n   \
                  appforge list                               \x1b[90m# List categories and templates\x1b[0m\n   \
                  appforge show Calculator --section js       \x1b[90m# Print a template's script\x1b[0m\n"
)]
pub struct Cli {
    /// Configuration file (defaults to ./appforge.yaml, then the user config directory)
    #[arg(long, global = true, env = "APPFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for template selection, for reproducible output
    #[arg(long, global = true, env = "APPFORGE_SEED")]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an app from an idea or a category
    Generate(GenerateArgs),

    /// Generate a random app
    Random(RandomArgs),

    /// List categories and their templates
    List(ListArgs),

    /// Show a template's generated source
    Show(ShowArgs),

    /// Classify an idea the way the assistant does
    Classify(ClassifyArgs),

    /// Apply a recorded list of UI events to one page
    Replay(ReplayArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick by keywords:\n    appforge generate \"build me a todo list\"\n\n\
                  Pick from a category:\n    appforge generate --category productivity\n\n\
                  Choose a category from a menu:\n    appforge generate --interactive\n\n\
                  Print the page instead of writing a file:\n    appforge generate \"photo gallery\" -o -")]
pub struct GenerateArgs {
    /// Free-text app idea
    pub idea: Option<String>,

    /// Category key (games, productivity, dashboard, social, ecommerce, multimedia)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Output file, or '-' for stdout (defaults to the configured output)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Prompt for a category when no idea or category is given
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

/// Arguments for the random command
#[derive(Parser, Debug)]
pub struct RandomArgs {
    /// Output file, or '-' for stdout (defaults to the configured output)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Include template descriptions
    #[arg(long)]
    pub detailed: bool,
}

/// Which part of a template to print
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    Html,
    Css,
    Js,
    #[default]
    All,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show everything:\n    appforge show \"Tic Tac Toe\"\n\n\
                  Show only the markup:\n    appforge show calculator --section html")]
pub struct ShowArgs {
    /// Template name (case-insensitive)
    pub name: String,

    /// Section to print
    #[arg(long, short = 's', value_enum, default_value_t = Section::All)]
    pub section: Section,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Text to classify
    pub text: String,

    /// Print the assistant response as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the replay command
#[derive(Parser, Debug)]
#[command(after_help = "EVENT LOG FORMAT (YAML):\n  \
                  - idea: build me a todo list\n  \
                  - { action: select, category: games }\n  \
                  - action: random\n  \
                  - action: unmount")]
pub struct ReplayArgs {
    /// Event log file
    pub file: PathBuf,

    /// Output file, or '-' for stdout (defaults to the configured output)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
