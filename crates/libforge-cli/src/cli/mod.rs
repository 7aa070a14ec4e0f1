//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "libforge",
    bin_name = "libforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold .NET library solutions with tests, packaging and git",
    long_about = "libforge creates a library solution (library project, NUnit test \
                  project, license, readme, version config) that packs, runs its \
                  failing test stubs and is committed to a fresh git repository.",
    after_help = "EXAMPLES:\n\
        \x20 libforge new Widgets\n\
        \x20 libforge sync-tests ./Widgets\n\
        \x20 libforge completions bash > /usr/share/bash-completion/completions/libforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new library solution in the current directory.
    #[command(
        visible_alias = "n",
        about = "Create a new library solution",
        after_help = "EXAMPLES:\n\
            \x20 libforge new Widgets\n\
            \x20 libforge new acme-widgets --output-format json"
    )]
    New(NewArgs),

    /// Add missing test stubs to an existing solution.
    #[command(
        name = "sync-tests",
        visible_alias = "sync",
        about = "Create missing test stubs",
        after_help = "EXAMPLES:\n\
            \x20 libforge sync-tests            # solution in the current directory\n\
            \x20 libforge sync-tests ./Widgets"
    )]
    SyncTests(SyncTestsArgs),

    /// Initialise a libforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 libforge init\n\
            \x20 libforge init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 libforge completions bash > ~/.local/share/bash-completion/completions/libforge\n\
            \x20 libforge completions zsh  > ~/.zfunc/_libforge\n\
            \x20 libforge completions fish > ~/.config/fish/completions/libforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the libforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 libforge config get tools.dotnet\n\
            \x20 libforge config list\n\
            \x20 libforge config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `libforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Library name. The solution is created in `./NAME`.
    #[arg(value_name = "NAME", help = "Library name")]
    pub name: String,

    /// Copyright holder written into the LICENSE.
    #[arg(
        long = "author",
        value_name = "AUTHOR",
        help = "License copyright holder (default: config `author`)"
    )]
    pub author: Option<String>,
}

// ── sync-tests ────────────────────────────────────────────────────────────────

/// Arguments for `libforge sync-tests`.
#[derive(Debug, Args)]
pub struct SyncTestsArgs {
    /// Solution directory; its name is the library name.
    #[arg(
        value_name = "DIR",
        default_value = ".",
        help = "Solution directory (default: current directory)"
    )]
    pub dir: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `libforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `libforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `libforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tools.dotnet`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
