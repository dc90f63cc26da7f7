//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mkcpp",
    bin_name = "mkcpp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Buildable C++ project skeletons in one command",
    long_about = "mkcpp generates a ready-to-build C++ source tree for the \
                  mac target: a fixed directory layout, a platform build \
                  script and a CMake project descriptor.",
    after_help = "EXAMPLES:\n\
        \x20 mkcpp new                         # fully interactive\n\
        \x20 mkcpp new --name Foo --std 17 --exceptions n\n\
        \x20 mkcpp new --skip-deps             # offline, skip brew checks\n\
        \x20 mkcpp completions zsh > ~/.zfunc/_mkcpp",
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
    /// Generate a new C++ project.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 mkcpp new\n\
            \x20 mkcpp new --name Foo --std 20 --exceptions y\n\
            \x20 mkcpp new --name Foo --skip-deps"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mkcpp completions bash > ~/.local/share/bash-completion/completions/mkcpp\n\
            \x20 mkcpp completions zsh  > ~/.zfunc/_mkcpp\n\
            \x20 mkcpp completions fish > ~/.config/fish/completions/mkcpp.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `mkcpp new`.
///
/// Every configuration flag is optional: a valid flag value skips its
/// interactive prompt, an omitted flag falls back to the prompt loop, and an
/// invalid flag value is a usage error (flags never enter the retry loop).
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; becomes the directory root and the executable name.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name (prompted for when omitted)"
    )]
    pub name: Option<String>,

    /// C++ language standard token: 14, 17 or 20.
    #[arg(
        short = 's',
        long = "std",
        value_name = "STD",
        help = "C++ standard: 14, 17 or 20 (prompted for when omitted)"
    )]
    pub std: Option<String>,

    /// Whether to compile with C++ exceptions: y or n.
    #[arg(
        short = 'e',
        long = "exceptions",
        value_name = "Y/N",
        help = "Enable C++ exceptions: y or n (prompted for when omitted)"
    )]
    pub exceptions: Option<String>,

    /// Skip the dependency-verification stage entirely.
    #[arg(
        long = "skip-deps",
        help = "Assume cmake and ninja are present; never invoke brew"
    )]
    pub skip_deps: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mkcpp completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_fully_flagged_new_command() {
        let cli = Cli::parse_from([
            "mkcpp",
            "new",
            "--name",
            "Foo",
            "--std",
            "17",
            "--exceptions",
            "n",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name.as_deref(), Some("Foo"));
        assert_eq!(args.std.as_deref(), Some("17"));
        assert_eq!(args.exceptions.as_deref(), Some("n"));
        assert!(!args.skip_deps);
    }

    #[test]
    fn new_command_flags_are_all_optional() {
        let cli = Cli::parse_from(["mkcpp", "new"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.name.is_none());
        assert!(args.std.is_none());
        assert!(args.exceptions.is_none());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["mkcpp", "--quiet", "--verbose", "new"]);
        assert!(result.is_err());
    }
}
