//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// podstatic - build selected CocoaPods as static libraries
///
/// Injects a `pre_install` hook into the iOS Podfile that switches the listed pods
/// to static linkage, optionally with modular headers.
#[derive(Parser, Debug)]
#[command(
    name = "podstatic",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Force selected CocoaPods to build as static libraries",
    long_about = "podstatic patches the iOS Podfile with a pre_install hook that makes the listed \
                  pods build as static libraries, optionally enabling modular headers for some of \
                  them. Running it again on a patched Podfile changes nothing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  podstatic apply LibA LibB\n    \
                  podstatic apply --modular-headers Firebase\n    \
                  podstatic apply --config podstatic.yaml --dry-run\n    \
                  podstatic -p ios status\n    \
                  podstatic preview LibA"
)]
pub struct Cli {
    /// iOS project root containing the Podfile
    #[arg(
        long,
        short = 'p',
        global = true,
        env = "PODSTATIC_PROJECT_ROOT",
        default_value = "ios"
    )]
    pub project_root: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Patch the Podfile so the given pods build as static libraries
    Apply(ApplyArgs),

    /// Show whether the Podfile is already patched
    Status,

    /// Print the pre_install hook that would be generated
    Preview(PreviewArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where the library list comes from
#[derive(Args, Debug, Clone, Default)]
pub struct LibraryArgs {
    /// Pod names to build as static libraries
    #[arg(value_name = "LIBRARY")]
    pub libraries: Vec<String>,

    /// Pod to build statically with modular headers (repeatable)
    #[arg(long = "modular-headers", short = 'm', value_name = "LIBRARY")]
    pub modular_headers: Vec<String>,

    /// Configuration file (defaults to ./podstatic.yaml when present)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Patch with libraries from podstatic.yaml:\n    podstatic apply\n\n\
                   Patch with libraries from the command line:\n    podstatic apply LibA LibB\n\n\
                   Enable modular headers for a pod:\n    podstatic apply -m Firebase\n\n\
                   Print the patched Podfile without writing it:\n    podstatic apply LibA --dry-run")]
pub struct ApplyArgs {
    #[command(flatten)]
    pub libraries: LibraryArgs,

    /// Print the resulting Podfile instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the preview command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Preview the hook for two pods:\n    podstatic preview LibA LibB\n\n\
                  Preview the hook from a config file:\n    podstatic preview --config podstatic.yaml")]
pub struct PreviewArgs {
    #[command(flatten)]
    pub libraries: LibraryArgs,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    podstatic completions --shell bash > ~/.bash_completion.d/podstatic\n\n\
                  Generate zsh completions:\n    podstatic completions --shell zsh > ~/.zfunc/_podstatic\n\n\
                  Generate fish completions:\n    podstatic completions --shell fish > ~/.config/fish/completions/podstatic.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
