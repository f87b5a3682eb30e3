use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wxss_fix::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "wxss-fix",
    version,
    about = "Patch WXSS stylesheets for mini-program compatibility"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite vh/vw units and comment out gap, @media, ::placeholder and var()
    Patch(RunArgs),

    /// Collapse nested and duplicated comment markers left by earlier patching
    Repair(RunArgs),

    /// List all built-in rules with descriptions
    ListRules,

    /// Show pattern and example for a rule
    Explain {
        /// Rule ID (e.g., "patch/gap")
        rule_id: String,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Stylesheet extension to scan, overriding the config file
    #[arg(long)]
    pub ext: Option<String>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
