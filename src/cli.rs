use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docver",
    about = "Set the current docs version in docusaurus.config.ts and sync its versions with versions.json",
    version,
    author
)]
pub struct Cli {
    /// Version to publish as the current docs label (e.g. 0.7 or 1.2.3)
    #[arg(value_name = "VERSION")]
    pub target_version: Option<String>,

    /// Website directory holding the config and versions list
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub website_dir: PathBuf,

    /// Docusaurus config file, relative to the website directory unless absolute
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "docusaurus.config.ts"
    )]
    pub config: PathBuf,

    /// JSON array of archived versions, relative to the website directory unless absolute
    #[arg(long, value_name = "FILE", default_value = "versions.json")]
    pub versions_file: PathBuf,

    /// Warn instead of failing when the label or versions block cannot be found
    #[arg(long)]
    pub lenient: bool,

    /// Show what would change without writing the config
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
