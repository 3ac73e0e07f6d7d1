use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-expiry-notifier",
    about = "Check tracked software licenses for upcoming expiry and file a GitHub issue",
    version
)]
pub struct Cli {
    /// License inventory file
    #[arg(default_value = "licenses.yaml")]
    pub path: PathBuf,

    /// Look-ahead window in days (inclusive of both bounds)
    #[arg(long, default_value_t = 30, value_name = "DAYS")]
    pub days: i64,

    /// Print the issue title and body instead of creating it on GitHub
    #[arg(long)]
    pub dry_run: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}
