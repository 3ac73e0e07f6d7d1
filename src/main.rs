//! `license-expiry-notifier` — flag tracked licenses nearing expiry via a GitHub issue.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Read repository coordinates from the environment ([`config`]), unless `--dry-run`.
//! 3. Load the license inventory ([`loader`]).
//! 4. Select licenses expiring within the window ([`filter`]).
//! 5. If any matched, render and file one summary issue ([`notify`]).
//! 6. Exit `0` (ran clean, issue filed or nothing to do), `1` (load, filter,
//!    or issue-creation failure), or `2` (missing environment configuration).

mod cli;
mod config;
mod filter;
mod loader;
mod models;
mod notify;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use config::GithubConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration errors are detected before any pipeline work and get a
    // distinct exit code so the scheduler can tell them from a bad inventory.
    let github = if cli.dry_run {
        None
    } else {
        match GithubConfig::from_env() {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("{} {}", "[CONFIG]".red().bold(), e);
                std::process::exit(2);
            }
        }
    };

    let licenses = loader::load_licenses(&cli.path)?;
    if !cli.quiet {
        println!("Loaded {} licenses from {}", licenses.len(), cli.path.display());
    }

    let today = chrono::Local::now().date_naive();
    let expiring = filter::expiring_within(&licenses, today, cli.days)?;
    if !cli.quiet {
        println!("Found {} expiring licenses", expiring.len());
    }

    if expiring.is_empty() {
        if !cli.quiet {
            println!("No licenses expiring within the next {} days", cli.days);
        }
        return Ok(());
    }

    let title = notify::format::issue_title(&expiring);
    let body = notify::format::issue_body(&expiring, cli.days);

    match github {
        // --dry-run: render locally, touch nothing
        None => println!("\n{}\n\n{}", title.bold(), body),
        Some(github) => {
            let client = notify::github::build_client()?;
            let issue_url =
                notify::github::create_issue(&client, &github, &title, &body).await?;
            println!("{} Created GitHub issue: {}", "✓".green(), issue_url);
        }
    }

    Ok(())
}
