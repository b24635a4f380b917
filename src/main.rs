// Copyright 2026 Gavel Contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use gavel::cli;
use gavel::download::DEFAULT_IMAGE_DIR;
use gavel::export::DEFAULT_EXPORT_FILE;
use gavel::selectors::SelectorProfile;

#[derive(Parser)]
#[command(
    name = "gavel",
    about = "Gavel — art-auction catalogue scraper",
    version,
    after_help = "Run 'gavel <command> --help' for details on each command.\nRun 'gavel' with no command to enter interactive mode."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(flatten)]
    selectors: SelectorArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// CSS selector overrides for retargeting the extractor without code changes.
#[derive(Args)]
struct SelectorArgs {
    /// Listing container selector (default "div.art-item")
    #[arg(long, global = true)]
    item_selector: Option<String>,

    /// Artist-name selector inside a container (default "span.artist-name")
    #[arg(long, global = true)]
    artist_selector: Option<String>,

    /// Title selector inside a container (default "span.art-title")
    #[arg(long, global = true)]
    title_selector: Option<String>,

    /// Image selector inside a container (default "img")
    #[arg(long, global = true)]
    image_selector: Option<String>,
}

impl SelectorArgs {
    fn profile(&self) -> SelectorProfile {
        let mut profile = SelectorProfile::default();
        if let Some(s) = &self.item_selector {
            profile.item = s.clone();
        }
        if let Some(s) = &self.artist_selector {
            profile.artist = s.clone();
        }
        if let Some(s) = &self.title_selector {
            profile.title = s.clone();
        }
        if let Some(s) = &self.image_selector {
            profile.image = s.clone();
        }
        profile
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a listings page and print the extracted catalogue
    Fetch {
        /// Auction page URL
        url: String,
    },
    /// Fetch a listings page and download every referenced image
    Download {
        /// Auction page URL
        url: String,
        /// Directory for downloaded images
        #[arg(long, default_value = DEFAULT_IMAGE_DIR)]
        out_dir: PathBuf,
    },
    /// Fetch a listings page and export the catalogue as CSV
    Export {
        /// Auction page URL
        url: String,
        /// Output CSV path
        #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("GAVEL_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("GAVEL_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("GAVEL_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("GAVEL_NO_COLOR", "1");
    }

    init_tracing(cli.verbose);

    let profile = cli.selectors.profile();

    let result = match cli.command {
        // No subcommand → launch interactive mode
        None => cli::repl::run(profile).await,

        Some(Commands::Fetch { url }) => cli::fetch_cmd::run(&url, &profile).await,
        Some(Commands::Download { url, out_dir }) => {
            cli::download_cmd::run(&url, &profile, &out_dir).await
        }
        Some(Commands::Export { url, output }) => {
            cli::export_cmd::run(&url, &profile, &output).await
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "gavel", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gavel=debug" } else { "gavel=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
