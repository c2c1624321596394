// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! eeatbot CLI - E-E-A-T & Answer Engine Optimization analyzer

use clap::{Parser, Subcommand};
use eeatbot::config::{self, Config};
use eeatbot::fetch::fetch_html;
use eeatbot::report::{banner, generate_json_report, generate_summary, generate_text_report};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// eeatbot: E-E-A-T analyzer and Answer Engine Optimization tracker
///
/// Scores a page for Experience, Expertise, Authoritativeness and
/// Trustworthiness signals and estimates readiness for answer engines.
#[derive(Parser)]
#[command(name = "eeatbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Fetch timeout in seconds (overrides configuration)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a URL for E-E-A-T signals and AEO readiness
    Analyze {
        /// Page URL (http or https)
        url: String,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze an HTML file for E-E-A-T signals
    AnalyzeFile {
        /// Path to the HTML file
        path: PathBuf,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Output format (yaml, toml)
        #[arg(long, default_value = "yaml")]
        format: String,
    },

    /// Show current configuration
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    let mut config = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Apply CLI overrides
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_secs = timeout;
    }
    if cli.no_color {
        config.output.color = false;
    }
    debug!(?config, "Effective configuration");

    match cli.command {
        Command::Analyze { url, json } => handle_analyze(&url, &config, json),
        Command::AnalyzeFile { path, json } => handle_analyze_file(&path, &config, json),
        Command::Init { format } => handle_init(&config_path, &format),
        Command::Show => handle_show(&config_path, &config),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for reports
    fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn handle_analyze(url: &str, config: &Config, json: bool) -> ExitCode {
    let color = config.output.color;

    if !json && config.output.banner {
        println!("{}", banner(color));
    }

    let html = match fetch_html(url, &config.fetch) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = eeatbot::analyze(&html, url);

    if json {
        println!("{}", generate_json_report(&result));
    } else {
        println!("{}", generate_text_report(&result, color));
    }

    ExitCode::SUCCESS
}

fn handle_analyze_file(path: &Path, config: &Config, json: bool) -> ExitCode {
    let color = config.output.color;

    if !json && config.output.banner {
        println!("{}", banner(color));
    }

    let html = match std::fs::read_to_string(path) {
        Ok(html) => html,
        Err(e) => {
            if json {
                eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("Analysis failed: {}", e);
            }
            return ExitCode::FAILURE;
        }
    };

    let result = eeatbot::analyze(&html, &path.display().to_string());

    if json {
        println!("{}", generate_json_report(&result));
    } else {
        print!("{}", generate_summary(&result, color));
    }

    ExitCode::SUCCESS
}

fn handle_init(config_path: &Path, format: &str) -> ExitCode {
    let path = if format == "toml" {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    match config::write_default_config(&path) {
        Ok(()) => {
            println!("Created configuration file: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error creating config: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_show(config_path: &Path, config: &Config) -> ExitCode {
    println!("\nCurrent Configuration:");
    println!("======================\n");

    println!("File: {}", config_path.display());
    println!();

    println!("Fetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);
    println!();

    println!("Output:");
    println!("  Color: {}", config.output.color);
    println!("  Banner: {}", config.output.banner);

    ExitCode::SUCCESS
}
