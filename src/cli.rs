//! CLI interface for the resume match client

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-match")]
#[command(about = "Match a resume against a job role and find open positions")]
#[command(long_about = "Upload a resume to the analysis service, review matched and missing skills, and search jobs for the analyzed role")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Analysis service base URL (overrides the configuration)
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume for a job role
    Analyze {
        /// Path to the resume file (PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target job role
        #[arg(short = 'j', long)]
        role: String,

        /// Output format: console, json, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendered output to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Search jobs for the analyzed role afterwards
        #[arg(long)]
        jobs: bool,

        /// Location used by the job search
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Line-driven page session on stdin
    Interactive,

    /// List the selectable job roles
    Roles,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "server.base_url")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Choose a file as if through the browse dialog
    File(PathBuf),
    /// Drop one or more files on the drop zone
    Drop(Vec<PathBuf>),
    Role(String),
    Location(String),
    Analyze,
    Jobs,
    /// Save an HTML snapshot of the page
    Page(PathBuf),
    Help,
    Quit,
}

pub const SESSION_HELP: &str = "\
Commands:
  file <path>          choose a resume file
  drop <path> [...]    drop files on the drop zone
  role <name>          select the target job role
  location <text>      set the job search location
  analyze              submit the resume for analysis
  jobs                 search jobs for the analyzed role
  page <path>          save an HTML snapshot of the page
  help                 show this help
  quit                 leave the session";

pub fn parse_session_command(line: &str) -> anyhow::Result<SessionCommand> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "file" | "browse" => SessionCommand::File(required(rest, "file").map(PathBuf::from)?),
        "drop" => {
            let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
            if paths.is_empty() {
                bail!("drop expects at least one path");
            }
            SessionCommand::Drop(paths)
        }
        "role" => SessionCommand::Role(required(rest, "role")?.to_string()),
        "location" => SessionCommand::Location(rest.to_string()),
        "analyze" | "submit" => SessionCommand::Analyze,
        "jobs" | "search" => SessionCommand::Jobs,
        "page" => SessionCommand::Page(required(rest, "page").map(PathBuf::from)?),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        "" => bail!("empty command"),
        other => bail!("unknown command '{}', type 'help'", other),
    };
    Ok(command)
}

fn required<'a>(value: &'a str, verb: &str) -> anyhow::Result<&'a str> {
    Some(value)
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{} expects an argument", verb))
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, html", format)),
    }
}
