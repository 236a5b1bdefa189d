//! Resume match: client for the resume analysis service

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use resume_match::cli::{self, Cli, Commands, ConfigAction, SessionCommand};
use resume_match::client::{AnalysisService, HttpAnalysisService};
use resume_match::config::{Config, OutputFormat};
use resume_match::input::SelectedFile;
use resume_match::output::ReportGenerator;
use resume_match::{FlowOutcome, MatchClientError, PageController, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            role,
            output,
            save,
            jobs,
            location,
        } => {
            let format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(MatchClientError::InvalidInput)?,
                None => config.output.format,
            };
            if !config.has_role(&role) {
                warn!("'{}' is not one of the configured roles", role);
            }

            let mut page = new_controller(&config)?;
            page.browse_files(vec![SelectedFile::load(&resume).await?]);
            page.select_job_role(&role);
            page.set_location(location.as_deref().unwrap_or(&config.ui.default_location));

            if analyze(&mut page, format == OutputFormat::Console).await != FlowOutcome::Completed {
                return Err(MatchClientError::AnalysisFailed(resume.display().to_string()));
            }
            if jobs {
                search_jobs(&mut page).await;
            }

            let generator = ReportGenerator::new(config.ui.color_output && save.is_none(), config.output.include_styles);
            let rendered = render(&page, &generator, format, jobs)?;
            match save {
                Some(path) => {
                    tokio::fs::write(&path, rendered).await?;
                    println!("💾 Saved {:?} output to {}", format, path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Interactive => run_interactive(&config).await?,

        Commands::Roles => {
            println!("🎯 Job roles:");
            for role in &config.roles {
                println!("  • {}", role);
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                println!("📁 {}", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| MatchClientError::Configuration(e.to_string()))?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset to defaults");
            }
            ConfigAction::Set { key, value } => {
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn new_controller(config: &Config) -> Result<PageController<HttpAnalysisService>> {
    let service = HttpAnalysisService::from_config(&config.server)?;
    info!("Using analysis service at {}", service.base_url());
    Ok(PageController::new(service, Duration::from_millis(config.ui.counter_step_ms)).with_roles(config.roles.clone()))
}

fn loader(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Alerts block: the message is printed before anything else happens.
fn show_alert<S: AnalysisService>(page: &mut PageController<S>) {
    if let Some(message) = page.view_mut().take_alert() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.bold());
    }
}

async fn analyze<S: AnalysisService>(page: &mut PageController<S>, animate: bool) -> FlowOutcome {
    let spinner = loader("Analyzing resume...");
    let outcome = page.submit().await;
    spinner.finish_and_clear();
    show_alert(page);

    if outcome == FlowOutcome::Completed {
        if let Some(scroll) = page.view_mut().take_scroll_request() {
            debug!("Scrolling {} into view", scroll.element_id);
        }
        if animate {
            animate_counter(page).await;
        } else {
            page.view_mut().counter_mut().finish().await;
        }
    }
    outcome
}

/// Mirror the counter animation on a progress bar until it settles.
async fn animate_counter<S: AnalysisService>(page: &PageController<S>) {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("Match {bar:40.cyan/blue} {msg}").unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let counter = page.view().counter();
    let mut frames = counter.subscribe();
    let update = |label: String| {
        let value = label.trim_end_matches('%').parse::<f64>().unwrap_or(0.0);
        bar.set_position(value.clamp(0.0, 100.0) as u64);
        bar.set_message(label);
    };

    loop {
        update(frames.borrow_and_update().clone());
        if !counter.is_running() {
            break;
        }
        // The last frame can land between the check and the wait.
        let _ = tokio::time::timeout(Duration::from_millis(50), frames.changed()).await;
    }
    update(counter.label());
    bar.finish();
}

async fn search_jobs<S: AnalysisService>(page: &mut PageController<S>) -> FlowOutcome {
    let spinner = loader("Searching jobs...");
    let outcome = page.search_jobs().await;
    spinner.finish_and_clear();
    show_alert(page);
    outcome
}

fn render<S: AnalysisService>(
    page: &PageController<S>,
    generator: &ReportGenerator,
    format: OutputFormat,
    include_jobs: bool,
) -> Result<String> {
    if format == OutputFormat::Html {
        return generator.html().format_page(&page.snapshot());
    }

    let formatter = generator.formatter(format);
    let mut rendered = match page.view().results() {
        Some(panel) => formatter.format_results(panel)?,
        None => String::new(),
    };
    if include_jobs {
        rendered.push('\n');
        rendered.push_str(&formatter.format_jobs(page.view().job_results())?);
    }
    Ok(rendered)
}

async fn load_files(paths: &[PathBuf]) -> Vec<SelectedFile> {
    let mut files = Vec::new();
    for path in paths {
        match SelectedFile::load(path).await {
            Ok(file) => files.push(file),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    files
}

async fn run_interactive(config: &Config) -> Result<()> {
    let mut page = new_controller(config)?;
    page.set_location(&config.ui.default_location);
    let generator = ReportGenerator::new(config.ui.color_output, config.output.include_styles);
    let console = generator.formatter(OutputFormat::Console);

    println!("{}", cli::SESSION_HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", ">".cyan().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match cli::parse_session_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };

        match command {
            SessionCommand::File(path) => {
                if page.browse_files(load_files(&[path]).await) {
                    println!("📄 {}", page.view().drop_zone.file_label());
                }
            }
            SessionCommand::Drop(paths) => {
                page.drag_over();
                let files = load_files(&paths).await;
                if page.drop_files(files) {
                    println!("📄 {}", page.view().drop_zone.file_label());
                }
            }
            SessionCommand::Role(role) => {
                if !config.has_role(&role) {
                    warn!("'{}' is not one of the configured roles", role);
                }
                page.select_job_role(&role);
            }
            SessionCommand::Location(location) => page.set_location(&location),
            SessionCommand::Analyze => {
                if analyze(&mut page, true).await == FlowOutcome::Completed {
                    if let Some(panel) = page.view().results() {
                        println!("{}", console.format_results(panel)?);
                    }
                }
            }
            SessionCommand::Jobs => {
                if search_jobs(&mut page).await != FlowOutcome::Blocked {
                    println!("{}", console.format_jobs(page.view().job_results())?);
                }
            }
            SessionCommand::Page(path) => {
                let html = generator.html().format_page(&page.snapshot())?;
                tokio::fs::write(&path, html).await?;
                println!("💾 Page saved to {}", path.display());
            }
            SessionCommand::Help => println!("{}", cli::SESSION_HELP),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}
