use partner_match::cli::{self, PromptError};
use partner_match::config::{LoggingSettings, Settings};
use partner_match::core::Matcher;
use partner_match::services::{load_roster, save_pairing, ExportError, RosterError};
use std::io;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Anything that stops a run before it completes
#[derive(Debug, Error)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Could not load roster: {0}")]
    Roster(#[from] RosterError),

    #[error("{0}")]
    Prompt(#[from] PromptError),

    #[error("Could not export pairing: {0}")]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn init_logging(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    // RUST_LOG wins over everything else when present
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let students = load_roster(&settings.roster.path, &settings.roster_layout())?;

    let matcher = Matcher::new(settings.eligibility_rules());
    info!("Matcher initialized with rules: {:?}", matcher.rules());
    let matrix = matcher.score(&students);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let choice = cli::read_cutoff(&mut input, &mut output)?;
    // An invalid export answer ends the run before anything is written
    let export = cli::read_export(&mut input, &mut output)?;

    let report = matcher.run_with_matrix(&matrix, choice);
    cli::print_report(&mut output, &students, &report)?;

    if let (Some(request), Some(matching)) = (export.request(), &report.matching) {
        save_pairing(&request.path, &students, matching)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("{}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Starting partner matching...");

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
