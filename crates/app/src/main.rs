use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::parse_seconds;
use services::{IntervalTicker, ProviderConfig, QuizLoopService, Ticker};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeconds { raw: String },
    InvalidUrl { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeconds { raw } => write!(f, "invalid --seconds value: {raw}"),
            ArgsError::InvalidUrl { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_url(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidUrl { flag, raw: value });
    }
    Ok(value)
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    ticker: Arc<dyn Ticker>,
    start_sample: bool,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn ticker(&self) -> Arc<dyn Ticker> {
        Arc::clone(&self.ticker)
    }

    fn start_sample_on_launch(&self) -> bool {
        self.start_sample
    }
}

struct Args {
    config: ProviderConfig,
    start_sample: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--trivia-url <url>] [--joke-url <url>] [--seconds <n>] [--sample]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --trivia-url {}", services::config::DEFAULT_TRIVIA_URL);
    eprintln!("  --joke-url {}", services::config::DEFAULT_JOKE_URL);
    eprintln!("  --seconds 25");
    eprintln!();
    eprintln!("Environment (a .env file is read when present):");
    eprintln!("  QUIZ_TRIVIA_URL, QUIZ_JOKE_URL, QUIZ_SECONDS_PER_QUESTION, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = ProviderConfig::from_env();
        let mut start_sample = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--trivia-url" => config.trivia_url = require_url(args, "--trivia-url")?,
                "--joke-url" => config.joke_url = require_url(args, "--joke-url")?,
                "--seconds" => {
                    let value = require_value(args, "--seconds")?;
                    config.seconds_per_question = parse_seconds(&value)
                        .ok_or(ArgsError::InvalidSeconds { raw: value })?;
                }
                "--sample" => start_sample = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config,
            start_sample,
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    info!(
        trivia_url = %parsed.config.trivia_url,
        joke_url = %parsed.config.joke_url,
        seconds_per_question = parsed.config.seconds_per_question.get(),
        "starting trivia quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop: Arc::new(QuizLoopService::from_config(&parsed.config)),
        ticker: Arc::new(IntervalTicker::default()),
        start_sample: parsed.start_sample,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
