use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    Clock, DEFAULT_MIN_MATCHES, MatcherService, QuestionnaireService,
    load_preferences_from_file,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingPreferences,
    InvalidMinMatches { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingPreferences => write!(f, "match requires --preferences <file>"),
            ArgsError::InvalidMinMatches { raw } => {
                write!(f, "invalid --min-matches value: {raw}")
            }
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

struct DesktopApp {
    questionnaire: Arc<QuestionnaireService>,
    matcher: Arc<MatcherService>,
}

impl UiApp for DesktopApp {
    fn questionnaire(&self) -> Arc<QuestionnaireService> {
        Arc::clone(&self.questionnaire)
    }

    fn matcher(&self) -> Arc<MatcherService> {
        Arc::clone(&self.matcher)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui");
    eprintln!("  cargo run -p app -- match --preferences <file> [--min-matches <n>]");
    eprintln!();
    eprintln!("Defaults for match:");
    eprintln!("  --min-matches {DEFAULT_MIN_MATCHES}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PAWMATCH_MIN_MATCHES, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Match,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "match" => Some(Self::Match),
            _ => None,
        }
    }
}

struct MatchArgs {
    preferences: PathBuf,
    min_matches: usize,
}

impl MatchArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut preferences: Option<PathBuf> = None;
        let mut min_matches = std::env::var("PAWMATCH_MIN_MATCHES")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MIN_MATCHES);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--preferences" => {
                    let value = require_value(args, "--preferences")?;
                    preferences = Some(PathBuf::from(value));
                }
                "--min-matches" => {
                    let value = require_value(args, "--min-matches")?;
                    min_matches = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidMinMatches { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let preferences = preferences.ok_or(ArgsError::MissingPreferences)?;
        Ok(Self {
            preferences,
            min_matches,
        })
    }
}

fn parse_ui_args(args: &mut impl Iterator<Item = String>) -> Result<(), ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }
    let mut iter = argv.into_iter();

    match cmd {
        Command::Ui => {
            parse_ui_args(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;

            let questionnaire = Arc::new(QuestionnaireService::new(Clock::default_clock()));
            let matcher = Arc::new(MatcherService::new()?);

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                questionnaire,
                matcher,
            });
            let context = build_app_context(&app);

            // Explicitly disable always-on-top so the app doesn't behave
            // like a modal window in dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("PawMatch")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Match => {
            let parsed = MatchArgs::parse(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;

            let preferences = load_preferences_from_file(&parsed.preferences)?;
            let matcher = MatcherService::new()?.with_min_matches(parsed.min_matches);
            let report = matcher.match_preferences(&preferences)?;

            // Same shape the desktop summary screen shows: the top five
            // ranked entries.
            let top = &report.ranked[..report.ranked.len().min(5)];
            println!("{}", serde_json::to_string_pretty(top)?);
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
