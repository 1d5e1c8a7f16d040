use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use metric_core::Clock;
use services::{AppServices, GameConfig};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRounds { raw: String },
    InvalidRoundSeconds { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRounds { raw } => write!(f, "invalid --rounds value: {raw}"),
            ArgsError::InvalidRoundSeconds { raw } => {
                write!(f, "invalid --round-seconds value: {raw}")
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
    services: Arc<AppServices>,
}

impl UiApp for DesktopApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }
}

struct Args {
    game_config: GameConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--rounds <n>] [--round-seconds <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --rounds 5");
    eprintln!("  --round-seconds 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  METRICLAB_ROUNDS, METRICLAB_ROUND_SECS");
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|n| *n > 0)
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = GameConfig::default();

        if let Some(rounds) = std::env::var("METRICLAB_ROUNDS")
            .ok()
            .and_then(|value| parse_positive(&value))
        {
            config = config.with_total_rounds(rounds);
        }
        if let Some(seconds) = std::env::var("METRICLAB_ROUND_SECS")
            .ok()
            .and_then(|value| parse_positive(&value))
        {
            config = config.with_round_seconds(seconds);
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rounds" => {
                    let value = require_value(args, "--rounds")?;
                    let parsed = parse_positive(&value)
                        .ok_or(ArgsError::InvalidRounds { raw: value })?;
                    config = config.with_total_rounds(parsed);
                }
                "--round-seconds" => {
                    let value = require_value(args, "--round-seconds")?;
                    let parsed = parse_positive(&value)
                        .ok_or(ArgsError::InvalidRoundSeconds { raw: value })?;
                    config = config.with_round_seconds(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            game_config: config,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let services = Arc::new(AppServices::new(
        Clock::default_clock(),
        parsed.game_config,
    ));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("MetricLab")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
