use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, MicPermission, RecordingStarted, SimulationSettings};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};
use voice_core::model::{Consent, Page, Role};
use voice_core::{NavAction, Session};

/// How long the scripted walkthrough holds each recording open.
const WALKTHROUGH_ANSWER_TIME: Duration = Duration::from_millis(300);

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMillis { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMillis { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected milliseconds)")
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

fn parse_millis(raw: String, flag: &'static str) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidMillis { flag, raw })
}

fn env_millis(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn env_flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui          [--login-delay-ms <ms>] [--analysis-delay-ms <ms>] [--deny-microphone]");
    eprintln!("  cargo run -p app -- walkthrough [--login-delay-ms <ms>] [--analysis-delay-ms <ms>] [--deny-microphone]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --login-delay-ms 1500");
    eprintln!("  --analysis-delay-ms 3000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VOICECARE_LOGIN_DELAY_MS, VOICECARE_ANALYSIS_DELAY_MS, VOICECARE_DENY_MICROPHONE");
    eprintln!("  RUST_LOG (default: app=info,services=info,ui=info,voice_core=info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Walkthrough,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "walkthrough" => Some(Self::Walkthrough),
            _ => None,
        }
    }
}

struct Args {
    settings: SimulationSettings,
}

impl Args {
    /// Environment first, flags override.
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut settings = SimulationSettings::default();
        if let Some(delay) = env_millis("VOICECARE_LOGIN_DELAY_MS") {
            settings = settings.with_login_delay(delay);
        }
        if let Some(delay) = env_millis("VOICECARE_ANALYSIS_DELAY_MS") {
            settings = settings.with_analysis_delay(delay);
        }
        if env_flag("VOICECARE_DENY_MICROPHONE") {
            settings = settings.with_microphone(MicPermission::Denied);
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--login-delay-ms" => {
                    let value = require_value(args, "--login-delay-ms")?;
                    settings = settings.with_login_delay(parse_millis(value, "--login-delay-ms")?);
                }
                "--analysis-delay-ms" => {
                    let value = require_value(args, "--analysis-delay-ms")?;
                    settings =
                        settings.with_analysis_delay(parse_millis(value, "--analysis-delay-ms")?);
                }
                "--deny-microphone" => {
                    settings = settings.with_microphone(MicPermission::Denied);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { settings })
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info,ui=info,voice_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn launch_ui(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("VoiceCare")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

/// Headless run of the happy path: sign in as a user, open the quiz, answer every prompt.
async fn walkthrough(services: AppServices) -> Result<(), Box<dyn std::error::Error>> {
    let login = services.login();
    let quiz = services.quiz();

    let session = Session::new().apply(NavAction::SelectRole(Role::User))?;
    let session = login.login(&session, Consent::Granted).await?;
    let session = session.apply(NavAction::Navigate(Page::Quiz))?;
    info!(screen = session.screen().as_str(), page = ?session.page(), "signed in");

    let mut run = quiz.start_run();
    while !run.run().is_complete() {
        let prompt = run.run().current_prompt().unwrap_or_default().to_string();
        info!(index = run.run().prompt_index(), %prompt, "prompt");

        let RecordingStarted { sampler } = quiz.start_recording(&mut run).await?;
        let mut peak = 0_u8;
        let meter = sampler.run(|level| peak = peak.max(level));
        let stop = async {
            tokio::time::sleep(WALKTHROUGH_ANSWER_TIME).await;
            quiz.stop_recording(&mut run)
        };
        let (exit, stopped) = tokio::join!(meter, stop);
        stopped?;
        debug!(?exit, peak, "level meter finished");

        if let Some(audio) = run.run().audio() {
            info!(?audio, "recorded");
        }
        let outcome = quiz.submit_for_analysis(&mut run).await?;
        info!(?outcome, "analyzed");
    }

    for answer in run.run().answers() {
        println!("{}", answer.label());
    }

    let session = session.apply(NavAction::Logout)?;
    info!(screen = session.screen().as_str(), "logged out");
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
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

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    info!(?cmd, settings = ?parsed.settings, "starting");
    let services = AppServices::simulated(parsed.settings, Clock::system())?;

    match cmd {
        Command::Ui => {
            launch_ui(services);
            Ok(())
        }
        Command::Walkthrough => tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?
            .block_on(walkthrough(services)),
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
