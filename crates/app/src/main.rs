use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{QuestionBank, QuestionDraft};
use ui::{App, UiApp, build_app_context};

/// Shipped question set, used when no `--questions` file is given.
const DEFAULT_QUESTIONS: &str = include_str!("../questions/default.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw}")
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question set");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS");
}

struct Args {
    questions_path: Option<PathBuf>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions_path = std::env::var("QUIZ_QUESTIONS").ok().map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestionsPath { raw: value });
                    }
                    questions_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { questions_path })
    }
}

struct DesktopApp {
    question_bank: Arc<QuestionBank>,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }
}

/// Parse and validate a JSON array of question drafts into a bank.
fn parse_bank(raw: &str) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
    Ok(QuestionBank::from_drafts(drafts)?)
}

fn load_bank(args: &Args) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    match &args.questions_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
            parse_bank(&raw)
        }
        None => parse_bank(DEFAULT_QUESTIONS),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // The bank is loaded and validated once; everything after this point
    // works with an immutable catalog for the process lifetime.
    let question_bank = Arc::new(load_bank(&args)?);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { question_bank });
    let context = build_app_context(&app);

    // Explicitly disable always-on-top so the app doesn't behave like a
    // modal window in dev setups where that is the default.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
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
