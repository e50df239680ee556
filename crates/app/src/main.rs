use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, BankSummary};
use storage::location::BankLocation;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_BANK: &str = "sqlite://quiz.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "app")]
#[command(about = "Ideal-self quiz: find the gap between who you are and who you want to be", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    bank: BankArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Launch the desktop quiz (default)
    Ui,
    /// Load and validate the question bank, then print what it contains
    Check {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Args)]
struct BankArgs {
    /// SQLite URL or file, or a JSON workbook
    #[arg(long, global = true, env = "QUIZ_BANK", default_value = DEFAULT_BANK)]
    bank: BankLocation,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn load(location: &BankLocation) -> Result<AppServices, Box<dyn std::error::Error>> {
    let services = AppServices::open(location).await?;
    Ok(services)
}

fn print_summary(location: &BankLocation, summary: &BankSummary) {
    println!("bank: {location}");
    println!(
        "current-state questions: {} ({})",
        summary.current_questions,
        summary.current_types.join(", ")
    );
    println!(
        "ideal-state questions:   {} ({})",
        summary.ideal_questions,
        summary.ideal_types.join(", ")
    );
    println!(
        "improvement rows:        {} ({})",
        summary.recommendation_types.len(),
        summary.recommendation_types.join(", ")
    );
}

fn launch(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("나의 추구미와 가까워지기")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let location = cli.bank.bank;
    let services = load(&location).await?;

    match cli.command {
        None | Some(Command::Ui) => launch(services),
        Some(Command::Check { json }) => {
            let summary = services.bank().summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&location, &summary);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli).await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_launches_the_ui_with_the_default_bank() {
        let cli = Cli::try_parse_from(["app"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.bank.bank, BankLocation::parse(DEFAULT_BANK).unwrap());
    }

    #[test]
    fn check_accepts_a_workbook_and_json_flag() {
        let cli = Cli::try_parse_from(["app", "check", "--bank", "bank.json", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { json: true })));
        assert!(matches!(cli.bank.bank, BankLocation::Workbook { .. }));
    }

    #[test]
    fn bank_before_the_subcommand_is_the_bank_that_gets_loaded() {
        let cli = Cli::try_parse_from(["app", "--bank", "bank.json", "check"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { json: false })));
        assert_eq!(cli.bank.bank, BankLocation::parse("bank.json").unwrap());

        let cli = Cli::try_parse_from(["app", "ui", "--bank", "other.json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Ui)));
        assert_eq!(cli.bank.bank, BankLocation::parse("other.json").unwrap());
    }

    #[test]
    fn unsupported_bank_is_a_usage_error() {
        let err = Cli::try_parse_from(["app", "ui", "--bank", "bank.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
