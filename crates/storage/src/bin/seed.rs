use std::fmt;
use std::path::{Path, PathBuf};

use quiz_core::model::Track;
use storage::repository::{QuestionBankSource, Storage};
use storage::sqlite::SqliteRepository;
use storage::sample::sample_workbook;
use storage::workbook::JsonWorkbook;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    from: Option<PathBuf>,
    export: Option<PathBuf>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    ConflictingModes,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::ConflictingModes => write!(f, "--from and --export cannot be combined"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
struct ReadOnlyBank(String);

impl fmt::Display for ReadOnlyBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question bank is not writable: {}", self.0)
    }
}

impl std::error::Error for ReadOnlyBank {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        Self::parse_from(
            std::env::args().skip(1),
            std::env::var("QUIZ_DB_URL").ok(),
            std::env::var("QUIZ_SEED_FROM").ok(),
        )
    }

    /// `from_env` only fills in `--from` for seeding; exports ignore it.
    fn parse_from(
        args: impl IntoIterator<Item = String>,
        db_env: Option<String>,
        from_env: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = db_env.unwrap_or_else(|| "sqlite://quiz.sqlite3".into());
        let mut from = None;
        let mut export = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--from" => {
                    from = Some(PathBuf::from(require_value(&mut args, "--from")?));
                }
                "--export" => {
                    export = Some(PathBuf::from(require_value(&mut args, "--export")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if export.is_some() {
            if from.is_some() {
                return Err(ArgsError::ConflictingModes);
            }
        } else if from.is_none() {
            from = from_env.map(PathBuf::from);
        }

        Ok(Self {
            db_url,
            from,
            export,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite://quiz.sqlite3)");
    eprintln!("  --from <workbook.json>    Workbook to import (default: bundled sample)");
    eprintln!("  --export <workbook.json>  Write the current bank out as a workbook instead");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  QUIZ_DB_URL, QUIZ_SEED_FROM");
}

async fn export(
    source: &dyn QuestionBankSource,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = source.question_rows(Track::Current).await?;
    let ideal = source.question_rows(Track::Ideal).await?;
    let improvement = source.recommendation_rows().await?;
    let json = JsonWorkbook::from_records(&current, &ideal, &improvement).to_json()?;
    tokio::fs::write(path, json).await?;

    println!(
        "Exported {} current, {} ideal and {} improvement rows to {}",
        current.len(),
        ideal.len(),
        improvement.len(),
        path.display()
    );
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if let Some(path) = &args.export {
        // Exporting never creates or migrates the database.
        let repo = SqliteRepository::connect(&args.db_url).await?;
        return export(&repo, path).await;
    }

    let storage = Storage::sqlite_writable(&args.db_url).await?;

    let writer = storage
        .writer
        .clone()
        .ok_or_else(|| ReadOnlyBank(args.db_url.clone()))?;

    let workbook = match &args.from {
        Some(path) => JsonWorkbook::open(path).await?,
        None => sample_workbook()?,
    };

    let mut counts = Vec::with_capacity(Track::ALL.len());
    for track in Track::ALL {
        let rows = workbook.question_rows(track).await?;
        writer.replace_question_rows(track, &rows).await?;
        counts.push(rows.len());
    }
    let improvement = workbook.recommendation_rows().await?;
    writer.replace_recommendation_rows(&improvement).await?;

    let source = args
        .from
        .as_ref()
        .map_or_else(|| "bundled sample".to_owned(), |p| p.display().to_string());
    println!(
        "Seeded {} current, {} ideal and {} improvement rows from {source} into {}",
        counts[0],
        counts[1],
        improvement.len(),
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
