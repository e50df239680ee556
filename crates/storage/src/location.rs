use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::repository::{QuestionBankSource, Storage, StorageError};
use crate::sqlite::SqliteRepository;
use crate::workbook::JsonWorkbook;

const SQLITE_EXTENSIONS: [&str; 3] = ["sqlite", "sqlite3", "db"];

/// Where a question bank lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankLocation {
    /// A `SQLite` database. `file` is the on-disk path when the URL names one.
    Sqlite { url: String, file: Option<PathBuf> },
    /// A JSON export of the workbook.
    Workbook { path: PathBuf },
}

impl BankLocation {
    /// Classify a location string.
    ///
    /// `sqlite:` URLs and `.sqlite`, `.sqlite3` or `.db` paths select the
    /// `SQLite` backend; `.json` paths select the workbook backend.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::UnsupportedLocation` for anything else.
    pub fn parse(raw: &str) -> Result<Self, StorageError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(StorageError::UnsupportedLocation(raw.to_owned()));
        }

        if raw.starts_with("sqlite:") {
            return Ok(BankLocation::Sqlite {
                url: raw.to_owned(),
                file: sqlite_file(raw),
            });
        }

        let path = Path::new(raw);
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(BankLocation::Workbook {
                path: path.to_path_buf(),
            }),
            Some(ext) if SQLITE_EXTENSIONS.contains(&ext) => Ok(BankLocation::Sqlite {
                url: format!("sqlite://{raw}"),
                file: Some(path.to_path_buf()),
            }),
            _ => Err(StorageError::UnsupportedLocation(raw.to_owned())),
        }
    }
}

/// Extract the database file from a `sqlite:` URL. In-memory URLs have none.
fn sqlite_file(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let rest = rest.strip_prefix("file:").unwrap_or(rest);
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    let in_memory = path.is_empty()
        || path == ":memory:"
        || query.is_some_and(|q| q.split('&').any(|pair| pair == "mode=memory"));
    if in_memory {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

impl fmt::Display for BankLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankLocation::Sqlite { url, .. } => f.write_str(url),
            BankLocation::Workbook { path } => write!(f, "{}", path.display()),
        }
    }
}

impl std::str::FromStr for BankLocation {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Storage {
    /// Open a read-only question bank source at `location`.
    ///
    /// Nothing is created: a missing database or workbook file is reported
    /// as `StorageError::MissingSource`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source is missing or cannot be opened.
    pub async fn open(
        location: &BankLocation,
    ) -> Result<Arc<dyn QuestionBankSource>, StorageError> {
        tracing::info!(%location, "opening question bank");
        match location {
            BankLocation::Sqlite { url, file } => {
                if let Some(file) = file {
                    match tokio::fs::try_exists(file).await {
                        Ok(true) => {}
                        Ok(false) => {
                            return Err(StorageError::MissingSource(file.display().to_string()));
                        }
                        Err(e) => {
                            return Err(StorageError::Connection(format!(
                                "{}: {e}",
                                file.display()
                            )));
                        }
                    }
                }
                let repo = SqliteRepository::connect(url)
                    .await
                    .map_err(|e| StorageError::Connection(e.to_string()))?;
                Ok(Arc::new(repo))
            }
            BankLocation::Workbook { path } => {
                let workbook = JsonWorkbook::open(path).await?;
                Ok(Arc::new(workbook))
            }
        }
    }
}
