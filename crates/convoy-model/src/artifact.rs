//! Pipeline artifacts and the file naming rules that connect them.
//!
//! Every stage consumes one artifact and produces the next. The stage of an
//! artifact is carried by its [`Artifact`] tag; the file name suffix is only
//! consulted once, when the user hands a path to the dispatcher.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Spreadsheet extension.
pub const SPREADSHEET_SUFFIX: &str = ".xlsx";

/// Delimited text extension.
pub const DELIMITED_SUFFIX: &str = ".csv";

/// Marker embedded before the extension once validation has run.
pub const CHECKED_MARKER: &str = "[CHECKED]";

/// Database extension.
pub const DATABASE_SUFFIX: &str = ".s3db";

/// Markup export extension.
pub const MARKUP_SUFFIX: &str = ".xml";

/// Data-interchange export extension.
pub const DATA_SUFFIX: &str = ".json";

/// Pipeline position of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Spreadsheet,
    Delimited,
    ValidatedDelimited,
    Database,
}

impl ArtifactKind {
    /// Human-readable label used in logs and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spreadsheet => "spreadsheet",
            Self::Delimited => "delimited",
            Self::ValidatedDelimited => "validated delimited",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file on disk tagged with its pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Spreadsheet(PathBuf),
    Delimited(PathBuf),
    ValidatedDelimited(PathBuf),
    Database(PathBuf),
}

impl Artifact {
    /// Classify a path by its file name.
    ///
    /// Checks run in a fixed order: database, validated delimited, plain
    /// delimited, spreadsheet. The marker check precedes the plain `.csv`
    /// check so a validated file is never taken for an unvalidated one.
    /// Returns `None` for anything else.
    pub fn classify(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = file_name(&path);
        if name.ends_with(DATABASE_SUFFIX) {
            Some(Self::Database(path))
        } else if name.ends_with(&checked_suffix()) {
            Some(Self::ValidatedDelimited(path))
        } else if name.ends_with(DELIMITED_SUFFIX) {
            Some(Self::Delimited(path))
        } else if name.ends_with(SPREADSHEET_SUFFIX) {
            Some(Self::Spreadsheet(path))
        } else {
            None
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Spreadsheet(_) => ArtifactKind::Spreadsheet,
            Self::Delimited(_) => ArtifactKind::Delimited,
            Self::ValidatedDelimited(_) => ArtifactKind::ValidatedDelimited,
            Self::Database(_) => ArtifactKind::Database,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Spreadsheet(path)
            | Self::Delimited(path)
            | Self::ValidatedDelimited(path)
            | Self::Database(path) => path,
        }
    }
}

/// Paths of the two terminal exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub data: PathBuf,
    pub markup: PathBuf,
}

/// `fleet.xlsx` -> `fleet.csv`.
///
/// Only the final extension is replaced.
pub fn delimited_path(spreadsheet: &Path) -> PathBuf {
    spreadsheet.with_extension(DELIMITED_SUFFIX.trim_start_matches('.'))
}

/// `fleet.csv` -> `fleet[CHECKED].csv`.
pub fn validated_path(delimited: &Path) -> PathBuf {
    let base = strip_suffix(delimited, DELIMITED_SUFFIX);
    sibling(delimited, format!("{base}{}", checked_suffix()))
}

/// `fleet[CHECKED].csv` -> `fleet.s3db`.
pub fn database_path(validated: &Path) -> PathBuf {
    let base = strip_suffix(validated, &checked_suffix());
    sibling(validated, format!("{base}{DATABASE_SUFFIX}"))
}

/// `fleet.s3db` -> `fleet.json` and `fleet.xml`.
pub fn export_paths(database: &Path) -> ExportPaths {
    let base = strip_suffix(database, DATABASE_SUFFIX);
    ExportPaths {
        data: sibling(database, format!("{base}{DATA_SUFFIX}")),
        markup: sibling(database, format!("{base}{MARKUP_SUFFIX}")),
    }
}

fn checked_suffix() -> String {
    format!("{CHECKED_MARKER}{DELIMITED_SUFFIX}")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name without `suffix`, falling back to the stem when it is absent.
fn strip_suffix(path: &Path, suffix: &str) -> String {
    let name = file_name(path);
    match name.strip_suffix(suffix) {
        Some(base) => base.to_string(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or(name),
    }
}

fn sibling(path: &Path, name: String) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
