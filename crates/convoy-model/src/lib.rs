pub mod artifact;
pub mod cell;
pub mod fields;
pub mod outcome;
pub mod table;

pub use artifact::{
    Artifact, ArtifactKind, CHECKED_MARKER, ExportPaths, database_path, delimited_path,
    export_paths, validated_path,
};
pub use cell::{CellValue, is_digits};
pub use outcome::{Outcome, RecordingReporter, Reporter};
pub use table::{IntegerTable, TextTable};
