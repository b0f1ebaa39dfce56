//! Stage outcomes and the seam through which they are surfaced.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// What a stage did: `count` `noun`s `verb` `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub count: usize,
    pub noun: &'static str,
    pub verb: &'static str,
    pub path: PathBuf,
}

impl Outcome {
    pub fn new(
        count: usize,
        noun: &'static str,
        verb: &'static str,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            count,
            noun,
            verb,
            path: path.into(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (plural, was) = if self.count == 1 {
            ("", "as")
        } else {
            ("s", "ere")
        };
        write!(
            f,
            "{} {}{} w{} {} {}",
            self.count,
            self.noun,
            plural,
            was,
            self.verb,
            self.path.display()
        )
    }
}

/// Receives stage outcomes as they happen.
pub trait Reporter {
    /// Surface one outcome. A failure here fails the run.
    fn report(&mut self, outcome: &Outcome) -> io::Result<()>;
}

/// Collects outcomes in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub outcomes: Vec<Outcome>,
}

impl RecordingReporter {
    /// Rendered messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.outcomes.iter().map(ToString::to_string).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}
