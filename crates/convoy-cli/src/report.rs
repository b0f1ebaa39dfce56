//! Terminal outcome reporter.

use std::io::{self, Write};

use convoy_model::{Outcome, Reporter};

/// Prints each outcome as one line and keeps it for the summary table.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    outcomes: Vec<Outcome>,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            outcomes: Vec::new(),
        }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.out, "{outcome}")?;
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_line_per_outcome() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter
            .report(&Outcome::new(3, "line", "imported to", "fleet.csv"))
            .expect("print");
        reporter
            .report(&Outcome::new(1, "cell", "corrected in", "fleet[CHECKED].csv"))
            .expect("print");
        assert_eq!(reporter.outcomes().len(), 2);
        let printed = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(
            printed,
            "3 lines were imported to fleet.csv\n1 cell was corrected in fleet[CHECKED].csv\n"
        );
    }

    #[test]
    fn closed_output_is_an_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut reporter = ConsoleReporter::new(Closed);
        let error = reporter
            .report(&Outcome::new(1, "record", "inserted into", "fleet.s3db"))
            .expect_err("closed output");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(reporter.outcomes().is_empty());
    }
}
