use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use convoy_cli::{ConsoleReporter, PipelineOptions, PipelineRun, run_pipeline};
use convoy_model::Outcome;

/// Stages run and the outcomes they reported.
pub struct ConvertResult {
    pub run: PipelineRun,
    pub outcomes: Vec<Outcome>,
}

pub fn run_convert(file: Option<&Path>) -> Result<ConvertResult> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => {
            let stdin = io::stdin();
            prompt_file_name(&mut stdin.lock(), &mut io::stdout())?
        }
    };
    let span = info_span!("convert", file = %path.display());
    let _guard = span.enter();

    let options = PipelineOptions::default();
    let mut reporter = ConsoleReporter::stdout();
    let run = run_pipeline(&path, &options, &mut reporter)?;
    info!(stages = run.stages.len(), "pipeline finished");
    Ok(ConvertResult {
        run,
        outcomes: reporter.outcomes().to_vec(),
    })
}

/// Print the prompt and read one line. Only the line terminator is removed.
fn prompt_file_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    writeln!(output, "Input file name").context("write prompt")?;
    output.flush().context("flush prompt")?;
    let mut line = String::new();
    if input.read_line(&mut line).context("read file name")? == 0 {
        bail!("no file name given");
    }
    Ok(PathBuf::from(line.trim_end_matches(['\n', '\r'])))
}
