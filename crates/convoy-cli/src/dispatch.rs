//! Pipeline dispatcher.
//!
//! Classifies the starting file once, then follows the artifact each
//! converter returns until the terminal stage.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, error, info_span};

use convoy_model::{Artifact, ArtifactKind, Reporter};

use crate::error::Result;
use crate::pipeline::{PipelineOptions, advance};

/// One converter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRecord {
    pub kind: ArtifactKind,
    pub input: PathBuf,
    pub duration: Duration,
}

/// Stages run, in order. Empty when the starting name was not recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineRun {
    pub stages: Vec<StageRecord>,
}

impl PipelineRun {
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn kinds(&self) -> Vec<ArtifactKind> {
        self.stages.iter().map(|stage| stage.kind).collect()
    }
}

/// Run the pipeline from `start` through the terminal stage.
///
/// A name that matches no stage is not an error: nothing runs and the
/// returned run is empty.
pub fn run_pipeline(
    start: &Path,
    options: &PipelineOptions,
    reporter: &mut dyn Reporter,
) -> Result<PipelineRun> {
    let mut run = PipelineRun::default();
    let Some(mut current) = Artifact::classify(start) else {
        debug!(path = %start.display(), "file name matches no stage");
        return Ok(run);
    };

    loop {
        let kind = current.kind();
        let span = info_span!("stage", stage = %kind, input = %current.path().display());
        let started = Instant::now();
        let next = span
            .in_scope(|| advance(&current, options, reporter))
            .inspect_err(|err| error!(stage = %kind, category = err.category(), "{err}"))?;
        run.stages.push(StageRecord {
            kind,
            input: current.path().to_path_buf(),
            duration: started.elapsed(),
        });
        match next {
            Some(artifact) => current = artifact,
            None => break,
        }
    }
    Ok(run)
}
