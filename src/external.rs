//! Scoring through a separate native scorer binary.
//!
//! The program is called as `<program> <track.csv> [bonus.csv]` and has to
//! print a single JSON object
//! `{"score_km": .., "points": .., "start_index": .., "end_index": ..}`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::export::write_track;
use crate::score::{ScoreResult, Strategy};
use crate::track::Track;

#[derive(Debug, Deserialize)]
struct ProcessOutput {
    score_km: f64,
    points: f64,
    start_index: usize,
    end_index: usize,
}

#[derive(Debug, Clone)]
pub struct ExternalScorer {
    pub program: PathBuf,
    pub bonus_file: Option<PathBuf>,
}

impl ExternalScorer {
    pub fn new<P: Into<PathBuf>>(program: P) -> ExternalScorer {
        ExternalScorer { program: program.into(), bonus_file: None }
    }

    /// Writes the track to `track_csv` and runs the scorer on it
    pub fn score<P: AsRef<Path>>(&self, track: &Track, track_csv: P) -> Result<ScoreResult> {
        let track_csv = track_csv.as_ref();

        let input_failure = |err: &dyn std::fmt::Display| {
            Error::scoring_process(format!("cannot write scorer input {:?}: {}", track_csv, err))
        };

        let file = File::create(track_csv).map_err(|err| input_failure(&err))?;
        write_track(BufWriter::new(file), track).map_err(|err| input_failure(&err))?;

        let mut command = Command::new(&self.program);
        command.arg(track_csv);
        if let Some(bonus_file) = &self.bonus_file {
            command.arg(bonus_file);
        }

        debug!("Running {:?}", command);
        let output = command.output()
            .map_err(|err| Error::scoring_process(format!("cannot run {:?}: {}", self.program, err)))?;

        if !output.status.success() {
            return Err(Error::scoring_process(format!(
                "{:?} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim(),
            )));
        }

        let result: ProcessOutput = serde_json::from_slice(&output.stdout)
            .map_err(|err| Error::scoring_process(format!("unparsable output: {}", err)))?;
        trace!("Scorer output: {:?}", result);

        parse_output(track, result)
    }
}

fn parse_output(track: &Track, output: ProcessOutput) -> Result<ScoreResult> {
    if output.start_index >= track.len() || output.end_index >= track.len() {
        return Err(Error::scoring_process(format!(
            "fix indices {}/{} out of range for {} fixes",
            output.start_index, output.end_index, track.len(),
        )));
    }

    if output.score_km < 0. || !output.score_km.is_finite() || !output.points.is_finite() {
        return Err(Error::scoring_process(format!("invalid score {} / {}", output.score_km, output.points)));
    }

    Ok(ScoreResult::new(
        track,
        Strategy::MaxPair,
        output.score_km,
        output.points,
        output.start_index,
        output.end_index,
    ))
}
