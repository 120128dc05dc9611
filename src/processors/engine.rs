use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{ProcessingError, Result};
use crate::models::Report;
use crate::processors::AggregationState;
use crate::readers::{CorpusScanner, RecordParser};
use crate::utils::ProgressReporter;

/// Sequential fold over the corpus: scan, parse, classify, aggregate.
/// Files are processed strictly one at a time; recoverable failures are
/// skipped with a warning and the run carries on.
pub struct ProcessingEngine {
    scanner: CorpusScanner,
    parser: RecordParser,
}

impl ProcessingEngine {
    pub fn new() -> Self {
        Self {
            scanner: CorpusScanner::new(),
            parser: RecordParser::new(),
        }
    }

    pub fn process_corpus(
        &self,
        root: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<Report> {
        let start = Instant::now();
        let mut state = AggregationState::new();

        info!(root = %root.display(), "starting corpus processing");

        self.consume(self.scanner.scan(root)?, &mut state, progress)?;

        info!(
            files = state.files_processed,
            records = state.total_records,
            dirty = state.dirty_records,
            "corpus processing finished"
        );

        Ok(state.finalize(start.elapsed()))
    }

    /// Fold a stream of scan entries into the state. Separated from the
    /// scanner so path-level edge cases (duplicates, access failures) can be
    /// exercised directly.
    fn consume(
        &self,
        entries: impl Iterator<Item = Result<std::path::PathBuf>>,
        state: &mut AggregationState,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        let mut seen_paths = HashSet::new();

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(err) if err.is_recoverable() => {
                    warn!("skipping entry: {err}");
                    state.files_skipped += 1;
                    state.add_warning(err.to_string());
                    continue;
                }
                Err(err) => return Err(err),
            };

            if !seen_paths.insert(path.clone()) {
                warn!(path = %path.display(), "duplicate path skipped");
                state.files_skipped += 1;
                state.add_warning(format!("duplicate path skipped: {}", path.display()));
                continue;
            }

            match self.process_file(&path, state) {
                Ok(()) => {
                    state.files_processed += 1;
                    if let Some(progress) = progress {
                        progress.increment(1);
                    }
                }
                Err(err) if err.is_recoverable() => {
                    warn!("skipping file: {err}");
                    state.files_skipped += 1;
                    state.add_warning(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Fold one file's records into the state. A malformed file contributes
    /// no records at all, not even to the total count.
    fn process_file(&self, path: &Path, state: &mut AggregationState) -> Result<()> {
        let bytes = fs::read(path).map_err(|source| ProcessingError::Access {
            path: path.to_path_buf(),
            source,
        })?;

        let records = self.parser.parse_file(path, &bytes)?;
        debug!(path = %path.display(), records = records.len(), "parsed file");

        for record in records {
            state.fold(record);
        }
        Ok(())
    }
}

impl Default for ProcessingEngine {
    fn default() -> Self {
        Self::new()
    }
}
