//! High-score persistence.
//!
//! The table is a flat text file of decimal integers, one per line.  Reads
//! of a missing file give an empty table; writes overwrite the whole file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GameError, GameResult};

pub trait ScoreStore {
    fn load(&mut self) -> GameResult<Vec<u32>>;
    fn save(&mut self, scores: &[u32]) -> GameResult<()>;
}

// ── File-backed ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> GameResult<Vec<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("score file {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(GameError::io("reading score file", e)),
        };
        Ok(parse_scores(&text))
    }

    fn save(&mut self, scores: &[u32]) -> GameResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| GameError::io("creating score directory", e))?;
        }
        fs::write(&self.path, format_scores(scores))
            .map_err(|e| GameError::io("writing score file", e))
    }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// Keeps the table in memory and counts writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    pub scores: Vec<u32>,
    pub saves: usize,
}

impl MemoryScoreStore {
    pub fn with_scores(scores: Vec<u32>) -> Self {
        Self { scores, saves: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> GameResult<Vec<u32>> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &[u32]) -> GameResult<()> {
        self.scores = scores.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// ── Text format ───────────────────────────────────────────────────────────────

/// Whitespace-separated decimal integers.  Tokens that do not parse are
/// skipped with a warning.
pub fn parse_scores(text: &str) -> Vec<u32> {
    text.split_whitespace()
        .filter_map(|tok| match tok.parse() {
            Ok(score) => Some(score),
            Err(_) => {
                tracing::warn!(token = tok, "ignoring malformed score entry");
                None
            }
        })
        .collect()
}

pub fn format_scores(scores: &[u32]) -> String {
    scores.iter().map(|s| format!("{s}\n")).collect()
}
