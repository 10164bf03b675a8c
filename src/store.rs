//! # Vote Store
//!
//! Durable read/modify/write access to the tally, backed by a single JSON
//! file holding exactly the two choice counts.
//!
//! ## Requirements
//!
//! - A `load` must never observe a partially written file
//! - A missing or corrupt file degrades to a zero tally instead of failing
//!   the request (the poll starts over; corruption is logged, not hidden)
//! - Write failures are returned as values and surfaced by the caller
//!
//! ## Implementation
//!
//! - Saves go through a sibling temp file followed by a `rename`, so the
//!   target path always holds either the old or the new tally in full
//! - A mutex serializes the load → increment → save sequence; without it,
//!   concurrent submissions could each read the same pre-update tally and
//!   write back independently, silently losing a vote

use std::{
    fmt, fs, io,
    path::PathBuf,
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// One of the two fixed options a vote can be cast for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Jjajangmyeon,
    Jjamppong,
}

impl Choice {
    /// Parses a form value; anything outside the two known identifiers fails.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "jjajangmyeon" => Some(Self::Jjajangmyeon),
            "jjamppong" => Some(Self::Jjamppong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jjajangmyeon => "jjajangmyeon",
            Self::Jjamppong => "jjamppong",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current vote totals. Both keys are always present; counts only ever grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub jjajangmyeon: u64,
    pub jjamppong: u64,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.jjajangmyeon + self.jjamppong
    }

    /// Bumps exactly the chosen count by one, leaving the other untouched.
    pub fn increment(mut self, choice: Choice) -> Self {
        match choice {
            Choice::Jjajangmyeon => self.jjajangmyeon += 1,
            Choice::Jjamppong => self.jjamppong += 1,
        }
        self
    }
}

/// Why a raw read produced no tally: the file was never written, or it
/// exists but cannot be trusted. `load` treats both as a zero tally but
/// only the latter is worth a warning.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("vote data file not found")]
    Missing,
    #[error("vote data unreadable: {0}")]
    Corrupt(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to persist votes: {0}")]
    Write(#[from] io::Error),
}

pub struct VoteStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl VoteStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Raw read, distinguishing an absent file from a corrupt one.
    pub fn read(&self) -> Result<Tally, ReadError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ReadError::Missing),
            Err(e) => return Err(ReadError::Corrupt(e.to_string())),
        };

        serde_json::from_str(&data).map_err(|e| ReadError::Corrupt(e.to_string()))
    }

    /// Never fails: an absent file is a fresh poll, a corrupt one starts
    /// the poll over and logs the cause.
    pub fn load(&self) -> Tally {
        match self.read() {
            Ok(tally) => tally,
            Err(ReadError::Missing) => Tally::default(),
            Err(ReadError::Corrupt(cause)) => {
                warn!(
                    "vote data at {} is corrupt, falling back to a zero tally: {cause}",
                    self.path.display()
                );
                Tally::default()
            }
        }
    }

    /// Persists the tally atomically: a concurrent `load` sees either the
    /// previous file in full or the new one, never a partial write.
    pub fn save(&self, tally: &Tally) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(tally).map_err(io::Error::from)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }

    /// The locked read-modify-write used for every accepted vote.
    pub fn record_vote(&self, choice: Choice) -> Result<Tally, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let updated = self.load().increment(choice);
        self.save(&updated)?;

        Ok(updated)
    }
}
