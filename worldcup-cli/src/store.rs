//! The tournament snapshot on disk.
//!
//! The snapshot is a single JSON document carrying a `version` counter. Every write checks that
//! the version on disk is still the one that was read, so two concurrent edits can not silently
//! overwrite each other. The losing writer gets [`StoreError::Conflict`] and has to retry on
//! the new state.
//!
//! Writers hold `<snapshot>.lock` from the version check until the new snapshot is in place.
//! The lock file is created exclusively and removed when the write is done.
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use worldcup_core::Tournament;

const LOCK_ATTEMPTS: u32 = 50;
const LOCK_RETRY: Duration = Duration::from_millis(10);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u64,
    pub tournament: Tournament,
}

/// Only the version of a snapshot.
#[derive(Deserialize)]
struct Header {
    version: u64,
}

#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    #[inline]
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a new snapshot with version 0.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Exists`] if a snapshot already exists.
    pub fn create(&self, tournament: Tournament) -> Result<Snapshot, StoreError> {
        let _lock = self.lock()?;

        if self.path.exists() {
            return Err(StoreError::Exists(self.path.clone()));
        }

        let snapshot = Snapshot {
            version: 0,
            tournament,
        };

        self.write(&snapshot)?;
        log::info!("Created snapshot {}", self.path.display());

        Ok(snapshot)
    }

    pub fn load(&self) -> Result<Snapshot, StoreError> {
        let file = self.open()?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;

        snapshot.tournament.validate()?;

        log::debug!(
            "Loaded snapshot {} at version {}",
            self.path.display(),
            snapshot.version
        );

        Ok(snapshot)
    }

    /// Writes `snapshot` and advances its version.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the snapshot on disk is no longer at the version of
    /// `snapshot`. Nothing is written in that case.
    pub fn save(&self, snapshot: &mut Snapshot) -> Result<(), StoreError> {
        let _lock = self.lock()?;

        let file = self.open()?;
        let header: Header = serde_json::from_reader(BufReader::new(file))?;

        if header.version != snapshot.version {
            return Err(StoreError::Conflict {
                expected: snapshot.version,
                found: header.version,
            });
        }

        snapshot.version += 1;
        if let Err(err) = self.write(snapshot) {
            snapshot.version -= 1;
            return Err(err);
        }

        log::debug!(
            "Saved snapshot {} at version {}",
            self.path.display(),
            snapshot.version
        );

        Ok(())
    }

    /// Loads the snapshot, applies `f` to the tournament and saves the result. Nothing is saved
    /// if `f` fails.
    pub fn update<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Tournament) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut snapshot = self.load()?;
        let output = f(&mut snapshot.tournament)?;
        self.save(&mut snapshot)?;

        Ok(output)
    }

    fn open(&self) -> Result<File, StoreError> {
        File::open(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            _ => StoreError::Io(err),
        })
    }

    /// Returns the path of the lock file next to the snapshot.
    pub fn lock_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".lock");
        PathBuf::from(path)
    }

    fn lock(&self) -> Result<Lock, StoreError> {
        Lock::acquire(self.lock_path())
    }

    /// Writes to a temporary file next to the snapshot and renames it over the snapshot.
    fn write(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.write_all(b"\n")?;

        let tmp = writer.into_inner().map_err(|err| err.into_error())?;
        tmp.as_file().sync_all()?;

        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

/// An exclusive lock on a snapshot, released on drop.
#[derive(Debug)]
struct Lock {
    path: PathBuf,
}

impl Lock {
    fn acquire(path: PathBuf) -> Result<Self, StoreError> {
        let mut attempts = 0;

        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(Self { path }),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    attempts += 1;
                    if attempts >= LOCK_ATTEMPTS {
                        return Err(StoreError::Locked(path));
                    }

                    thread::sleep(LOCK_RETRY);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl Drop for Lock {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            log::warn!("Failed to remove lock {}: {}", self.path.display(), err);
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no snapshot at {}, create one with `worldcup init`", .0.display())]
    NotFound(PathBuf),
    #[error("snapshot {} already exists", .0.display())]
    Exists(PathBuf),
    #[error("snapshot is locked by another writer, remove {} if no other writer is running", .0.display())]
    Locked(PathBuf),
    #[error("snapshot was changed concurrently (expected version {expected}, found {found}), try again")]
    Conflict { expected: u64, found: u64 },
    #[error("invalid snapshot: {0}")]
    Invalid(#[from] worldcup_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
