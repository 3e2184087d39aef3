use std::{io, path::PathBuf};

use disk::DiskError;
use mmu::MmuError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot open backing store {}: {cause}", .path.display())]
    StoreUnavailable { path: PathBuf, cause: DiskError },
    #[error("Cannot open address file {}: {source}", .path.display())]
    InputUnavailable { path: PathBuf, source: io::Error },
    #[error("Missing configuration: {0}")]
    ConfigurationMissing(&'static str),
    #[error("Unsupported algorithm {0:?}, expected FIFO or LRU")]
    UnsupportedAlgorithm(String),
    #[error("Frame count must be between 1 and {max}, got {found}")]
    InvalidFrameCount { found: usize, max: usize },
    #[error("Translation failed: {0}")]
    Translation(MmuError),
    #[error("Cannot read address file: {0}")]
    Input(#[source] io::Error),
    #[error("Cannot write report: {0}")]
    Output(#[source] io::Error),
}

impl From<MmuError> for Error {
    fn from(e: MmuError) -> Self {
        match e {
            MmuError::InvalidFrameCount(found) => Error::InvalidFrameCount {
                found,
                max: mmu::MAX_FRAMES,
            },
            e => Error::Translation(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        let e = Error::from(MmuError::Store(DiskError::OverCapacity));
        assert_eq!(
            e.to_string(),
            "Translation failed: backing store read failed: block out of range"
        );

        let e = Error::StoreUnavailable {
            path: PathBuf::from("BACKING_STORE.bin"),
            cause: DiskError::IncorrectCapacity {
                expected: 65536,
                found: 100,
            },
        };
        assert_eq!(
            e.to_string(),
            "Cannot open backing store BACKING_STORE.bin: expected 65536 bytes, found 100"
        );

        assert!(matches!(
            Error::from(MmuError::InvalidFrameCount(0)),
            Error::InvalidFrameCount { found: 0, max: 128 }
        ));
    }
}
