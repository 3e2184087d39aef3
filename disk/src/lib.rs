use std::{
    fmt,
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::info;

#[derive(Debug, PartialEq)]
pub enum DiskError {
    Unavailable(io::ErrorKind),
    IncorrectCapacity { expected: u64, found: u64 },
    OverCapacity,
}

impl fmt::Display for DiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskError::Unavailable(kind) => write!(f, "{}", io::Error::from(*kind)),
            DiskError::IncorrectCapacity { expected, found } => {
                write!(f, "expected {} bytes, found {}", expected, found)
            }
            DiskError::OverCapacity => write!(f, "block out of range"),
        }
    }
}

impl From<io::Error> for DiskError {
    fn from(e: io::Error) -> Self {
        DiskError::Unavailable(e.kind())
    }
}

/// Read-only view over a raw backing-store image.
///
/// The image has no header: block `n` lives at byte offset `n * BLOCKSIZE`
/// and the file must be exactly `CAPACITY` bytes long.
#[derive(Debug)]
pub struct Disk<const BLOCKSIZE: usize, const CAPACITY: usize> {
    path: PathBuf,
    file: Mutex<File>,
}

impl<const BLOCKSIZE: usize, const CAPACITY: usize> Disk<BLOCKSIZE, CAPACITY> {
    pub const BLOCKS: usize = CAPACITY / BLOCKSIZE;

    pub fn connect<P: AsRef<Path>>(path: P) -> Result<Self, DiskError> {
        assert_eq!(
            CAPACITY % BLOCKSIZE,
            0,
            "Capacity must be a multiply of BlockSize"
        );
        let path = path.as_ref().to_path_buf();
        let file = File::options().read(true).open(&path)?;
        let found = file.metadata()?.len();
        if found != CAPACITY as u64 {
            return Err(DiskError::IncorrectCapacity {
                expected: CAPACITY as u64,
                found,
            });
        }
        info!("Backing store {} connected", path.display());
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_block(&self, block_number: usize) -> Result<Box<[u8; BLOCKSIZE]>, DiskError> {
        if block_number >= Self::BLOCKS {
            return Err(DiskError::OverCapacity);
        }
        let mut file = self
            .file
            .lock()
            .map_err(|_| DiskError::Unavailable(io::ErrorKind::Other))?;
        info!("Start reading block[{}]", block_number);
        file.seek(SeekFrom::Start((block_number * BLOCKSIZE) as u64))?;
        let mut buf = Box::new([0; BLOCKSIZE]);
        file.read_exact(&mut *buf)?;
        info!("Done reading block[{}]", block_number);
        Ok(buf)
    }
}
