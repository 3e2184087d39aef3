use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::error::Error;

/// Yields the trimmed, non-blank lines of an address stream.
pub struct AddressReader<R> {
    input: R,
    buffer: String,
}

impl AddressReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> AddressReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: String::new(),
        }
    }

    pub fn read_line(&mut self) -> Result<Option<String>, io::Error> {
        loop {
            self.buffer.clear();
            if self.input.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            let line = self.buffer.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

impl<R: BufRead> Iterator for AddressReader<R> {
    type Item = Result<String, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
