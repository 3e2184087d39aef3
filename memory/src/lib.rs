use std::fmt;

use log::trace;

#[derive(Debug, PartialEq)]
pub enum MemoryError {
    OverCapacity,
    IncorrectFrameSize,
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::OverCapacity => write!(f, "address out of range"),
            MemoryError::IncorrectFrameSize => write!(f, "frame size mismatch"),
        }
    }
}

/// Simulated main memory: `FRAMES` frames of `FRAME_SIZE` bytes each,
/// zeroed at creation.
#[derive(Clone)]
pub struct PhysicalMemory<const FRAME_SIZE: usize, const FRAMES: usize> {
    frames: Box<[[u8; FRAME_SIZE]; FRAMES]>,
}

impl<const FRAME_SIZE: usize, const FRAMES: usize> PhysicalMemory<FRAME_SIZE, FRAMES> {
    pub const CAPACITY: usize = FRAME_SIZE * FRAMES;

    pub fn create() -> Self {
        Self {
            frames: Box::new([[0; FRAME_SIZE]; FRAMES]),
        }
    }

    pub fn check_address(&self, address: u64) -> Result<(), MemoryError> {
        if address as usize >= Self::CAPACITY {
            return Err(MemoryError::OverCapacity);
        }
        Ok(())
    }

    pub fn read_u8(&self, address: u64) -> Result<u8, MemoryError> {
        self.check_address(address)?;
        let address = address as usize;
        Ok(self.frames[address / FRAME_SIZE][address % FRAME_SIZE])
    }

    pub fn frame(&self, frame_number: usize) -> Result<&[u8; FRAME_SIZE], MemoryError> {
        self.frames.get(frame_number).ok_or(MemoryError::OverCapacity)
    }

    /// Replaces the whole content of one frame.
    pub fn write_frame(&mut self, frame_number: usize, bytes: &[u8]) -> Result<(), MemoryError> {
        if bytes.len() != FRAME_SIZE {
            return Err(MemoryError::IncorrectFrameSize);
        }
        let frame = self
            .frames
            .get_mut(frame_number)
            .ok_or(MemoryError::OverCapacity)?;
        frame.copy_from_slice(bytes);
        trace!("Frame[{}] overwritten", frame_number);
        Ok(())
    }
}

impl<const FRAME_SIZE: usize, const FRAMES: usize> Default for PhysicalMemory<FRAME_SIZE, FRAMES> {
    fn default() -> Self {
        Self::create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_zeroed() {
        let mem = PhysicalMemory::<256, 4>::create();
        for i in 0..1024 {
            assert_eq!(mem.read_u8(i).unwrap(), 0);
        }
    }

    #[test]
    fn test_write_frame_then_read() {
        let mut mem = PhysicalMemory::<256, 4>::create();
        let bytes: Vec<u8> = (0..=255).collect();
        mem.write_frame(2, &bytes).unwrap();
        assert_eq!(mem.read_u8(2 * 256).unwrap(), 0);
        assert_eq!(mem.read_u8(2 * 256 + 0x7f).unwrap(), 0x7f);
        assert_eq!(mem.read_u8(3 * 256 - 1).unwrap(), 0xff);
        assert_eq!(mem.read_u8(256 + 0x7f).unwrap(), 0);
        assert_eq!(mem.frame(2).unwrap().as_slice(), bytes.as_slice());
    }

    #[test]
    fn test_overwrite_frame() {
        let mut mem = PhysicalMemory::<256, 4>::create();
        mem.write_frame(0, &[0x1; 256]).unwrap();
        mem.write_frame(0, &[0x2; 256]).unwrap();
        assert!(mem.frame(0).unwrap().iter().all(|b| *b == 0x2));
    }

    #[test]
    fn test_read_invalid_address() {
        let mem = PhysicalMemory::<256, 4>::create();
        assert_eq!(mem.read_u8(1024), Err(MemoryError::OverCapacity));
    }

    #[test]
    fn test_write_invalid_frame() {
        let mut mem = PhysicalMemory::<256, 4>::create();
        assert_eq!(
            mem.write_frame(4, &[0; 256]),
            Err(MemoryError::OverCapacity)
        );
        assert_eq!(
            mem.write_frame(0, &[0; 255]),
            Err(MemoryError::IncorrectFrameSize)
        );
    }
}
