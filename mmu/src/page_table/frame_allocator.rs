use std::{fmt, str::FromStr};

use log::debug;

use super::PageTable;
use crate::{MmuError, MAX_FRAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    /// Reclaim frames in the order they were handed out.
    Fifo,
    /// Reclaim the frame whose last use is the oldest.
    Lru,
}

#[derive(Debug, PartialEq)]
pub struct ParsePolicyError(pub String);

impl FromStr for ReplacementPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIFO" => Ok(ReplacementPolicy::Fifo),
            "LRU" => Ok(ReplacementPolicy::Lru),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementPolicy::Fifo => write!(f, "FIFO"),
            ReplacementPolicy::Lru => write!(f, "LRU"),
        }
    }
}

/// Result of a frame acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquired {
    pub frame: u32,
    /// Page that lost `frame`, when the pool was already full.
    pub evicted: Option<u32>,
}

/// Hands out physical frames, reclaiming one when all are in use.
pub struct FrameAllocator {
    frame_count: usize,
    policy: ReplacementPolicy,
    /// Total acquisitions so far. Never reset.
    cursor: u64,
    clock: u64,
    last_used: [u64; MAX_FRAMES],
}

impl FrameAllocator {
    pub fn init(frame_count: usize, policy: ReplacementPolicy) -> Result<Self, MmuError> {
        if frame_count == 0 || frame_count > MAX_FRAMES {
            return Err(MmuError::InvalidFrameCount(frame_count));
        }
        Ok(Self {
            frame_count,
            policy,
            cursor: 0,
            clock: 0,
            last_used: [0; MAX_FRAMES],
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    /// Number of frames ever handed out, reclaimed ones included.
    pub fn allocated(&self) -> u64 {
        self.cursor
    }

    /// Records a use of `frame_number`. Only LRU looks at it.
    pub fn touch(&mut self, frame_number: u32) {
        self.clock += 1;
        self.last_used[frame_number as usize] = self.clock;
    }

    pub fn acquire_frame(&mut self, page_table: &mut PageTable) -> Acquired {
        let frame_count = self.frame_count as u64;
        let position = self.cursor;
        self.cursor += 1;

        let acquired = if position < frame_count {
            Acquired {
                frame: position as u32,
                evicted: None,
            }
        } else {
            let victim = match self.policy {
                ReplacementPolicy::Fifo => (position % frame_count) as u32,
                ReplacementPolicy::Lru => self.least_recently_used(),
            };
            let evicted = page_table.invalidate_if_mapped_to(victim);
            debug!(
                "Frame {} reclaimed ({}), evicted page {:?}",
                victim, self.policy, evicted
            );
            Acquired {
                frame: victim,
                evicted,
            }
        };
        self.touch(acquired.frame);
        acquired
    }

    fn least_recently_used(&self) -> u32 {
        let (frame, _) = self.last_used[..self.frame_count]
            .iter()
            .enumerate()
            .min_by_key(|(_, tick)| **tick)
            .unwrap_or((0, &0));
        frame as u32
    }
}
