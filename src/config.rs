use std::path::PathBuf;

use clap::Parser;
use mmu::ReplacementPolicy;

use crate::error::Error;

pub const DEFAULT_BACKING_STORE: &str = "BACKING_STORE.bin";

/// Translates the logical addresses in ADDRESSES and reports the byte stored
/// at each translated physical address.
///
/// Lines holding -1, -2 or -3 dump the TLB, the non-resident pages and the
/// resident pages instead.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about)]
pub struct Args {
    /// File with one decimal logical address per line.
    pub addresses: PathBuf,
    /// Number of physical frames, 1 to 128.
    pub frames: Option<usize>,
    /// Frame replacement algorithm: FIFO or LRU.
    pub algorithm: Option<String>,
    /// Raw 65,536-byte image holding every page.
    #[arg(short, long, default_value = DEFAULT_BACKING_STORE)]
    pub backing_store: PathBuf,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addresses: PathBuf,
    pub backing_store: PathBuf,
    pub frames: usize,
    pub policy: ReplacementPolicy,
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let frames = args
            .frames
            .ok_or(Error::ConfigurationMissing("frame count"))?;
        let algorithm = args
            .algorithm
            .ok_or(Error::ConfigurationMissing("replacement algorithm"))?;
        let policy = algorithm
            .parse::<ReplacementPolicy>()
            .map_err(|e| Error::UnsupportedAlgorithm(e.0))?;
        if frames == 0 || frames > mmu::MAX_FRAMES {
            return Err(Error::InvalidFrameCount {
                found: frames,
                max: mmu::MAX_FRAMES,
            });
        }
        Ok(Config {
            addresses: args.addresses,
            backing_store: args.backing_store,
            frames,
            policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, Error> {
        let args = Args::try_parse_from(std::iter::once("vmsim").chain(argv.iter().copied()))
            .unwrap();
        Config::try_from(args)
    }

    #[test]
    fn full_configuration() {
        let config = parse(&["addresses.txt", "128", "FIFO"]).unwrap();
        assert_eq!(
            config,
            Config {
                addresses: PathBuf::from("addresses.txt"),
                backing_store: PathBuf::from(DEFAULT_BACKING_STORE),
                frames: 128,
                policy: ReplacementPolicy::Fifo,
            }
        );
    }

    #[test]
    fn custom_backing_store_and_lru() {
        let config = parse(&["in.txt", "16", "LRU", "--backing-store", "store.bin"]).unwrap();
        assert_eq!(config.backing_store, PathBuf::from("store.bin"));
        assert_eq!(config.frames, 16);
        assert_eq!(config.policy, ReplacementPolicy::Lru);
    }

    #[test]
    fn missing_frames_or_algorithm() {
        assert!(matches!(
            parse(&["in.txt"]),
            Err(Error::ConfigurationMissing("frame count"))
        ));
        assert!(matches!(
            parse(&["in.txt", "128"]),
            Err(Error::ConfigurationMissing("replacement algorithm"))
        ));
    }

    #[test]
    fn unsupported_algorithm() {
        match parse(&["in.txt", "128", "CLOCK"]) {
            Err(Error::UnsupportedAlgorithm(name)) => assert_eq!(name, "CLOCK"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn frame_count_out_of_range() {
        assert!(matches!(
            parse(&["in.txt", "0", "FIFO"]),
            Err(Error::InvalidFrameCount { found: 0, max: 128 })
        ));
        assert!(matches!(
            parse(&["in.txt", "256", "FIFO"]),
            Err(Error::InvalidFrameCount { found: 256, .. })
        ));
    }
}
