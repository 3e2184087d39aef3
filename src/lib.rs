use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
};

use log::{info, warn};
use mmu::{BackingStore, Mmu, PageStore, Statistics};

pub mod config;
pub mod error;
pub mod meta_commands;
pub mod repl;
pub mod report;

pub use config::{Args, Config};
pub use error::Error;

use meta_commands::{Command, CommandError};
use repl::AddressReader;

/// Everything one run needs, opened and validated.
pub struct Session<S: PageStore, R> {
    pub config: Config,
    pub mmu: Mmu<S>,
    pub reader: AddressReader<R>,
}

impl Session<BackingStore, BufReader<File>> {
    /// Opens the backing store, then the address file, then validates the
    /// remaining configuration. Fails before any translation happens.
    pub fn start(args: Args) -> Result<Self, Error> {
        let store = BackingStore::connect(&args.backing_store).map_err(|cause| {
            Error::StoreUnavailable {
                path: args.backing_store.clone(),
                cause,
            }
        })?;
        let reader = AddressReader::open(&args.addresses)?;
        let config = Config::try_from(args)?;
        let mmu = Mmu::init(store, config.frames, config.policy)?;
        info!(
            "Translating {} with {} frames ({})",
            config.addresses.display(),
            config.frames,
            config.policy
        );
        Ok(Session {
            config,
            mmu,
            reader,
        })
    }
}

impl<S: PageStore, R: BufRead> Session<S, R> {
    /// Processes every input line and ends with the statistics report.
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<Statistics, Error> {
        report::header(out, self.config.policy, self.config.frames).map_err(Error::Output)?;
        for line in &mut self.reader {
            let line = line.map_err(Error::Input)?;
            execute(&mut self.mmu, &line, out)?;
        }
        let stats = *self.mmu.statistics();
        report::statistics(out, &stats).map_err(Error::Output)?;
        Ok(stats)
    }
}

/// Runs one input line against `mmu` and reports the outcome.
pub fn execute<S: PageStore, W: Write>(
    mmu: &mut Mmu<S>,
    line: &str,
    out: &mut W,
) -> Result<(), Error> {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(CommandError::UnrecognizedCommand(input)) => {
            warn!("Skipping unrecognized input {:?}", input);
            return Ok(());
        }
    };
    report::input(out, line).map_err(Error::Output)?;
    let written = match command {
        Command::DumpTlb => report::tlb(out, mmu.tlb()),
        Command::DumpNonResident => report::non_resident(out, mmu.page_table()),
        Command::DumpResident => report::resident(out, mmu.page_table()),
        Command::Translate(logical) => {
            let translation = mmu.translate(logical)?;
            report::translation(out, &translation)
        }
    };
    written.map_err(Error::Output)
}
