use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use vmsim::{Args, Session};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let session = match Session::start(args) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match session.run(&mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
