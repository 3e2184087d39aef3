#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    DumpTlb,
    DumpNonResident,
    DumpResident,
    Translate(u32),
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    UnrecognizedCommand(String),
}

impl Command {
    /// Interprets one input line. `-1`, `-2` and `-3` are diagnostics; any
    /// other integer is a logical address, negative ones wrapping to `u32`.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| CommandError::UnrecognizedCommand(input.to_string()))?;
        let command = match value {
            -1 => Command::DumpTlb,
            -2 => Command::DumpNonResident,
            -3 => Command::DumpResident,
            value => Command::Translate(value as u32),
        };
        Ok(command)
    }
}
