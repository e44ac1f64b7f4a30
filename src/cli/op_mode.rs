//! Operation mode selection for the CLI.

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Decode each input and write the result.
    Decompress,
    /// Decode each input, write nothing; report integrity only.
    Test,
    /// Print header information without decoding.
    List,
}

/// Resolve the mode from the `--list` / `--test` flags. `--list` wins.
pub fn determine_op_mode(list: bool, test: bool) -> OpMode {
    if list {
        OpMode::List
    } else if test {
        OpMode::Test
    } else {
        OpMode::Decompress
    }
}
