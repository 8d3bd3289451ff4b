use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use clap::Parser;

mod console;
mod inst;
mod repair;

pub use console::{Console, State};
pub use inst::{parse_code, read_code, Instruction, Operation};
pub use repair::{repair, repair_par, Repair};

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    MalformedInst { line_no: usize, text: String },
    InvalidInst { inst_ptr: usize, name: String },
    InvalidJmp(usize, isize),
    AccOverflow { inst_ptr: usize, acc: isize, arg: isize },
    InfiniteLoop(State),
    NoRepairFound,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::MalformedInst { line_no, text } => write!(
                f,
                "Malformed instruction at line #{}({}), expect \"<operation> <signed integer>\"",
                line_no, text
            ),
            Error::InvalidInst { inst_ptr, name } => {
                write!(f, "Invalid operation({}) at {}", name, inst_ptr)
            }
            Error::InvalidJmp(p, offset) => {
                write!(f, "Invalid jump(from {}, offset is {})", p, offset)
            }
            Error::AccOverflow { inst_ptr, acc, arg } => write!(
                f,
                "Accumulator overflow at {}(accumulator is {}, add {})",
                inst_ptr, acc, arg
            ),
            Error::InfiniteLoop(state) => write!(
                f,
                "Infinite loop detected at {}, the accumulator is {}",
                state.inst_ptr, state.acc
            ),
            Error::NoRepairFound => write!(
                f,
                "No single nop/jmp exchange makes the code run through to end"
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    pub input_path: PathBuf,
    /// Search repair candidates on all cores(part 2 only).
    #[arg(long)]
    pub parallel: bool,
}

/// Reads all non-empty lines of given file, trimmed, paired with their 1-based line number.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<(usize, String)>, Error> {
    let file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (l_ind, l) in reader.lines().enumerate() {
        let s = l.map_err(Error::IOError)?;
        let s = s.trim();
        if !s.is_empty() {
            lines.push((l_ind + 1, s.to_string()));
        }
    }

    Ok(lines)
}
