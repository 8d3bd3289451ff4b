use std::{fmt::Display, path::Path};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Acc,
    Nop,
    Jmp,
    Unknown(String),
}

impl From<&str> for Operation {
    fn from(value: &str) -> Self {
        match value {
            "acc" => Operation::Acc,
            "nop" => Operation::Nop,
            "jmp" => Operation::Jmp,
            other => Operation::Unknown(other.to_string()),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Acc => write!(f, "acc"),
            Operation::Nop => write!(f, "nop"),
            Operation::Jmp => write!(f, "jmp"),
            Operation::Unknown(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub op: Operation,
    pub arg: isize,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:+}", self.op, self.arg)
    }
}

impl Instruction {
    pub fn new(op: Operation, arg: isize) -> Self {
        Self { op, arg }
    }

    /// The nop/jmp counterpart of this instruction, operand unchanged.
    pub fn swapped(&self) -> Option<Self> {
        match self.op {
            Operation::Nop => Some(Self::new(Operation::Jmp, self.arg)),
            Operation::Jmp => Some(Self::new(Operation::Nop, self.arg)),
            _ => None,
        }
    }

    fn parse(line_no: usize, text: &str) -> Result<Self, Error> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\s*(\S+)\s+([+-]?\d+)\s*$").unwrap());

        let malformed = || Error::MalformedInst {
            line_no,
            text: text.to_string(),
        };
        let caps = PATTERN.captures(text).ok_or_else(malformed)?;
        // Digits beyond isize range still fail here.
        let arg = caps[2].parse::<isize>().map_err(|_| malformed())?;

        Ok(Self::new(Operation::from(&caps[1]), arg))
    }
}

pub fn parse_code<I, S>(lines: I) -> Result<Vec<Instruction>, Error>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|(line_no, s)| Instruction::parse(line_no, s.as_ref()))
        .collect::<Result<Vec<_>, Error>>()
}

pub fn read_code<P: AsRef<Path>>(path: P) -> Result<Vec<Instruction>, Error> {
    parse_code(crate::read_lines(path)?)
}
