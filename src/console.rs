use std::collections::HashSet;

use log::trace;

use crate::{Error, Instruction, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub inst_ptr: usize,
    pub acc: isize,
}

impl State {
    pub fn new() -> Self {
        Self {
            inst_ptr: 0,
            acc: 0,
        }
    }
}

/// Handheld game console running boot code. One console serves exactly one run.
pub struct Console<'a> {
    code: &'a [Instruction],
    state: State,
    visited: HashSet<usize>,
}

impl<'a> Console<'a> {
    pub fn new(code: &'a [Instruction]) -> Self {
        Self {
            code,
            state: State::new(),
            visited: HashSet::new(),
        }
    }

    /// Runs until the instruction pointer leaves the code at its end, or an instruction is about to run twice.
    pub fn run(mut self) -> Result<State, Error> {
        let code = self.code;
        while let Some(inst) = code.get(self.state.inst_ptr) {
            let inst_ptr = self.state.inst_ptr;
            if !self.visited.insert(inst_ptr) {
                return Err(Error::InfiniteLoop(self.state));
            }

            trace!("[{}] {}, acc = {}", inst_ptr, inst, self.state.acc);
            match &inst.op {
                Operation::Acc => {
                    self.state.acc = self
                        .state
                        .acc
                        .checked_add(inst.arg)
                        .ok_or(Error::AccOverflow {
                            inst_ptr,
                            acc: self.state.acc,
                            arg: inst.arg,
                        })?;
                    self.state.inst_ptr += 1;
                }
                Operation::Nop => self.state.inst_ptr += 1,
                Operation::Jmp => {
                    self.state.inst_ptr = inst_ptr
                        .checked_add_signed(inst.arg)
                        .ok_or(Error::InvalidJmp(inst_ptr, inst.arg))?
                }
                Operation::Unknown(name) => {
                    return Err(Error::InvalidInst {
                        inst_ptr,
                        name: name.clone(),
                    })
                }
            }
        }

        Ok(self.state)
    }
}
