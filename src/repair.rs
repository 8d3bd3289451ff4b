use log::{debug, warn};
use rayon::prelude::*;

use crate::{Console, Error, Instruction, State};

/// A single nop/jmp exchange that makes the code run through to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub ind: usize,
    pub original: Instruction,
    pub patched: Instruction,
    pub state: State,
}

/// Tries exchanging each nop/jmp in ascending index order, the first exchange making the code terminate wins.
pub fn repair(code: &[Instruction]) -> Result<Repair, Error> {
    let mut work_code = code.to_vec();
    for (ind, original) in code.iter().enumerate() {
        let Some(patched) = original.swapped() else {
            continue;
        };

        work_code[ind] = patched.clone();
        let res = try_patched(&work_code, ind, original);
        // Restore code.
        work_code[ind] = original.clone();

        if let Some(state) = res {
            return Ok(Repair {
                ind,
                original: original.clone(),
                patched,
                state,
            });
        }
    }

    Err(Error::NoRepairFound)
}

/// Same search as [`repair`] spread over rayon's pool, each candidate on its own copy of the code.
/// The lowest successful index wins, whichever candidate finishes first.
pub fn repair_par(code: &[Instruction]) -> Result<Repair, Error> {
    code.par_iter()
        .enumerate()
        .filter_map(|(ind, original)| original.swapped().map(|patched| (ind, original, patched)))
        .find_map_first(|(ind, original, patched)| {
            let mut work_code = code.to_vec();
            work_code[ind] = patched.clone();
            try_patched(&work_code, ind, original).map(|state| Repair {
                ind,
                original: original.clone(),
                patched,
                state,
            })
        })
        .ok_or(Error::NoRepairFound)
}

fn try_patched(code: &[Instruction], ind: usize, original: &Instruction) -> Option<State> {
    let patched = &code[ind];
    match Console::new(code).run() {
        Ok(state) => Some(state),
        Err(e @ Error::InfiniteLoop(_)) => {
            debug!("Exchanged {}(at {}) to {}, {}.", original, ind, patched, e);
            None
        }
        Err(e) => {
            warn!(
                "Exchanged {}(at {}) to {}, failed to run exchanged code, get error({}).",
                original, ind, patched, e
            );
            None
        }
    }
}
