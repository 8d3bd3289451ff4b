use anyhow::{Context, Result};
use clap::Parser;
use handheld::{CliArgs, Error, Instruction, Repair};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let code = handheld::read_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let search: fn(&[Instruction]) -> Result<Repair, Error> = if args.parallel {
        handheld::repair_par
    } else {
        handheld::repair
    };
    let Repair {
        ind,
        original,
        patched,
        state,
    } = search(&code).context("Failed to repair given code.")?;
    println!(
        "Exchanged {}(at {}) to {}, code runs through to end without loop, and the final accumulator value is {}.",
        original, ind, patched, state.acc
    );

    Ok(())
}
