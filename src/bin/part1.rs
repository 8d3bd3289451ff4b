use anyhow::{Context, Result};
use clap::Parser;
use handheld::{CliArgs, Console, Error};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let code = handheld::read_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read code from given input file({}).",
            args.input_path.display()
        )
    })?;

    match Console::new(&code).run() {
        Err(Error::InfiniteLoop(state)) => println!(
            "Before the first repeated execution of a same instruction(at {}), the accumulator is {}.",
            state.inst_ptr, state.acc
        ),
        Ok(state) => println!(
            "Code runs through to end(at {}) without loop, the accumulator is {}.",
            state.inst_ptr, state.acc
        ),
        Err(e) => return Err(e).context("Failed to run given code."),
    }

    Ok(())
}
