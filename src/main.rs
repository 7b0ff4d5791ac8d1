use std::fs;
use std::io::{self, Read, Write};

use anyhow::{bail, Context as _, Result};
use mython::interpreter;
use mython::parser;
use mython::runtime::{Closure, Context};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input_path = args.next();
    if args.next().is_some() {
        bail!("Only one input file is supported");
    }

    let source = match input_path {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("Reading {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Reading stdin")?;
            buffer
        }
    };

    let program = parser::parse(&source)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut context = Context::new(&mut handle);
    let mut globals = Closure::new();
    interpreter::execute_program(&program, &mut globals, &mut context)?;
    handle.flush().context("Flushing output")?;
    Ok(())
}
