//! Reads stdin to end-of-stream, reverses it, prints it.

use std::io;

use anyhow::Context;
use revline::{logging, run, Variant};

fn main() -> anyhow::Result<()> {
    logging::init();
    run(Variant::Succeeding, &mut io::stdin().lock(), &mut io::stdout().lock())
        .context("reversing stdin")?;
    Ok(())
}
