//! Reads one chunk of stdin and reverses it with the off-by-one swap.
//!
//! Kept broken on purpose: this is the negative fixture for `revline grade`.

use std::io;

use anyhow::Context;
use revline::{logging, run, Variant};

fn main() -> anyhow::Result<()> {
    logging::init();
    run(Variant::Failing, &mut io::stdin().lock(), &mut io::stdout().lock())
        .context("reversing stdin")?;
    Ok(())
}
