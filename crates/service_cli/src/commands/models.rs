//! Models command implementation
//!
//! Lists the available penetration models and the parameters they read.

use std::io::{self, Write};

use attack_models::ModelKind;

use crate::Result;

/// Run the models command
pub fn run() -> Result<()> {
    write_models(&mut io::stdout().lock())
}

fn write_models(out: &mut dyn Write) -> Result<()> {
    for kind in ModelKind::ALL {
        writeln!(out, "{}", kind)?;
        writeln!(out, "    rule:       {}", kind.description())?;
        writeln!(out, "    parameters: {}", kind.parameters().join(", "))?;
    }
    Ok(())
}
