use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nextodd_core::{batch, Policy};

/// Read a JSON array of inputs and print the evaluated records as JSON.
pub fn run_batch(policy: Policy, file: PathBuf) -> Result<()> {
    let inputs = if file == Path::new("-") {
        log::info!("Reading batch from stdin");
        batch::parse_inputs(io::stdin().lock())?
    } else {
        log::info!("Reading batch from {}", file.display());
        let handle = File::open(&file)
            .with_context(|| format!("Failed to open {}", file.display()))?;
        batch::parse_inputs(BufReader::new(handle))?
    };

    let records = batch::evaluate_batch(policy, &inputs);
    println!("{}", batch::to_json(&records)?);

    Ok(())
}
