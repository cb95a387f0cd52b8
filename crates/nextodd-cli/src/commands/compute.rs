use anyhow::{Context, Result};
use nextodd_core::{demo, Input, Policy};

/// Evaluate each raw value and print `"{input} -> {result}"`.
pub fn run_compute(policy: Policy, values: Vec<String>, as_text: bool) -> Result<()> {
    log::info!(
        "Computing next odd for {} value(s) under {} policy",
        values.len(),
        policy
    );

    for raw in values {
        let input = if as_text { Input::Text(raw) } else { Input::infer(&raw) };

        let result = policy
            .evaluate(&input)
            .with_context(|| format!("Cannot compute the next odd number for {}", input.describe()))?;

        println!("{}", demo::render_line(&input, result));
    }

    Ok(())
}
