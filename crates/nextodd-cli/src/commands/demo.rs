use anyhow::Result;
use nextodd_core::{demo, Policy};

pub fn run_demo(policy: Policy) -> Result<()> {
    for line in demo::demo_lines(policy) {
        println!("{}", line);
    }
    Ok(())
}
