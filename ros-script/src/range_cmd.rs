use anyhow::{Context, Result};
use ros_script::report::render_range;
use ros_script_core::Cidr;

use crate::cli::RangeArgs;

pub fn run_range(args: RangeArgs) -> Result<()> {
    let cidr: Cidr = args
        .cidr
        .parse()
        .with_context(|| format!("cannot derive ranges for '{}'", args.cidr))?;
    println!("{}", render_range(&cidr));
    Ok(())
}
