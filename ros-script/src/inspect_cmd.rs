use anyhow::{Context, Result};
use ros_script::build::compose_plan;
use ros_script::plan::load_plan;
use ros_script::report::render_inspect;
use ros_script_core::format_json;

use crate::cli::{InspectArgs, OutputFormat};

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let plan = load_plan(&args.plan)?;
    let fragment = compose_plan(&plan, args.raw)
        .with_context(|| format!("failed to compose {}", args.plan.display()))?;

    match args.format {
        OutputFormat::Text => println!("{}", render_inspect(&fragment)),
        OutputFormat::Json => println!("{}", format_json(&fragment)),
    }
    Ok(())
}
