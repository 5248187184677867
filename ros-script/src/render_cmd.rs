use std::fs;

use anyhow::{Context, Result};
use ros_script::build::render_plan;
use ros_script::plan::load_plan;
use tracing::info;

use crate::cli::RenderArgs;
use crate::path_guard;

pub fn run_render(args: RenderArgs) -> Result<()> {
    let plan = load_plan(&args.plan)?;
    info!(
        plan = %args.plan.display(),
        fragments = plan.fragments.len(),
        "loaded plan"
    );

    let script = render_plan(&plan, args.raw)
        .with_context(|| format!("failed to render {}", args.plan.display()))?;

    match args.output {
        Some(out_path) => {
            path_guard::ensure_output_distinct(&out_path, &args.plan)?;
            fs::write(&out_path, &script)
                .with_context(|| format!("failed to write script {}", out_path.display()))?;
            info!(output = %out_path.display(), bytes = script.len(), "wrote script");
        }
        None => print!("{script}"),
    }

    Ok(())
}
