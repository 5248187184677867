use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse an output path that resolves to the plan being rendered.
pub fn ensure_output_distinct(output: &Path, plan: &Path) -> Result<()> {
    let out_norm = absolute(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let plan_norm = absolute(plan)
        .with_context(|| format!("failed to resolve plan path {}", plan.display()))?;

    if out_norm == plan_norm {
        bail!(
            "refusing to overwrite plan file: output {} is the plan {}",
            output.display(),
            plan.display()
        );
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet, so only anchor it to the working directory.
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir().context("current_dir")?.join(path))
}
