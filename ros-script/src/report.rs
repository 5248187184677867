use colored::Colorize;
use ros_script_core::{format_summary, Cidr, Fragment};

/// Render a per-path overview of a composed fragment for terminal output.
pub fn render_inspect(fragment: &Fragment) -> String {
    let mut out = Vec::new();
    out.push("paths".to_string());

    for section in fragment {
        let label = if section.path.is_raw() {
            "(raw body)".to_string()
        } else {
            section.path.to_string()
        };
        if section.commands.is_empty() {
            out.push(format!("- {}: {}", label.yellow(), "empty, omitted from output".yellow()));
            continue;
        }
        out.push(format!("- {}: {} commands", label.cyan(), section.commands.len()));
        for command in &section.commands {
            out.push(format!("  {}", colorize_command(command)));
        }
    }

    out.push(String::new());
    out.push(format_summary(fragment).cyan().to_string());
    out.join("\n")
}

/// Render subnet facts as `key=value` lines.
pub fn render_range(cidr: &Cidr) -> String {
    let usable = cidr.usable_range();
    [
        format!("cidr={cidr}"),
        format!("network={}", cidr.network()),
        format!("broadcast={}", cidr.broadcast()),
        format!("gateway={}", cidr.gateway()),
        format!("usable={usable}"),
        format!("pool={}", cidr.pool_range()),
    ]
    .join("\n")
}

fn colorize_command(command: &str) -> String {
    match command.split_whitespace().next() {
        Some("add") => command.green().to_string(),
        Some("remove") => command.red().to_string(),
        Some("set") => command.yellow().to_string(),
        _ => command.to_string(),
    }
}
