//! Inspection views of a fragment.

use crate::fragment::Fragment;

/// Format a fragment as pretty JSON: a list of `{path, commands}` objects.
pub fn format_json(fragment: &Fragment) -> String {
    serde_json::to_string_pretty(fragment).unwrap_or_else(|_| "[]".to_string())
}

/// Format counts of paths and command verbs on one line.
pub fn format_summary(fragment: &Fragment) -> String {
    let mut set = 0;
    let mut add = 0;
    let mut remove = 0;
    let mut raw = 0;

    for section in fragment {
        if section.path.is_raw() {
            raw += section.commands.len();
            continue;
        }
        for command in &section.commands {
            match command.split_whitespace().next() {
                Some("set") => set += 1,
                Some("add") => add += 1,
                Some("remove") => remove += 1,
                _ => {}
            }
        }
    }

    format!(
        "paths={} commands={} set={set} add={add} remove={remove} raw={raw}",
        fragment.sections().len(),
        fragment.command_count()
    )
}
