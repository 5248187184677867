use crate::fragment::Fragment;

/// Render a fragment as script text.
///
/// Menu paths become a header line followed by their commands; raw body
/// lines are written bare. Paths without commands produce nothing. Blocks
/// are separated by one blank line and the text ends with a newline unless
/// it is empty.
pub fn serialize(fragment: &Fragment) -> String {
    let mut blocks = Vec::with_capacity(fragment.sections().len());

    for section in fragment {
        if section.commands.is_empty() {
            continue;
        }
        let mut lines = Vec::with_capacity(section.commands.len() + 1);
        if !section.path.is_raw() {
            lines.push(section.path.as_str());
        }
        lines.extend(section.commands.iter().map(String::as_str));
        blocks.push(lines.join("\n"));
    }

    if blocks.is_empty() {
        return String::new();
    }
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}
