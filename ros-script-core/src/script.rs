use crate::fragment::Fragment;
use crate::quote::{escape_quoted, quoted};

pub const SYSTEM_SCRIPT_PATH: &str = "/system script";
pub const SYSTEM_SCHEDULER_PATH: &str = "/system scheduler";

/// Interval that makes a scheduler entry fire once.
const NO_REPEAT: &str = "00:00:00";

/// Wrap `body` into a stored script plus a scheduler entry that runs it once.
///
/// The body is carried verbatim inside the script's `source`, escaped for a
/// quoted string and joined with the interpreter's `\n` escape so the `add`
/// stays a single line.
///
/// Two things go beyond a plain script/scheduler pair. The body gets one
/// extra final line, `/system scheduler remove [find name="<name>"]`, so the
/// entry deletes itself after its first run. The scheduler line carries
/// `on-event=<name>` so the entry actually invokes the script.
pub fn one_time_script(
    body: &[String],
    name: &str,
    start_time: &str,
    interval: Option<&str>,
) -> Fragment {
    let cleanup = format!("{SYSTEM_SCHEDULER_PATH} remove [find name={}]", quoted(name));
    let source: Vec<String> = body
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(cleanup.as_str()))
        .map(escape_quoted)
        .collect();

    Fragment::new()
        .with_command(
            SYSTEM_SCRIPT_PATH,
            format!("add name={name} source=\"{}\"", source.join("\\n")),
        )
        .with_command(
            SYSTEM_SCHEDULER_PATH,
            format!(
                "add name={name} start-time={start_time} interval={} on-event={name}",
                interval.unwrap_or(NO_REPEAT)
            ),
        )
}
