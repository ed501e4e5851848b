use cssfmt::ParseError;
use std::path::Path;

/// How many lines of context to show above the failing line.
const CONTEXT_LINES: usize = 2;

/// `path:line: message`, then the failing line with a caret under the
/// column the error was found at.
pub fn render_error(path: &Path, source: &str, err: &ParseError) -> String {
    let mut out = format!("{}:{}: {}\n", path.display(), err.line(), err);

    let lines: Vec<&str> = source.split('\n').collect();
    let Some(index) = err.line().checked_sub(1).filter(|&i| i < lines.len()) else {
        return out;
    };

    for n in index.saturating_sub(CONTEXT_LINES)..=index {
        out.push_str(&format!("{:>5} | {}\n", n + 1, lines[n]));
    }
    out.push_str(&format!(
        "{:>5} | {}^\n",
        "",
        " ".repeat(err.column().saturating_sub(1))
    ));
    out
}
