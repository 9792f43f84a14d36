//! Plain text rendering for outline results.

use crate::model::OutlineResult;

/// Render an outline as indented text.
///
/// The title comes first (or `(untitled)`), then one line per entry
/// indented two spaces per level below H1 and followed by its page.
pub fn to_text(result: &OutlineResult) -> String {
    let mut output = String::new();

    if result.title.is_empty() {
        output.push_str("(untitled)");
    } else {
        output.push_str(&result.title);
    }
    output.push('\n');

    for entry in &result.outline {
        let indent = "  ".repeat((entry.level.number() - 1) as usize);
        output.push_str(&format!(
            "{}{} {} (p. {})\n",
            indent, entry.level, entry.text, entry.page
        ));
    }

    output.trim_end().to_string()
}
