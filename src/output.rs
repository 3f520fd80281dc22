use std::fmt::Write;
use std::path::Path;

use similar::{ChangeTag, TextDiff};

use crate::error::Result;
use crate::options::EditorOptions;

/// Options as TOML under a `# <path>` header.
pub fn render_options(path: &Path, options: &EditorOptions) -> Result<String> {
    let body = toml::to_string(options)?;
    if body.is_empty() {
        return Ok(format!("# {}\n# (editor defaults)\n", path.display()));
    }
    Ok(format!("# {}\n{body}", path.display()))
}

/// Unified diff between two sets of live editor options.
pub fn render_diff(label: &str, before: &EditorOptions, after: &EditorOptions) -> Result<String> {
    let original = toml::to_string(before)?;
    let content = toml::to_string(after)?;
    let diff = TextDiff::from_lines(&original, &content);

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "--- {label}");
    let _ = writeln!(out, "+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                let _ = write!(out, "{sign}{change}");
            }
        }
    }

    Ok(out)
}
