//! Minimal line diff for failure reporting.

/// Unified-diff-flavored rendering of the difference between an
/// expected and an actual rendering. Returns `[identical]` when the
/// two match, which callers use to suppress empty diff sections.
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return "[identical]".to_string();
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let common = expected_lines.len().min(actual_lines.len());

    let mut out = String::from("--- expected\n+++ actual\n");
    for i in 0..common {
        if expected_lines[i] != actual_lines[i] {
            out.push_str(&format!(
                "@@ line {} @@\n-{}\n+{}\n",
                i + 1,
                expected_lines[i],
                actual_lines[i]
            ));
        }
    }
    for (i, line) in expected_lines.iter().enumerate().skip(common) {
        out.push_str(&format!("@@ line {} @@\n-{line}\n", i + 1));
    }
    for (i, line) in actual_lines.iter().enumerate().skip(common) {
        out.push_str(&format!("@@ line {} @@\n+{line}\n", i + 1));
    }
    out
}
