//! Console rendering of a mined minimal model

use fmview::application::MinimalResult;

/// One feature per line, then `sum <n> <file>` rows when sums were computed
pub fn render_minimal(result: &MinimalResult) -> String {
    let mut out = String::new();
    for feature in &result.features {
        out.push_str(feature);
        out.push('\n');
    }
    for sum in &result.sums {
        out.push_str(&format!("sum {} {}\n", sum.sum, sum.file.display()));
    }
    out
}

pub fn render_summary(result: &MinimalResult, diff_tolerance: usize) -> String {
    format!(
        "{} feature(s) shared by {} configuration(s), diff tolerance {}",
        result.features.len(),
        result.files.len(),
        diff_tolerance
    )
}
