//! Natural ordering for asset filenames
//!
//! Names are split into alternating runs of ASCII digits and non-digits.
//! Digit runs compare by integer value, everything else compares
//! lexicographically, so `2.png` sorts before `10.png`.

use std::cmp::Ordering;

/// Sort key used to position assets within a project.
///
/// Filesystem assets get their index in natural order; manifest entries get
/// an explicit position or [`UNPOSITIONED`].
pub type Position = f64;

/// Position given to manifest entries that do not declare one.
///
/// Larger than any filesystem index so such entries land after every file.
pub const UNPOSITIONED: Position = f64::MAX;

/// Split a name into alternating digit and non-digit runs
fn runs(name: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut previous_digit = None;

    for (index, ch) in name.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if previous_digit.is_some_and(|prev| prev != is_digit) {
            parts.push(&name[start..index]);
            start = index;
        }
        previous_digit = Some(is_digit);
    }

    if start < name.len() {
        parts.push(&name[start..]);
    }

    parts
}

fn is_numeric(run: &str) -> bool {
    !run.is_empty() && run.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit runs by integer value without parsing them
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural-order comparator for filenames.
///
/// A run missing on one side is treated as the empty string.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_runs = runs(a);
    let b_runs = runs(b);

    for index in 0..a_runs.len().max(b_runs.len()) {
        let a_run = a_runs.get(index).copied().unwrap_or("");
        let b_run = b_runs.get(index).copied().unwrap_or("");

        let ordering = if is_numeric(a_run) && is_numeric(b_run) {
            compare_numeric(a_run, b_run)
        } else {
            a_run.cmp(b_run)
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Sort names in natural order.
///
/// Names that compare equal (`01.png` and `1.png`) keep plain lexicographic
/// order so the result does not depend on directory listing order.
pub fn sort_natural(names: &mut [String]) {
    names.sort();
    names.sort_by(|a, b| natural_cmp(a, b));
}
