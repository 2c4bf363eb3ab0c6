use xi_rope::Rope;

use crate::parsing::{ParsedScript, regions::Region, rope::slice_to_string};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Lines are numbered 1, 2, 3, ... and each has exactly one category
/// - Every line span slices back to the line's text
/// - Every region spans at least one line and ends no later than one past the last line
/// - Regions of the same kind never overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, script: &ParsedScript) {
    assert_eq!(
        script.lines.len(),
        script.categories.len(),
        "every line needs exactly one category"
    );

    for (i, line) in script.lines.iter().enumerate() {
        assert_eq!(line.index, i + 1, "line numbering broken at {line:?}");
        assert_eq!(
            slice_to_string(rope, line.span),
            line.text,
            "line span does not slice back to its text: {line:?}"
        );
    }

    let n = script.line_count();
    for r in &script.regions {
        assert!(r.start < r.end, "empty region emitted: {r}");
        assert!(
            r.start >= 1 && r.end <= n + 1,
            "region out of bounds: {r} (line count: {n})"
        );
    }

    for (i, a) in script.regions.iter().enumerate() {
        for b in &script.regions[i + 1..] {
            assert!(
                a.kind != b.kind || !overlaps(a, b),
                "regions of the same kind overlap: {a} and {b}"
            );
        }
    }
}

fn overlaps(a: &Region, b: &Region) -> bool {
    a.start < b.end && b.start < a.end
}
