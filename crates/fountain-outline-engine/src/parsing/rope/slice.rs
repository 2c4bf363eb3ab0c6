use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts text for a span, truncating to at most `max` bytes with a "..."
/// suffix if needed. Truncation backs off to the nearest char boundary.
///
/// Used for human-readable snapshot output.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_line_unchanged() {
        let rope = Rope::from("JOHN");
        let sp = Span { start: 0, end: 4 };
        assert_eq!(preview(&rope, sp, 10), "JOHN");
    }

    #[test]
    fn preview_truncates_long_line() {
        let rope = Rope::from("INT. HOUSE - DAY");
        let sp = Span { start: 0, end: 16 };
        assert_eq!(preview(&rope, sp, 10), "INT. HOUSE...");
    }

    #[test]
    fn preview_backs_off_to_char_boundary() {
        // 'é' is two bytes; cutting at 4 would split it.
        let rope = Rope::from("CAFé SCENE");
        let sp = Span { start: 0, end: 11 };
        assert_eq!(preview(&rope, sp, 4), "CAF...");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("EXT. PARK - NIGHT");
        let sp = Span { start: 5, end: 9 };
        assert_eq!(slice_to_string(&rope, sp), "PARK");
    }
}
