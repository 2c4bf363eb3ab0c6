use xi_rope::Rope;

use super::span::Span;

/// A single line of the script.
///
/// Lines are values: they are rebuilt from the buffer on every pass and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub index: usize,
    /// Byte span of the line content in the rope, excluding the terminator.
    pub span: Span,
    /// The line text without `\n` (or `\r\n`).
    pub text: String,
}

/// Splits the rope into lines the way an editor numbers them.
///
/// Every `\n` ends a line, so a buffer ending in a newline has a trailing
/// empty line and an empty buffer is a single empty line. A `\r` left over
/// from a CRLF terminator is stripped from the text and the span.
pub fn split_lines(rope: &Rope) -> Vec<Line> {
    let mut out = Vec::new();
    let mut offset = 0usize;
    let mut last_terminated = true;

    for raw in rope.lines_raw(..) {
        let start = offset;
        offset += raw.len();
        last_terminated = raw.ends_with('\n');

        let text = raw.trim_end_matches('\n');
        let text = text.strip_suffix('\r').unwrap_or(text);
        out.push(Line {
            index: out.len() + 1,
            span: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        });
    }

    if last_terminated {
        out.push(Line {
            index: out.len() + 1,
            span: Span {
                start: offset,
                end: offset,
            },
            text: String::new(),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(rope: &Rope) -> Vec<String> {
        split_lines(rope).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn empty_buffer_is_one_empty_line() {
        let lines = split_lines(&Rope::from(""));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].index, 1);
        assert_eq!(lines[0].text, "");
        assert!(lines[0].span.is_empty());
    }

    #[test]
    fn trailing_newline_adds_empty_line() {
        assert_eq!(texts(&Rope::from("JOHN\nHello.\n")), vec!["JOHN", "Hello.", ""]);
    }

    #[test]
    fn no_trailing_newline() {
        assert_eq!(texts(&Rope::from("JOHN\nHello.")), vec!["JOHN", "Hello."]);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let rope = Rope::from("INT. HOUSE\r\nJOHN\r\n");
        let lines = split_lines(&rope);
        assert_eq!(lines[0].text, "INT. HOUSE");
        assert_eq!(lines[0].span, Span { start: 0, end: 10 });
        assert_eq!(lines[1].text, "JOHN");
        assert_eq!(lines[1].span, Span { start: 12, end: 16 });
        assert_eq!(lines[2].span, Span { start: 18, end: 18 });
    }

    #[test]
    fn indices_are_one_based_and_contiguous() {
        let lines = split_lines(&Rope::from("a\n\nb\n"));
        let indices: Vec<usize> = lines.iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn spans_slice_back_to_text() {
        let rope = Rope::from("EXT. PARK - NIGHT\n  (beat)\n\nMARY\n");
        for line in split_lines(&rope) {
            assert_eq!(
                rope.slice_to_cow(line.span.start..line.span.end),
                line.text.as_str()
            );
        }
    }
}
