//! Emphasis markup for slide text.
//!
//! Slide copy may mark runs as `**strong**` or `*italic*`. Parsing turns a
//! string into typed segments instead of substituting markup into it, so
//! content is never interpreted beyond these two whitelisted markers:
//! unterminated or empty markers stay literal text, and markers inside an
//! emphasized run are not re-parsed (no nesting).
//!
//! Pure functions, no I/O.

/// Emphasis level of a parsed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Regular text.
    #[default]
    Plain,
    /// `**strong**`, rendered bold.
    Strong,
    /// `*italic*`.
    Italic,
}

/// A run of text carrying a single emphasis level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Segment {
    fn new(text: &str, emphasis: Emphasis) -> Self {
        Segment {
            text: text.to_string(),
            emphasis,
        }
    }
}

/// Parse a line of slide text into emphasis segments.
///
/// Segments appear in input order and concatenating their `text` fields
/// yields the input minus the recognized markers. Unrecognized or
/// unbalanced stars are kept as literal text.
pub fn parse(input: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(star) = input[pos..].find('*').map(|off| pos + off) {
        let rest = &input[star..];

        let marked = if rest.starts_with("**") {
            delimited(rest, "**")
                .map(|(text, len)| (Segment::new(text, Emphasis::Strong), len))
        } else {
            None
        }
        .or_else(|| {
            delimited(rest, "*").map(|(text, len)| (Segment::new(text, Emphasis::Italic), len))
        });

        match marked {
            Some((segment, len)) => {
                if plain_start < star {
                    segments.push(Segment::new(&input[plain_start..star], Emphasis::Plain));
                }
                segments.push(segment);
                pos = star + len;
                plain_start = pos;
            }
            None => {
                // Literal star; keep scanning after it.
                pos = star + 1;
            }
        }
    }

    if plain_start < input.len() {
        segments.push(Segment::new(&input[plain_start..], Emphasis::Plain));
    }

    segments
}

/// Strip emphasis markers, keeping only the text.
pub fn plain_text(input: &str) -> String {
    parse(input).into_iter().map(|seg| seg.text).collect()
}

// ============================================================================
// INTERNAL
// ============================================================================

/// Split `s`, which starts with `marker`, into the enclosed text and the
/// byte length of the whole marked span. `None` when the marker is
/// unterminated or encloses nothing.
fn delimited<'a>(s: &'a str, marker: &str) -> Option<(&'a str, usize)> {
    let body = &s[marker.len()..];
    let close = body.find(marker)?;
    if close == 0 {
        return None;
    }
    Some((&body[..close], marker.len() + close + marker.len()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Segment {
        Segment::new(s, Emphasis::Plain)
    }

    fn strong(s: &str) -> Segment {
        Segment::new(s, Emphasis::Strong)
    }

    fn italic(s: &str) -> Segment {
        Segment::new(s, Emphasis::Italic)
    }

    // --- parse tests ---

    #[test]
    fn test_plain_passes_through() {
        assert_eq!(parse("sin marcas"), vec![plain("sin marcas")]);
    }

    #[test]
    fn test_strong() {
        assert_eq!(
            parse("usa **RAG** aqui"),
            vec![plain("usa "), strong("RAG"), plain(" aqui")]
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            parse("con *contexto* extra"),
            vec![plain("con "), italic("contexto"), plain(" extra")]
        );
    }

    #[test]
    fn test_mixed_markers() {
        assert_eq!(
            parse("**System Prompt** define *como* responde"),
            vec![
                strong("System Prompt"),
                plain(" define "),
                italic("como"),
                plain(" responde"),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_markers() {
        assert_eq!(parse("**todo**"), vec![strong("todo")]);
        assert_eq!(
            parse("*inicio* y *final*"),
            vec![italic("inicio"), plain(" y "), italic("final")]
        );
    }

    #[test]
    fn test_unterminated_strong_is_literal() {
        assert_eq!(parse("abre **fuerte"), vec![plain("abre **fuerte")]);
    }

    #[test]
    fn test_unterminated_italic_is_literal() {
        assert_eq!(parse("2 * 3 = 6"), vec![plain("2 * 3 = 6")]);
    }

    #[test]
    fn test_empty_markers_are_literal() {
        assert_eq!(parse("****"), vec![plain("****")]);
        assert_eq!(parse("a ** b"), vec![plain("a ** b")]);
    }

    #[test]
    fn test_no_nesting_inside_strong() {
        // Inner stars are kept as literal text of the strong run.
        assert_eq!(
            parse("**a *b* c**"),
            vec![strong("a *b* c")]
        );
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(
            parse("Potencia tu **equipo** 🚀"),
            vec![plain("Potencia tu "), strong("equipo"), plain(" 🚀")]
        );
    }

    // --- plain_text tests ---

    #[test]
    fn test_plain_text_strips_markers() {
        assert_eq!(
            plain_text("**Function Calling** y *RAG*"),
            "Function Calling y RAG"
        );
    }

    #[test]
    fn test_plain_text_keeps_literal_stars() {
        assert_eq!(plain_text("2 * 3"), "2 * 3");
    }
}
