//! Deck outline formatting.
//!
//! Pure functions: (Deck, OutputFormat) to String. No I/O, no side effects.

use crate::markup;
use crate::types::{ContentItem, Deck, OutputFormat};

/// Format a deck outline for output.
pub fn format_outline(deck: &Deck, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(deck),
        OutputFormat::Json => format_json(deck),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(deck: &Deck) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n\n", deck.title));

    for slide in &deck.slides {
        out.push_str(&format!("{:>3}. {}\n", slide.sequence_number, slide.title));
        out.push_str(&format!("     {}\n", slide.subtitle));
        out.push_str(&format!(
            "     [{} · {}]\n",
            slide.layout.tag(),
            slide.color_scheme
        ));
        for item in &slide.content {
            if let ContentItem::Heading { value } = item {
                out.push_str(&format!("       - {}\n", markup::plain_text(value)));
            }
        }
        for lab in &slide.labs {
            out.push_str(&format!("       lab: {} -> {}\n", lab.title, lab.url));
        }
        out.push('\n');
    }

    out.push_str(&format_summary(deck));

    out
}

fn format_summary(deck: &Deck) -> String {
    let items: usize = deck.slides.iter().map(|s| s.content.len()).sum();
    let diagrams = deck
        .slides
        .iter()
        .flat_map(|s| &s.content)
        .filter(|item| matches!(item, ContentItem::Diagram { .. }))
        .count();

    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Slides:        {}\n", deck.len()));
    out.push_str(&format!("Content items: {}\n", items));
    out.push_str(&format!("Diagrams:      {}\n", diagrams));
    out.push_str(&format!("Labs:          {}\n", deck.labs().len()));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(deck: &Deck) -> String {
    serde_json::to_string_pretty(deck).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize deck to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Human format tests ---

    #[test]
    fn human_format_lists_every_slide() {
        let deck = Deck::builtin();
        let output = format_outline(&deck, OutputFormat::Human);

        for slide in &deck.slides {
            assert!(output.contains(&slide.title), "missing {}", slide.title);
        }
        assert!(output.contains("  1. "));
        assert!(output.contains(" 15. "));
    }

    #[test]
    fn human_format_shows_layout_and_scheme() {
        let deck = Deck::builtin();
        let output = format_outline(&deck, OutputFormat::Human);

        assert!(output.contains("[introductory-slide · vibrant-gradient]"));
        assert!(output.contains("[futuristic-vision · purple-blue-gradient]"));
    }

    #[test]
    fn human_format_shows_headings_without_markup() {
        let deck = Deck::builtin();
        let output = format_outline(&deck, OutputFormat::Human);

        assert!(output.contains("- ¿Qué es RAG?"));
        assert!(output.contains("- Function Calling: La Clave para la Acción"));
    }

    #[test]
    fn human_format_shows_labs() {
        let deck = Deck::builtin();
        let output = format_outline(&deck, OutputFormat::Human);

        assert!(output.contains("lab: 🧪 Laboratorio: System Prompt"));
        assert!(output.contains("https://dify.andres-wong.com/chatbot/ZM9Cfgj2LLfuIi6Q"));
    }

    #[test]
    fn human_format_includes_summary() {
        let output = format_outline(&Deck::builtin(), OutputFormat::Human);

        assert!(output.contains("=== Summary ==="));
        assert!(output.contains("Slides:        15"));
        assert!(output.contains("Diagrams:      5"));
        assert!(output.contains("Labs:          3"));
    }

    // --- JSON format tests ---

    #[test]
    fn json_format_is_valid_json() {
        let output = format_outline(&Deck::builtin(), OutputFormat::Json);

        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");
        assert!(parsed.is_object());
        assert_eq!(parsed["slides"].as_array().unwrap().len(), 15);
    }

    #[test]
    fn json_format_serializes_layout_as_tag() {
        let output = format_outline(&Deck::builtin(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["slides"][0]["layout"], "introductory-slide");
        assert_eq!(parsed["slides"][6]["layout"], "clean-informative");
    }

    #[test]
    fn json_format_omits_empty_labs() {
        let output = format_outline(&Deck::builtin(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(parsed["slides"][0].get("labs").is_none());
        assert_eq!(parsed["slides"][3]["labs"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["slides"][6]["labs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn json_format_tags_content_items() {
        let output = format_outline(&Deck::builtin(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let first_item = &parsed["slides"][0]["content"][0];
        assert_eq!(first_item["type"], "text");
        let diagram = &parsed["slides"][6]["content"][0];
        assert_eq!(diagram["type"], "diagram");
        assert_eq!(diagram["value"], "rag-diagram");
    }
}
