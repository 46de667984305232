//! Domain types for termdeck.

use serde::{Deserialize, Serialize};

// ============================================================================
// LAYOUT TAGS
// ============================================================================

/// Rendering strategy for a slide, resolved from its layout tag.
///
/// The set is closed: twelve known strategies plus `Plain`, the fallback
/// every unrecognized tag resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideLayout {
    /// Opening slide: centered title, byline, boxed paragraphs.
    Introductory,
    /// Product intro: text column plus a side panel with image and link.
    AppIntroduction,
    /// Concept cards in a three-column grid.
    BasicConcepts,
    /// Numbered heading/text pairs in a vertical list.
    StructuredExplanation,
    /// Centered title over a two-column card grid.
    ModernBold,
    /// Stacked panels: prose and diagram above, lists below.
    CleanInformative,
    /// Side-by-side panels: prose and diagram left, lists right.
    MultiAgentSystem,
    /// Full-width prose with list items as a boxed grid.
    InnovativeInterface,
    /// Two-column card grid with alternating icons.
    CollaborativeSolutions,
    /// Side-by-side cards with gear icons.
    TechnicalIntegration,
    /// Single-column case study: prose, diagram, boxed list.
    ExampleCase,
    /// Centered title over one box of paragraphs.
    FuturisticVision,
    /// Fallback: title, subtitle, items top to bottom.
    #[default]
    Plain,
}

impl SlideLayout {
    /// Resolves a layout tag. Unrecognized tags map to `Plain` so that
    /// every slide renders through some strategy.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "introductory-slide" => SlideLayout::Introductory,
            "app-introduction" => SlideLayout::AppIntroduction,
            "basic-concepts" => SlideLayout::BasicConcepts,
            "structured-explanation" => SlideLayout::StructuredExplanation,
            "modern-bold" => SlideLayout::ModernBold,
            "clean-informative" => SlideLayout::CleanInformative,
            "multi-agent-system" => SlideLayout::MultiAgentSystem,
            "innovative-interface" => SlideLayout::InnovativeInterface,
            "collaborative-solutions" => SlideLayout::CollaborativeSolutions,
            "technical-integration" => SlideLayout::TechnicalIntegration,
            "example-case" => SlideLayout::ExampleCase,
            "futuristic-vision" => SlideLayout::FuturisticVision,
            _ => SlideLayout::Plain,
        }
    }

    /// The canonical kebab-case tag.
    pub fn tag(&self) -> &'static str {
        match self {
            SlideLayout::Introductory => "introductory-slide",
            SlideLayout::AppIntroduction => "app-introduction",
            SlideLayout::BasicConcepts => "basic-concepts",
            SlideLayout::StructuredExplanation => "structured-explanation",
            SlideLayout::ModernBold => "modern-bold",
            SlideLayout::CleanInformative => "clean-informative",
            SlideLayout::MultiAgentSystem => "multi-agent-system",
            SlideLayout::InnovativeInterface => "innovative-interface",
            SlideLayout::CollaborativeSolutions => "collaborative-solutions",
            SlideLayout::TechnicalIntegration => "technical-integration",
            SlideLayout::ExampleCase => "example-case",
            SlideLayout::FuturisticVision => "futuristic-vision",
            SlideLayout::Plain => "plain",
        }
    }
}

impl Serialize for SlideLayout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for SlideLayout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(SlideLayout::from_tag(&tag))
    }
}

// ============================================================================
// CONTENT
// ============================================================================

/// Names one of the hardcoded flow illustrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    /// Retrieval-augmented generation pipeline.
    Rag,
    /// Coordinator plus specialized agents.
    MultiAgent,
    /// Case study: sales assistant.
    SalesAssistant,
    /// Case study: legal document analysis.
    LegalAnalysis,
    /// Case study: research assistant.
    ResearchAssistant,
}

impl DiagramKind {
    /// Resolves a diagram tag; `None` for names with no illustration.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rag-diagram" => Some(DiagramKind::Rag),
            "sma-diagram" => Some(DiagramKind::MultiAgent),
            "example1-diagram" => Some(DiagramKind::SalesAssistant),
            "example2-diagram" => Some(DiagramKind::LegalAnalysis),
            "example3-diagram" => Some(DiagramKind::ResearchAssistant),
            _ => None,
        }
    }

    /// The tag used in deck data.
    pub fn tag(&self) -> &'static str {
        match self {
            DiagramKind::Rag => "rag-diagram",
            DiagramKind::MultiAgent => "sma-diagram",
            DiagramKind::SalesAssistant => "example1-diagram",
            DiagramKind::LegalAnalysis => "example2-diagram",
            DiagramKind::ResearchAssistant => "example3-diagram",
        }
    }
}

impl Serialize for DiagramKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for DiagramKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        DiagramKind::from_tag(&tag)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown diagram: {tag}")))
    }
}

/// One typed block within a slide's content sequence.
///
/// `Text` and `Heading` values may carry the emphasis markup subset
/// (`**strong**`, `*emphasis*`) handled by [`crate::markup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Body paragraph.
    Text { value: String },
    /// Section heading.
    Heading { value: String },
    /// External image, shown as a placeholder in the terminal.
    Image { url: String, alt_text: String },
    /// Call-to-action link.
    Link { url: String, label: String },
    /// Bulleted list.
    List { items: Vec<String> },
    /// Hardcoded flow illustration.
    Diagram {
        #[serde(rename = "value")]
        kind: DiagramKind,
    },
}

// ============================================================================
// SLIDES
// ============================================================================

/// An embedded external lab widget reachable from a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabLink {
    /// Button label, e.g. "Laboratorio: System Prompt".
    pub title: String,
    /// The externally hosted widget.
    pub url: String,
}

/// One immutable unit of deck content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// 1-based position, contiguous with array order. Stable render key
    /// only; never used for lookup.
    pub sequence_number: u32,
    /// Slide title.
    pub title: String,
    /// Slide subtitle.
    pub subtitle: String,
    /// Ordered content blocks.
    pub content: Vec<ContentItem>,
    /// Rendering strategy tag.
    pub layout: SlideLayout,
    /// Cosmetic scheme name; carried through but unused by logic.
    pub color_scheme: String,
    /// Lab widgets this slide can open in a modal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labs: Vec<LabLink>,
}

/// The fixed, ordered slide sequence. Set once at load; immutable after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title, shown in the title bar.
    pub title: String,
    /// Slides in presentation order. Never empty.
    pub slides: Vec<SlideRecord>,
}

impl Deck {
    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The slide at `index`. Callers hold a cursor, so `index` is in range.
    pub fn slide(&self, index: usize) -> &SlideRecord {
        &self.slides[index]
    }

    /// All labs in deck order, paired with their slide's sequence number.
    pub fn labs(&self) -> Vec<(u32, &LabLink)> {
        self.slides
            .iter()
            .flat_map(|s| s.labs.iter().map(|lab| (s.sequence_number, lab)))
            .collect()
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for deck exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_tag_resolves_to_its_strategy() {
        let tags = [
            ("introductory-slide", SlideLayout::Introductory),
            ("app-introduction", SlideLayout::AppIntroduction),
            ("basic-concepts", SlideLayout::BasicConcepts),
            ("structured-explanation", SlideLayout::StructuredExplanation),
            ("modern-bold", SlideLayout::ModernBold),
            ("clean-informative", SlideLayout::CleanInformative),
            ("multi-agent-system", SlideLayout::MultiAgentSystem),
            ("innovative-interface", SlideLayout::InnovativeInterface),
            ("collaborative-solutions", SlideLayout::CollaborativeSolutions),
            ("technical-integration", SlideLayout::TechnicalIntegration),
            ("example-case", SlideLayout::ExampleCase),
            ("futuristic-vision", SlideLayout::FuturisticVision),
        ];
        for (tag, layout) in tags {
            assert_eq!(SlideLayout::from_tag(tag), layout, "tag {tag}");
            assert_eq!(layout.tag(), tag, "round trip for {tag}");
        }
    }

    #[test]
    fn unrecognized_tags_fall_back_to_plain() {
        assert_eq!(SlideLayout::from_tag(""), SlideLayout::Plain);
        assert_eq!(SlideLayout::from_tag("holographic"), SlideLayout::Plain);
        assert_eq!(SlideLayout::from_tag("Introductory-Slide"), SlideLayout::Plain);
    }

    #[test]
    fn diagram_tags_resolve() {
        assert_eq!(DiagramKind::from_tag("rag-diagram"), Some(DiagramKind::Rag));
        assert_eq!(DiagramKind::from_tag("sma-diagram"), Some(DiagramKind::MultiAgent));
        assert_eq!(DiagramKind::from_tag("mystery-diagram"), None);
    }

    #[test]
    fn content_items_serialize_with_type_tags() {
        let item = ContentItem::Image {
            url: "/logo.png".into(),
            alt_text: "Logo".into(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"type":"image","url":"/logo.png","alt_text":"Logo"}"#);

        let diagram = ContentItem::Diagram { kind: DiagramKind::Rag };
        let json = serde_json::to_string(&diagram).unwrap();
        assert_eq!(json, r#"{"type":"diagram","value":"rag-diagram"}"#);
    }
}
