//! Pure rendering: map App state to ratatui widget trees.
//!
//! One render function per layout strategy; the main `render()` paints the
//! backdrop and frame chrome, then dispatches on the current slide's layout
//! tag. Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.
//! `hit_test` mirrors the frame geometry so mouse dispatch stays pure and
//! testable without a terminal.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::markup::{self, Emphasis};
use crate::types::{ContentItem, DiagramKind, SlideLayout, SlideRecord};

use super::state::{Action, App, Overlay};
use super::theme;

/// Columns reserved on each side of the content band for the chevrons.
const CHEVRON_GUTTER: u16 = 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole frame: backdrop, chrome, current slide, overlay.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let index = app.view.cursor.index();
    let slide = app.deck.slide(index);

    paint_backdrop(index, frame.buffer_mut(), area);

    // Frame chrome: title bar, content band, indicator dots, help + clock.
    let chunks = Layout::vertical([
        Constraint::Length(1), // title bar
        Constraint::Min(0),    // slide content
        Constraint::Length(1), // indicator dots
        Constraint::Length(1), // help + clock
    ])
    .split(area);

    render_title_bar(app, frame, chunks[0]);
    render_chevrons(frame, chunks[1]);
    render_dots(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    let content = chunks[1].inner(Margin {
        horizontal: CHEVRON_GUTTER,
        vertical: 0,
    });
    render_slide(slide, frame, content);

    if let Some(Overlay::Lab { lab }) = app.view.overlay {
        render_lab_overlay(slide, lab, frame, area);
    }
}

fn render_slide(slide: &SlideRecord, frame: &mut Frame, area: Rect) {
    let accent = theme::accent(slide.layout);
    match slide.layout {
        SlideLayout::Introductory => render_introductory(slide, accent, frame, area),
        SlideLayout::AppIntroduction => render_app_introduction(slide, accent, frame, area),
        SlideLayout::BasicConcepts => render_basic_concepts(slide, accent, frame, area),
        SlideLayout::StructuredExplanation => {
            render_structured_explanation(slide, accent, frame, area)
        }
        SlideLayout::ModernBold => render_modern_bold(slide, accent, frame, area),
        SlideLayout::CleanInformative => render_clean_informative(slide, accent, frame, area),
        SlideLayout::MultiAgentSystem => render_multi_agent_system(slide, accent, frame, area),
        SlideLayout::InnovativeInterface => {
            render_innovative_interface(slide, accent, frame, area)
        }
        SlideLayout::CollaborativeSolutions => {
            render_collaborative_solutions(slide, accent, frame, area)
        }
        SlideLayout::TechnicalIntegration => {
            render_technical_integration(slide, accent, frame, area)
        }
        SlideLayout::ExampleCase => render_example_case(slide, accent, frame, area),
        SlideLayout::FuturisticVision => render_futuristic_vision(slide, accent, frame, area),
        SlideLayout::Plain => render_plain(slide, accent, frame, area),
    }
}

// ============================================================================
// FRAME CHROME
// ============================================================================

/// Deck title on the left, position readout on the right.
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let (current, total) = app.view.cursor.position();
    let position = format!("{current}/{total}");
    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(position.len() as u16 + 1),
    ])
    .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(app.deck.title.clone(), theme::STYLE_TITLE),
    ]));
    frame.render_widget(title, chunks[0]);

    let readout = Paragraph::new(Line::from(Span::styled(position, theme::STYLE_DIM)));
    frame.render_widget(readout, chunks[1]);
}

/// Clickable previous/next affordances in the side gutters.
fn render_chevrons(frame: &mut Frame, content: Rect) {
    if content.width < 2 * CHEVRON_GUTTER || content.height == 0 {
        return;
    }
    let row = content.y + content.height / 2;
    let left = Rect::new(content.x + 1, row, 1, 1);
    let right = Rect::new(content.right().saturating_sub(2), row, 1, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("‹", theme::STYLE_CHEVRON))),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("›", theme::STYLE_CHEVRON))),
        right,
    );
}

/// One dot per slide, the active one filled. Click targets line up with
/// `hit_test`, which repeats this row's origin arithmetic.
fn render_dots(app: &App, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let total = app.deck.len();
    let current = app.view.cursor.index();

    let mut spans = Vec::with_capacity(total * 2);
    for i in 0..total {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if i == current {
            spans.push(Span::styled("●", theme::STYLE_DOT_ACTIVE));
        } else {
            spans.push(Span::styled("·", theme::STYLE_DOT_INACTIVE));
        }
    }

    let width = ((total * 2).saturating_sub(1)).min(u16::MAX as usize) as u16;
    let row = Rect::new(dot_row_origin(area, total), area.y, width, 1).intersection(area);
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

/// Left edge of the centered dot row.
fn dot_row_origin(area: Rect, total: usize) -> u16 {
    let width = ((total * 2).saturating_sub(1)).min(u16::MAX as usize) as u16;
    area.x + area.width.saturating_sub(width) / 2
}

/// Keybinding hints on the left, wall clock on the right.
fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(app.clock.len() as u16 + 1),
    ])
    .split(area);

    let slide = app.deck.slide(app.view.cursor.index());
    let help = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(help_text(app.view.overlay.is_some(), slide), theme::STYLE_HELP),
    ]));
    frame.render_widget(help, chunks[0]);

    let clock = Paragraph::new(Line::from(Span::styled(
        app.clock.clone(),
        theme::STYLE_CLOCK,
    )));
    frame.render_widget(clock, chunks[1]);
}

fn help_text(overlay_open: bool, slide: &SlideRecord) -> String {
    if overlay_open {
        return "[Enter] open in browser  [Esc] close".to_string();
    }
    let mut help = String::from("[←/→] slides  [1-9] jump  [q] quit");
    match slide.labs.len() {
        0 => {}
        1 => help.push_str("  [o] lab"),
        _ => help.push_str("  [o/O] labs"),
    }
    help
}

/// Hint line naming the slide's labs and the keys that open them.
fn lab_hint(slide: &SlideRecord) -> Option<String> {
    match slide.labs.len() {
        0 => None,
        1 => Some(format!("{}  [o]", slide.labs[0].title)),
        _ => Some(format!(
            "{}  [o]    {}  [O]",
            slide.labs[0].title, slide.labs[1].title
        )),
    }
}

// ============================================================================
// BACKDROP
// ============================================================================

/// Per-slide backdrop: split background, sparse dot grid, corner shades.
/// Widgets rendered afterwards overwrite only the cells they cover, so the
/// backdrop shows through wherever the slide leaves gaps.
fn paint_backdrop(index: usize, buf: &mut Buffer, area: Rect) {
    let (upper, lower) = theme::background(index);
    let split = area.y + area.height / 2;
    for y in area.top()..area.bottom() {
        let bg = if y < split { upper } else { lower };
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(bg);
            }
        }
    }

    let dot = theme::dot_color(index);
    for y in area.top()..area.bottom() {
        if y % 3 != 0 {
            continue;
        }
        for x in area.left()..area.right() {
            if x % 6 != 0 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('·');
                cell.set_fg(dot);
            }
        }
    }

    paint_corners(index, buf, area);
}

/// Shaded wedges in opposite corners, tinted with the slide's ornament hues.
fn paint_corners(index: usize, buf: &mut Buffer, area: Rect) {
    if area.width < 16 || area.height < 8 {
        return;
    }
    let primary = theme::decor_primary(index);
    let secondary = theme::decor_secondary(index);
    let widths = [area.width / 6, area.width / 10, area.width / 16];

    for (row, width) in widths.iter().enumerate() {
        let top = area.top() + row as u16;
        for x in area.right().saturating_sub(*width)..area.right() {
            if let Some(cell) = buf.cell_mut((x, top)) {
                cell.set_char('░');
                cell.set_fg(primary);
            }
        }
        let bottom = area.bottom() - 1 - row as u16;
        for x in area.left()..area.left() + *width {
            if let Some(cell) = buf.cell_mut((x, bottom)) {
                cell.set_char('░');
                cell.set_fg(secondary);
            }
        }
    }
}

// ============================================================================
// HIT TESTING
// ============================================================================

/// Map a click position to an action using the same geometry `render()`
/// lays down: chevron gutters flank the content band, the indicator dots
/// sit on the second-to-last row.
pub fn hit_test(column: u16, row: u16, area: Rect, slide_count: usize) -> Option<Action> {
    if !area.contains(Position { x: column, y: row }) || area.height < 4 {
        return None;
    }
    let content_top = area.y + 1;
    let dots_row = area.bottom() - 2;

    if row == dots_row {
        let origin = dot_row_origin(Rect::new(area.x, dots_row, area.width, 1), slide_count);
        if column >= origin && (column - origin) % 2 == 0 {
            let index = ((column - origin) / 2) as usize;
            if index < slide_count {
                return Some(Action::GoToSlide(index));
            }
        }
        return None;
    }

    if row >= content_top && row < dots_row {
        if column < area.x + CHEVRON_GUTTER {
            return Some(Action::PrevSlide);
        }
        if column >= area.right().saturating_sub(CHEVRON_GUTTER) {
            return Some(Action::NextSlide);
        }
    }
    None
}

// ============================================================================
// SHARED BUILDING BLOCKS
// ============================================================================

/// Styled spans for emphasis-marked copy. Strong runs take the accent.
fn emphasis_spans(text: &str, accent: Color) -> Vec<Span<'static>> {
    markup::parse(text)
        .into_iter()
        .map(|segment| match segment.emphasis {
            Emphasis::Plain => Span::raw(segment.text),
            Emphasis::Strong => Span::styled(
                segment.text,
                Style::new().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Emphasis::Italic => {
                Span::styled(segment.text, Style::new().add_modifier(Modifier::ITALIC))
            }
        })
        .collect()
}

fn emphasis_line(text: &str, accent: Color) -> Line<'static> {
    Line::from(emphasis_spans(text, accent))
}

fn bullet_line(text: &str, accent: Color) -> Line<'static> {
    let mut spans = vec![Span::styled("• ".to_string(), Style::new().fg(accent))];
    spans.extend(emphasis_spans(text, accent));
    Line::from(spans)
}

fn tinted_title(accent: Color) -> Style {
    Style::new().fg(accent).add_modifier(Modifier::BOLD)
}

fn bordered(accent: Color) -> Block<'static> {
    Block::bordered().border_style(Style::new().fg(accent))
}

/// Title block shared by most layouts: slide title, subtitle, and the lab
/// hint when the slide carries labs.
fn render_header(
    slide: &SlideRecord,
    accent: Color,
    title_style: Style,
    centered: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let mut lines = vec![
        Line::from(Span::styled(slide.title.clone(), title_style)),
        Line::from(Span::styled(slide.subtitle.clone(), Style::new().fg(accent))),
    ];
    if let Some(hint) = lab_hint(slide) {
        lines.push(Line::from(Span::styled(hint, theme::STYLE_INTERACTIVE)));
    }
    let mut header = Paragraph::new(lines).wrap(Wrap { trim: false });
    if centered {
        header = header.alignment(Alignment::Center);
    }
    frame.render_widget(header, area);
}

/// All text item values, in data order.
fn text_items(slide: &SlideRecord) -> Vec<&str> {
    slide
        .content
        .iter()
        .filter_map(|item| match item {
            ContentItem::Text { value } => Some(value.as_str()),
            _ => None,
        })
        .collect()
}

/// All list entries, flattened in data order.
fn list_items(slide: &SlideRecord) -> Vec<&str> {
    slide
        .content
        .iter()
        .filter_map(|item| match item {
            ContentItem::List { items } => Some(items.iter().map(String::as_str)),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Headings paired with the text item that immediately follows each.
///
/// The card layouts show only these pairs; texts without a preceding
/// heading stay off the cards, matching the deck's original look.
fn heading_pairs(slide: &SlideRecord) -> Vec<(String, Option<String>)> {
    let mut pairs = Vec::new();
    for (i, item) in slide.content.iter().enumerate() {
        if let ContentItem::Heading { value } = item {
            let text = match slide.content.get(i + 1) {
                Some(ContentItem::Text { value }) => Some(value.clone()),
                _ => None,
            };
            pairs.push((value.clone(), text));
        }
    }
    pairs
}

/// Prose run: headings, texts, and diagrams in data order, blank-separated.
/// Lists, images, and links are left to the layout's other panels.
fn prose_lines(slide: &SlideRecord, accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for item in &slide.content {
        if matches!(
            item,
            ContentItem::List { .. } | ContentItem::Image { .. } | ContentItem::Link { .. }
        ) {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(item_lines(item, accent));
    }
    lines
}

/// Generic rendering for one content item, used by the layouts that show
/// items in data order.
fn item_lines(item: &ContentItem, accent: Color) -> Vec<Line<'static>> {
    match item {
        ContentItem::Text { value } => vec![emphasis_line(value, accent)],
        ContentItem::Heading { value } => vec![Line::from(Span::styled(
            value.clone(),
            Style::new().fg(accent).add_modifier(Modifier::BOLD),
        ))],
        ContentItem::Image { url, alt_text } => vec![
            Line::from(Span::styled(format!("▦ {alt_text}"), theme::STYLE_DIM)),
            Line::from(Span::styled(format!("  {url}"), theme::STYLE_URL)),
        ],
        ContentItem::Link { url, label } => vec![
            Line::from(Span::styled(format!("→ {label}"), theme::STYLE_INTERACTIVE)),
            Line::from(Span::styled(format!("  {url}"), theme::STYLE_URL)),
        ],
        ContentItem::List { items } => items
            .iter()
            .map(|entry| bullet_line(entry, accent))
            .collect(),
        ContentItem::Diagram { kind } => diagram_lines(*kind, accent),
    }
}

/// Bordered card grid shared by the pair-based layouts. `icon` may prefix
/// each card's heading with a marker depending on the pair index.
fn render_card_grid(
    pairs: &[(String, Option<String>)],
    columns: usize,
    accent: Color,
    icon: impl Fn(usize) -> Option<&'static str>,
    frame: &mut Frame,
    area: Rect,
) {
    if pairs.is_empty() || columns == 0 {
        return;
    }
    let rows: Vec<&[(String, Option<String>)]> = pairs.chunks(columns).collect();
    let row_areas =
        Layout::vertical(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()]).split(area);

    for (r, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[r]);
        for (c, (heading, text)) in row.iter().enumerate() {
            let mut heading_spans = Vec::new();
            if let Some(marker) = icon(r * columns + c) {
                heading_spans.push(Span::raw(format!("{marker} ")));
            }
            heading_spans.push(Span::styled(
                heading.clone(),
                Style::new().fg(accent).add_modifier(Modifier::BOLD),
            ));

            let mut lines = vec![Line::from(heading_spans)];
            if let Some(text) = text {
                lines.push(Line::from(""));
                lines.push(emphasis_line(text, accent));
            }
            let card = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(bordered(accent));
            frame.render_widget(card, cells[c]);
        }
    }
}

/// ①..⑳ for small ordinals, plain "n." beyond the circled range.
fn ordinal_badge(n: usize) -> String {
    if (1..=20).contains(&n) {
        if let Some(badge) = char::from_u32(0x2460 + n as u32 - 1) {
            return badge.to_string();
        }
    }
    format!("{n}.")
}

// ============================================================================
// LAYOUT: INTRODUCTORY
// ============================================================================

/// Opening slide: centered title, subtitle, and byline above one boxed
/// welcome text. The byline is the last text item; the rest fill the box.
fn render_introductory(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).split(area);

    let texts = text_items(slide);
    let (byline, paragraphs) = match texts.split_last() {
        Some((last, rest)) if !rest.is_empty() => (Some(*last), rest),
        _ => (None, texts.as_slice()),
    };

    let mut lines = vec![
        Line::from(Span::styled(slide.title.clone(), tinted_title(accent))),
        Line::from(Span::styled(slide.subtitle.clone(), Style::new().fg(accent))),
        Line::from(""),
    ];
    if let Some(byline) = byline {
        lines.push(Line::from(Span::styled(byline.to_string(), theme::STYLE_DIM)));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let mut body = Vec::new();
    for (i, text) in paragraphs.iter().enumerate() {
        if i > 0 {
            body.push(Line::from(""));
        }
        body.push(emphasis_line(text, accent));
    }
    let card = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(bordered(accent));
    frame.render_widget(card, chunks[1]);
}

// ============================================================================
// LAYOUT: APP INTRODUCTION
// ============================================================================

/// Product intro: descriptive column on the left (image, texts, link in
/// data order), feature panel on the right (first heading/text pair).
fn render_app_introduction(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);

    let columns = Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);

    let mut lines = Vec::new();
    for item in &slide.content {
        if matches!(item, ContentItem::Heading { .. }) {
            break;
        }
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(item_lines(item, accent));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), columns[0]);

    if let Some((heading, text)) = heading_pairs(slide).into_iter().next() {
        let mut panel = vec![
            Line::from(""),
            Line::from(Span::styled(
                heading,
                Style::new().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if let Some(text) = text {
            panel.push(emphasis_line(&text, accent));
        }
        let card = Paragraph::new(panel)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(bordered(accent));
        frame.render_widget(card, columns[1]);
    }
}

// ============================================================================
// LAYOUT: BASIC CONCEPTS
// ============================================================================

/// Three-up card grid of heading/text pairs.
fn render_basic_concepts(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);
    render_card_grid(&heading_pairs(slide), 3, accent, |_| None, frame, chunks[1]);
}

// ============================================================================
// LAYOUT: STRUCTURED EXPLANATION
// ============================================================================

/// Numbered walkthrough: every heading/text pair gets an ordinal badge.
fn render_structured_explanation(
    slide: &SlideRecord,
    accent: Color,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, true, frame, chunks[0]);

    let mut lines = Vec::new();
    for (i, (heading, text)) in heading_pairs(slide).iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", ordinal_badge(i + 1)),
                Style::new().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(heading.clone(), theme::STYLE_HEADING),
        ]));
        if let Some(text) = text {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(emphasis_spans(text, accent));
            lines.push(Line::from(spans));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
}

// ============================================================================
// LAYOUT: MODERN BOLD
// ============================================================================

/// Centered tinted title above a two-up grid of boxed texts.
fn render_modern_bold(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, tinted_title(accent), true, frame, chunks[0]);

    let texts = text_items(slide);
    if texts.is_empty() {
        return;
    }
    let rows: Vec<&[&str]> = texts.chunks(2).collect();
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(chunks[1]);
    for (r, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(row_areas[r]);
        for (c, text) in row.iter().enumerate() {
            let card = Paragraph::new(emphasis_line(text, accent))
                .wrap(Wrap { trim: false })
                .block(bordered(accent));
            frame.render_widget(card, cells[c]);
        }
    }
}

// ============================================================================
// LAYOUT: CLEAN INFORMATIVE
// ============================================================================

/// Prose and diagram in a top panel, supporting list in a bottom panel.
fn render_clean_informative(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);

    let bullets: Vec<Line> = list_items(slide)
        .iter()
        .map(|entry| bullet_line(entry, accent))
        .collect();
    let bottom_height = (bullets.len() as u16 + 2).min(chunks[1].height / 2);
    let panels = Layout::vertical([Constraint::Min(0), Constraint::Length(bottom_height)])
        .split(chunks[1]);

    let top = Paragraph::new(prose_lines(slide, accent))
        .wrap(Wrap { trim: false })
        .block(bordered(accent));
    frame.render_widget(top, panels[0]);

    let bottom = Paragraph::new(bullets)
        .wrap(Wrap { trim: false })
        .block(bordered(accent));
    frame.render_widget(bottom, panels[1]);
}

// ============================================================================
// LAYOUT: MULTI AGENT SYSTEM
// ============================================================================

/// Concept and diagram on the left, trait list on the right.
fn render_multi_agent_system(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);

    let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let left = Paragraph::new(prose_lines(slide, accent))
        .wrap(Wrap { trim: false })
        .block(bordered(accent));
    frame.render_widget(left, columns[0]);

    let mut lines = Vec::new();
    for (i, entry) in list_items(slide).iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(bullet_line(entry, accent));
    }
    let right = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(bordered(accent));
    frame.render_widget(right, columns[1]);
}

// ============================================================================
// LAYOUT: INNOVATIVE INTERFACE
// ============================================================================

/// One full-width panel: prose on top, list entries as a boxed two-column
/// grid underneath.
fn render_innovative_interface(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);

    let panel = bordered(accent);
    let inner = panel.inner(chunks[1]);
    frame.render_widget(panel, chunks[1]);

    let prose = Paragraph::new(prose_lines(slide, accent)).wrap(Wrap { trim: false });
    let entries = list_items(slide);
    if entries.is_empty() {
        frame.render_widget(prose, inner);
        return;
    }

    let rows: Vec<&[&str]> = entries.chunks(2).collect();
    let grid_height = rows.len() as u16 * 3;
    let zones =
        Layout::vertical([Constraint::Min(0), Constraint::Length(grid_height)]).split(inner);
    frame.render_widget(prose, zones[0]);

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(zones[1]);
    for (r, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(row_areas[r]);
        for (c, entry) in row.iter().enumerate() {
            let card = Paragraph::new(emphasis_line(entry, accent))
                .wrap(Wrap { trim: false })
                .block(Block::bordered().border_style(theme::STYLE_DIM));
            frame.render_widget(card, cells[c]);
        }
    }
}

// ============================================================================
// LAYOUT: COLLABORATIVE SOLUTIONS
// ============================================================================

/// Two-up card grid of heading/text pairs with alternating team markers.
fn render_collaborative_solutions(
    slide: &SlideRecord,
    accent: Color,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);
    render_card_grid(
        &heading_pairs(slide),
        2,
        accent,
        |i| Some(if i % 2 == 0 { "🤖" } else { "🤝" }),
        frame,
        chunks[1],
    );
}

// ============================================================================
// LAYOUT: TECHNICAL INTEGRATION
// ============================================================================

/// Heading/text cards side by side, each marked as machinery.
fn render_technical_integration(
    slide: &SlideRecord,
    accent: Color,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);

    let pairs = heading_pairs(slide);
    let columns = pairs.len().max(1);
    render_card_grid(&pairs, columns, accent, |_| Some("⚙️"), frame, chunks[1]);
}

// ============================================================================
// LAYOUT: EXAMPLE CASE
// ============================================================================

/// Case study: prose and diagram flow, takeaway list boxed at the bottom.
fn render_example_case(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);

    let panels = Layout::vertical([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    frame.render_widget(
        Paragraph::new(prose_lines(slide, accent)).wrap(Wrap { trim: false }),
        panels[0],
    );

    let bullets: Vec<Line> = list_items(slide)
        .iter()
        .map(|entry| bullet_line(entry, accent))
        .collect();
    let boxed = Paragraph::new(bullets)
        .wrap(Wrap { trim: false })
        .block(bordered(accent));
    frame.render_widget(boxed, panels[1]);
}

// ============================================================================
// LAYOUT: FUTURISTIC VISION
// ============================================================================

/// Closing slide: centered tinted title above a single boxed message.
fn render_futuristic_vision(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, tinted_title(accent), true, frame, chunks[0]);

    let mut lines = vec![Line::from("")];
    for (i, text) in text_items(slide).iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(emphasis_line(text, accent));
    }
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(bordered(accent));
    frame.render_widget(card, chunks[1]);
}

// ============================================================================
// LAYOUT: PLAIN
// ============================================================================

/// Fallback for unknown layout tags: header plus every content item in
/// data order, top to bottom.
fn render_plain(slide: &SlideRecord, accent: Color, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);
    render_header(slide, accent, theme::STYLE_TITLE, false, frame, chunks[0]);

    let mut lines = Vec::new();
    for item in &slide.content {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(item_lines(item, accent));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
}

// ============================================================================
// DIAGRAMS
// ============================================================================

/// Text rendition of an architecture diagram: stages top to bottom with
/// their descriptions, arrows between them.
fn diagram_lines(kind: DiagramKind, accent: Color) -> Vec<Line<'static>> {
    match kind {
        DiagramKind::Rag => vec![
            stage("📄 Documentos   🌐 Web   💾 Base de Datos", accent),
            flow_arrow(),
            stage("🔍 Retrieval (Recuperación)", accent),
            note("Búsqueda de información relevante basada en la consulta"),
            flow_arrow(),
            stage("🧠 LLM", accent),
            note("Genera respuesta combinando la consulta con el contexto recuperado"),
            flow_arrow(),
            stage("💬 Respuesta Contextualizada", accent),
        ],
        DiagramKind::MultiAgent => vec![
            stage("👤 Usuario", accent),
            note("Solicita información del CRM"),
            flow_arrow(),
            stage("🧠 Agente Coordinador", accent),
            note("Analiza la solicitud y coordina a los agentes especializados"),
            flow_arrow(),
            stage(
                "🔌 Agente de Conexión CRM   📊 Agente de Procesamiento   📝 Agente de Formateo",
                accent,
            ),
            flow_arrow(),
            stage("📱 Respuesta Formateada al Usuario", accent),
        ],
        DiagramKind::SalesAssistant => case_flow(
            "👤 Representante de Ventas",
            "Consulta información durante llamada con cliente",
            "Define rol como asistente de ventas experto",
            "Recupera datos de productos y clientes",
            "😊 Análisis de Sentimiento · 🔍 Búsqueda · 💡 Recomendaciones",
            "📝 Actualizar CRM · 📅 Programar · 📊 Cotizaciones",
            "💬 Respuesta Personalizada al Representante",
            accent,
        ),
        DiagramKind::LegalAnalysis => case_flow(
            "📄 Documento Legal",
            "Contrato o documento legal para análisis",
            "Instrucciones para actuar como asistente legal experto",
            "Consulta bases de datos legales y precedentes",
            "⚖️ Obligaciones · ⏱️ Plazos · ⚠️ Penalizaciones",
            "📊 Generar Reportes · 🔍 Marcar Secciones · ✏️ Sugerir Cambios",
            "📑 Análisis Legal Detallado",
            accent,
        ),
        DiagramKind::ResearchAssistant => case_flow(
            "👩‍🔬 Investigador Científico",
            "Consulta sobre avances recientes y análisis de datos",
            "Configuración para mantener rigor científico y citar fuentes",
            "Recupera información de papers científicos y bases de datos",
            "📊 Análisis Estadístico · 📚 Revisión Literatura · 📈 Visualización",
            "📊 Generar Gráficos · 🧮 Análisis Estadístico · 📝 Formatear Referencias",
            "🔬 Informe Científico con Visualizaciones",
            accent,
        ),
    }
}

/// Shared shape of the three worked-example flows: an actor, the two
/// grounding techniques, the agent team, the tool calls, and the outcome.
#[allow(clippy::too_many_arguments)]
fn case_flow(
    actor: &str,
    trigger: &str,
    prompt_role: &str,
    rag_source: &str,
    agents: &str,
    tools: &str,
    outcome: &str,
    accent: Color,
) -> Vec<Line<'static>> {
    vec![
        stage(actor, accent),
        note(trigger),
        flow_arrow(),
        stage("📋 System Prompt", accent),
        note(prompt_role),
        stage("📚 RAG", accent),
        note(rag_source),
        flow_arrow(),
        stage("🤖 Sistema Multi-Agente", accent),
        note(agents),
        stage("⚙️ Function Calling", accent),
        note(tools),
        flow_arrow(),
        stage(outcome, accent),
    ]
}

fn stage(label: &str, accent: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {label}"),
        Style::new().fg(accent).add_modifier(Modifier::BOLD),
    ))
}

fn note(text: &str) -> Line<'static> {
    Line::from(Span::styled(format!("     {text}"), theme::STYLE_DIM))
}

fn flow_arrow() -> Line<'static> {
    Line::from(Span::styled("        ▼".to_string(), theme::STYLE_DIM))
}

// ============================================================================
// LAB MODAL
// ============================================================================

/// Centered modal describing one lab of the current slide. Out-of-range
/// indices render nothing; the update layer never produces them.
fn render_lab_overlay(slide: &SlideRecord, lab: usize, frame: &mut Frame, area: Rect) {
    let Some(link) = slide.labs.get(lab) else {
        return;
    };
    let panel = centered_rect(area, 70, 9);
    frame.render_widget(Clear, panel);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(link.title.clone(), theme::STYLE_HEADING)),
        Line::from(""),
        Line::from(Span::styled(link.url.clone(), theme::STYLE_URL)),
        Line::from(""),
        Line::from(Span::styled(
            "The lab runs in the browser.".to_string(),
            theme::STYLE_DIM,
        )),
        Line::from(Span::styled(
            "[Enter] open in browser   [Esc] close".to_string(),
            theme::STYLE_HELP,
        )),
    ];
    let block = Block::bordered()
        .border_style(theme::STYLE_MODAL_BORDER)
        .title(Span::styled(
            format!(" Lab {}/{} ", lab + 1, slide.labs.len()),
            theme::STYLE_HEADING,
        ));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block),
        panel,
    );
}

/// A centered sub-rectangle, `percent_x` of the width and `height` rows.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = ((area.width as u32 * percent_x as u32) / 100) as u16;
    let width = width.clamp(1, area.width.max(1));
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::App;
    use crate::types::Deck;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn every_slide_renders_with_its_title() {
        let total = Deck::builtin().len();
        for index in 0..total {
            let mut terminal = make_terminal();
            let app = App::starting_at(Deck::builtin(), index);
            terminal.draw(|frame| render(&app, frame)).unwrap();

            let text = buffer_text(&terminal);
            let first_word = app
                .deck
                .slide(index)
                .title
                .split_whitespace()
                .next()
                .unwrap();
            assert!(
                text.contains(first_word),
                "slide {} should show its title",
                index + 1
            );
        }
    }

    #[test]
    fn frame_chrome_renders() {
        let mut terminal = make_terminal();
        let mut app = App::new(Deck::builtin());
        app.clock = "10:30:00 AM PST".to_string();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("1/15"));
        assert!(text.contains("‹"));
        assert!(text.contains("›"));
        assert!(text.contains("●"));
        assert!(text.contains("10:30:00 AM PST"));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn lab_overlay_shows_url() {
        let mut terminal = make_terminal();
        let mut app = App::starting_at(Deck::builtin(), 3);
        app.view.overlay = Some(Overlay::Lab { lab: 0 });
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("https://dify.andres-wong.com/chatbot/ZM9Cfgj2LLfuIi6Q"));
        assert!(text.contains("[Enter] open in browser"));
    }

    #[test]
    fn help_text_names_the_slide_labs() {
        let deck = Deck::builtin();
        assert!(!help_text(false, deck.slide(0)).contains("lab"));
        assert!(help_text(false, deck.slide(3)).contains("[o] lab"));
        assert!(help_text(false, deck.slide(6)).contains("[o/O] labs"));
        assert!(help_text(true, deck.slide(0)).contains("[Esc] close"));
    }

    #[test]
    fn chevron_gutters_hit() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test(1, 10, area, 15), Some(Action::PrevSlide));
        assert_eq!(hit_test(78, 10, area, 15), Some(Action::NextSlide));
        // Middle of the content band is not a target.
        assert_eq!(hit_test(40, 10, area, 15), None);
        // Title bar and footer rows are not targets.
        assert_eq!(hit_test(1, 0, area, 15), None);
        assert_eq!(hit_test(1, 23, area, 15), None);
    }

    #[test]
    fn indicator_dots_hit() {
        let area = Rect::new(0, 0, 80, 24);
        // 15 dots spaced two apart span 29 columns, centered at x = 25.
        assert_eq!(hit_test(25, 22, area, 15), Some(Action::GoToSlide(0)));
        assert_eq!(hit_test(27, 22, area, 15), Some(Action::GoToSlide(1)));
        assert_eq!(hit_test(53, 22, area, 15), Some(Action::GoToSlide(14)));
        // Gaps between dots and positions past the last dot miss.
        assert_eq!(hit_test(26, 22, area, 15), None);
        assert_eq!(hit_test(55, 22, area, 15), None);
        assert_eq!(hit_test(3, 22, area, 15), None);
    }

    #[test]
    fn clicks_outside_area_miss() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test(100, 10, area, 15), None);
        assert_eq!(hit_test(10, 30, area, 15), None);
    }

    #[test]
    fn heading_pairs_join_heading_with_following_text() {
        let deck = Deck::builtin();
        let pairs = heading_pairs(deck.slide(2));
        assert_eq!(pairs.len(), 3);
        assert!(pairs[0].0.contains("Lenguaje Natural"));
        assert!(pairs[0].1.is_some());
    }

    #[test]
    fn ordinal_badges_use_circled_digits() {
        assert_eq!(ordinal_badge(1), "①");
        assert_eq!(ordinal_badge(12), "⑫");
        assert_eq!(ordinal_badge(20), "⑳");
        assert_eq!(ordinal_badge(21), "21.");
    }

    #[test]
    fn every_diagram_kind_renders() {
        let kinds = [
            DiagramKind::Rag,
            DiagramKind::MultiAgent,
            DiagramKind::SalesAssistant,
            DiagramKind::LegalAnalysis,
            DiagramKind::ResearchAssistant,
        ];
        for kind in kinds {
            assert!(!diagram_lines(kind, Color::White).is_empty());
        }
    }

    #[test]
    fn rag_diagram_names_the_stages() {
        let text = diagram_lines(DiagramKind::Rag, Color::White)
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Retrieval"));
        assert!(text.contains("LLM"));
        assert!(text.contains("Respuesta Contextualizada"));
    }

    #[test]
    fn emphasis_spans_highlight_strong_runs() {
        let spans = emphasis_spans("plain **strong** tail", Color::White);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "plain ");
        assert_eq!(spans[1].content, "strong");
        assert_eq!(spans[1].style.fg, Some(Color::White));
        assert_eq!(spans[2].content, " tail");
    }
}
