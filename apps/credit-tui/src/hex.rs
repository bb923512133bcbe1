//! Polygon node widget for the role diagram.
//!
//! A node is drawn into a `NODE_WIDTH` x `NODE_HEIGHT` box. Only the outline
//! and interior cells are written, so the empty corners of a node never
//! overwrite its neighbours in the interlocking rows above and below.

use credit_engine::grid::{NODE_HEIGHT, NODE_WIDTH};
use credit_engine::{NodeState, Role, Swatch, theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

// (first column, last column) of the outline on each line.
const OUTLINE: [(u16, u16); NODE_HEIGHT as usize] = [(4, 9), (2, 11), (1, 12), (2, 11), (4, 9)];

pub fn color(swatch: Swatch) -> Color {
    Color::Rgb(swatch.r, swatch.g, swatch.b)
}

pub struct HexNode<'a> {
    pub role: &'a Role,
    pub state: NodeState,
    pub glyph: String,
}

impl HexNode<'_> {
    fn edge(line: usize, left: bool) -> char {
        match (line, left) {
            (0, true) | (3, false) => '╱',
            (0, false) | (3, true) => '╲',
            (1, true) => '╱',
            (1, false) => '╲',
            (2, true) => '▕',
            (2, false) => '▏',
            (_, true) => '╲',
            (_, false) => '╱',
        }
    }
}

impl Widget for HexNode<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = theme(self.role.category);
        let lit = self.state != NodeState::Idle;

        let outline = if lit {
            Style::default().fg(color(palette.bold_fill))
        } else {
            Style::default().fg(color(palette.stroke))
        };
        let outline = if self.state == NodeState::Active {
            outline.add_modifier(Modifier::BOLD)
        } else {
            outline
        };
        let interior = if lit {
            Style::default()
                .bg(color(palette.bold_fill))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(palette.text))
        };

        for (line, (first, last)) in OUTLINE.iter().enumerate() {
            let y = area.y + line as u16;
            put_char(buf, area.x + first, y, Self::edge(line, true), outline);
            put_char(buf, area.x + last, y, Self::edge(line, false), outline);
            let fill = match line {
                0 => '‾',
                4 => '_',
                _ => ' ',
            };
            for x in (first + 1)..*last {
                let style = if fill == ' ' { interior } else { outline.patch(interior) };
                put_char(buf, area.x + x, y, fill, style);
            }
        }

        // Idle nodes show just the glyph in the middle; lit nodes lift it and
        // print the title underneath.
        if lit {
            put_centered(buf, area, 1, &self.glyph, interior);
            let label = wrap_label(&self.role.title.to_uppercase(), &[10, 8]);
            for (i, text) in label.iter().enumerate() {
                put_centered(buf, area, 2 + i as u16, text, interior);
            }
        } else {
            put_centered(buf, area, 2, &self.glyph, interior);
        }
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        put_char(buf, x.saturating_add(i as u16), y, ch, style);
    }
}

fn put_centered(buf: &mut Buffer, area: Rect, line: u16, text: &str, style: Style) {
    let width = text.chars().count() as u16;
    let x = area.x + NODE_WIDTH.saturating_sub(width) / 2;
    put_str(buf, x, area.y + line, text, style);
}

/// Greedy word wrap into lines of the given widths. Overflow is cut with `…`.
pub fn wrap_label(text: &str, widths: &[usize]) -> Vec<String> {
    let mut words = text
        .split_whitespace()
        .filter(|w| *w != "-")
        .peekable();
    let mut lines = Vec::with_capacity(widths.len());

    for (i, width) in widths.iter().copied().enumerate() {
        let mut line = String::new();
        while let Some(word) = words.peek() {
            let len = word.chars().count();
            let used = line.chars().count();
            if line.is_empty() && len > width {
                line = ellipsize(word, width);
                words.next();
                break;
            }
            let needed = if line.is_empty() { len } else { used + 1 + len };
            if needed > width {
                break;
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            words.next();
        }
        if i + 1 == widths.len() && words.peek().is_some() && !line.ends_with('…') {
            line = mark_overflow(&line, width);
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

fn mark_overflow(line: &str, width: usize) -> String {
    if line.chars().count() < width {
        return format!("{line}…");
    }
    let keep: String = line.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", keep.trim_end())
}

fn ellipsize(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
