use serde::Serialize;

/// Logical glyph names. Roles carry one of these instead of a renderer, so the
/// catalog stays plain data and any glyph source can implement [`IconSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Glyph {
    Lightbulb,
    DollarSign,
    FolderTree,
    Eye,
    Database,
    Calculator,
    Microscope,
    GitCompareArrows,
    CheckCircle,
    Box,
    Code,
    BarChart,
    Pencil,
    MessageSquareText,
    // Panel chrome
    Info,
    Hexagon,
    Close,
    ChevronRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSize {
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Thin,
    Bold,
}

pub trait IconSet: Send + Sync {
    fn render(&self, glyph: Glyph, size: GlyphSize, stroke: Stroke) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeIcons;

impl UnicodeIcons {
    fn symbol(glyph: Glyph) -> &'static str {
        match glyph {
            Glyph::Lightbulb => "☼",
            Glyph::DollarSign => "$",
            Glyph::FolderTree => "⊟",
            Glyph::Eye => "◉",
            Glyph::Database => "☰",
            Glyph::Calculator => "∑",
            Glyph::Microscope => "⌕",
            Glyph::GitCompareArrows => "⇄",
            Glyph::CheckCircle => "✓",
            Glyph::Box => "▣",
            Glyph::Code => "λ",
            Glyph::BarChart => "▟",
            Glyph::Pencil => "✎",
            Glyph::MessageSquareText => "❝",
            Glyph::Info => "ℹ",
            Glyph::Hexagon => "⬡",
            Glyph::Close => "✕",
            Glyph::ChevronRight => "›",
        }
    }
}

impl IconSet for UnicodeIcons {
    fn render(&self, glyph: Glyph, size: GlyphSize, stroke: Stroke) -> String {
        let symbol = Self::symbol(glyph);
        match (size, stroke) {
            (GlyphSize::Small, _) => symbol.to_string(),
            (GlyphSize::Large, Stroke::Thin) => format!("( {} )", symbol),
            (GlyphSize::Large, Stroke::Bold) => format!("[ {} ]", symbol),
        }
    }
}

/// Plain ASCII glyphs for terminals without good Unicode fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiIcons;

impl AsciiIcons {
    fn symbol(glyph: Glyph) -> &'static str {
        match glyph {
            Glyph::Lightbulb => "*",
            Glyph::DollarSign => "$",
            Glyph::FolderTree => "#",
            Glyph::Eye => "o",
            Glyph::Database => "=",
            Glyph::Calculator => "+",
            Glyph::Microscope => "?",
            Glyph::GitCompareArrows => "<>",
            Glyph::CheckCircle => "v",
            Glyph::Box => "[]",
            Glyph::Code => "{}",
            Glyph::BarChart => "ll",
            Glyph::Pencil => "/",
            Glyph::MessageSquareText => "\"",
            Glyph::Info => "i",
            Glyph::Hexagon => "O",
            Glyph::Close => "x",
            Glyph::ChevronRight => ">",
        }
    }
}

impl IconSet for AsciiIcons {
    fn render(&self, glyph: Glyph, size: GlyphSize, stroke: Stroke) -> String {
        let symbol = match stroke {
            Stroke::Thin => Self::symbol(glyph).to_string(),
            Stroke::Bold => Self::symbol(glyph).to_ascii_uppercase(),
        };
        match size {
            GlyphSize::Small => symbol,
            GlyphSize::Large => format!("< {} >", symbol),
        }
    }
}
