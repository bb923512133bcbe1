//! Category colour themes.
//!
//! Each category maps to a pastel tint for idle nodes, a bold fill for
//! hovered/active nodes and a handful of text/accent tokens used by the
//! detail views.

use crate::catalog::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub fill_tint: Swatch,
    pub stroke: Swatch,
    pub text: Swatch,
    pub accent: Swatch,
    pub bold_fill: Swatch,
}

const INDIGO_50: Swatch = Swatch::rgb(0xEE, 0xF2, 0xFF);
const INDIGO_300: Swatch = Swatch::rgb(0xA5, 0xB4, 0xFC);
const INDIGO_400: Swatch = Swatch::rgb(0x81, 0x8C, 0xF8);
const INDIGO_500: Swatch = Swatch::rgb(0x63, 0x66, 0xF1);

const TEAL_50: Swatch = Swatch::rgb(0xF0, 0xFD, 0xFA);
const TEAL_300: Swatch = Swatch::rgb(0x5E, 0xEA, 0xD4);
const TEAL_400: Swatch = Swatch::rgb(0x2D, 0xD4, 0xBF);
const TEAL_500: Swatch = Swatch::rgb(0x14, 0xB8, 0xA6);

const SLATE_100: Swatch = Swatch::rgb(0xF1, 0xF5, 0xF9);
const SLATE_300: Swatch = Swatch::rgb(0xCB, 0xD5, 0xE1);
const SLATE_400: Swatch = Swatch::rgb(0x94, 0xA3, 0xB8);
const SLATE_500: Swatch = Swatch::rgb(0x64, 0x74, 0x8B);

const ORANGE_50: Swatch = Swatch::rgb(0xFF, 0xF7, 0xED);
const ORANGE_300: Swatch = Swatch::rgb(0xFD, 0xBA, 0x74);
const ORANGE_400: Swatch = Swatch::rgb(0xFB, 0x92, 0x3C);
const ORANGE_500: Swatch = Swatch::rgb(0xF9, 0x73, 0x16);

const GRAY_50: Swatch = Swatch::rgb(0xF9, 0xFA, 0xFB);
const GRAY_300: Swatch = Swatch::rgb(0xD1, 0xD5, 0xDB);
const GRAY_400: Swatch = Swatch::rgb(0x9C, 0xA3, 0xAF);
const GRAY_500: Swatch = Swatch::rgb(0x6B, 0x72, 0x80);

/// Neutral theme used when a label does not name a known category.
pub const NEUTRAL: Theme = Theme {
    fill_tint: GRAY_50,
    stroke: GRAY_300,
    text: GRAY_500,
    accent: GRAY_500,
    bold_fill: GRAY_400,
};

pub fn theme(category: Category) -> Theme {
    match category {
        Category::Strategy => Theme {
            fill_tint: INDIGO_50,
            stroke: INDIGO_300,
            text: INDIGO_500,
            accent: INDIGO_500,
            bold_fill: INDIGO_400,
        },
        Category::Research => Theme {
            fill_tint: TEAL_50,
            stroke: TEAL_300,
            text: TEAL_500,
            accent: TEAL_500,
            bold_fill: TEAL_400,
        },
        Category::Infrastructure => Theme {
            fill_tint: SLATE_100,
            stroke: SLATE_300,
            text: SLATE_500,
            accent: SLATE_500,
            bold_fill: SLATE_400,
        },
        Category::Dissemination => Theme {
            fill_tint: ORANGE_50,
            stroke: ORANGE_300,
            text: ORANGE_500,
            accent: ORANGE_500,
            bold_fill: ORANGE_400,
        },
    }
}

pub fn theme_for_label(label: &str) -> Theme {
    Category::parse(label).map(theme).unwrap_or(NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_distinct_theme() {
        let themes: Vec<Theme> = Category::ALL.iter().map(|c| theme(*c)).collect();
        for (i, a) in themes.iter().enumerate() {
            assert_ne!(*a, NEUTRAL);
            for b in &themes[i + 1..] {
                assert_ne!(a.bold_fill, b.bold_fill);
            }
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_neutral() {
        assert_eq!(theme_for_label("Outreach"), NEUTRAL);
        assert_eq!(theme_for_label(""), NEUTRAL);
        assert_eq!(theme_for_label("Infrastructure"), theme(Category::Infrastructure));
    }

    #[test]
    fn test_hex_tokens() {
        assert_eq!(theme(Category::Strategy).bold_fill.hex(), "#818CF8");
        assert_eq!(theme(Category::Dissemination).stroke.hex(), "#FDBA74");
    }
}
