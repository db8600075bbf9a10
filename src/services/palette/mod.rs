//! Built-in color palettes and keyword-based cell styling.
//!
//! A palette is an ordered keyword-to-color mapping. Cells are styled by
//! scanning the keywords in order and taking the first whose lowercase form
//! is a substring of the lowercase cell text. Substring matching (rather
//! than word matching) is long-standing behavior that saved files depend on.

use egui::Color32;

const PASTEL_CLAIR: &str = "Pastel (clair)";
const VIF_CONTRASTE: &str = "Vif (contrasté)";
const GRIS_ACCENTS: &str = "Gris + accents";

/// Names of the built-in palettes, in selector order.
pub const PALETTE_NAMES: [&str; 3] = [PASTEL_CLAIR, VIF_CONTRASTE, GRIS_ACCENTS];

/// Palette used when an unknown name is requested.
pub const DEFAULT_PALETTE: &str = PASTEL_CLAIR;

/// Ordered keyword -> color mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(String, Color32)>,
}

impl Palette {
    fn from_hex_entries(entries: &[(&str, &str)]) -> Self {
        let entries = entries
            .iter()
            .map(|(keyword, hex)| {
                let color = parse_hex_color(hex).unwrap_or(Color32::WHITE);
                (keyword.to_string(), color)
            })
            .collect();
        Self { entries }
    }

    /// The built-in palette registered under `name`, falling back to the
    /// default palette for unknown names. Never fails.
    pub fn resolve(name: &str) -> Palette {
        match name {
            VIF_CONTRASTE => Self::from_hex_entries(&[
                ("CM", "#8EC5FF"),
                ("TD", "#62B0FF"),
                ("Cours", "#8EC5FF"),
                ("BU", "#7FE3A4"),
                ("Projet", "#7FE3A4"),
                ("Musculation", "#C39BFF"),
                ("Club photo", "#FFA8C8"),
                ("Court métrage", "#FFB36A"),
                ("RU", "#FFD659"),
            ]),
            GRIS_ACCENTS => Self::from_hex_entries(&[
                ("CM", "#E6EEF8"),
                ("TD", "#D3E2F6"),
                ("Cours", "#E6EEF8"),
                ("BU", "#E6F5EC"),
                ("Projet", "#E6F5EC"),
                ("Musculation", "#EEE6F8"),
                ("Club photo", "#FCE6EE"),
                ("Court métrage", "#FBEBD8"),
                ("RU", "#FFF5CC"),
            ]),
            // PASTEL_CLAIR and anything unrecognized
            _ => Self::from_hex_entries(&[
                ("CM", "#DCEBFF"),
                ("TD", "#C7DDFF"),
                ("Cours", "#DCEBFF"),
                ("BU", "#DDF7E6"),
                ("Projet", "#DDF7E6"),
                ("Musculation", "#EADDFE"),
                ("Club photo", "#FFE0EC"),
                ("Court métrage", "#FFDDB8"),
                ("RU", "#FFF4B8"),
            ]),
        }
    }

    /// Keyword/color pairs in matching order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Color32)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Color registered for an exact keyword, if any.
    pub fn color_of(&self, keyword: &str) -> Option<Color32> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, c)| *c)
    }
}

/// Parse a hex color string to Color32
fn parse_hex_color(s: &str) -> Option<Color32> {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color32::from_rgb(r, g, b))
    } else {
        None
    }
}

/// Resolved display style for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub background: Color32,
    pub text: Color32,
    pub bold: bool,
}

const TEXT_DARK: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);

impl CellStyle {
    /// Style for an empty or whitespace-only cell.
    pub const EMPTY: CellStyle = CellStyle {
        background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
        text: TEXT_DARK,
        bold: false,
    };

    /// Style for non-empty text that matches no palette keyword.
    pub const FILLED: CellStyle = CellStyle {
        background: Color32::WHITE,
        text: TEXT_DARK,
        bold: false,
    };

    /// Decide the style for one cell's text under `palette`.
    ///
    /// Case-insensitive substring match in palette order, first match wins.
    /// A keyword contained inside a longer unrelated word still matches.
    pub fn for_text(text: &str, palette: &Palette) -> CellStyle {
        if text.trim().is_empty() {
            return Self::EMPTY;
        }
        let lower = text.to_lowercase();
        for (keyword, color) in palette.entries() {
            if lower.contains(&keyword.to_lowercase()) {
                return CellStyle {
                    background: color,
                    text: TEXT_DARK,
                    bold: true,
                };
            }
        }
        Self::FILLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn unknown_palette_resolves_to_default() {
        assert_eq!(
            Palette::resolve("Nonexistent Palette"),
            Palette::resolve(DEFAULT_PALETTE)
        );
    }

    #[test]
    fn builtin_palettes_are_distinct() {
        let pastel = Palette::resolve("Pastel (clair)");
        let vif = Palette::resolve("Vif (contrasté)");
        let gris = Palette::resolve("Gris + accents");
        assert_ne!(pastel, vif);
        assert_ne!(pastel, gris);
        assert_ne!(vif, gris);
    }

    #[test_case(""; "empty string")]
    #[test_case("   "; "spaces only")]
    #[test_case("\t \t"; "tabs and spaces")]
    fn blank_text_gets_empty_style(text: &str) {
        for name in PALETTE_NAMES {
            let palette = Palette::resolve(name);
            assert_eq!(CellStyle::for_text(text, &palette), CellStyle::EMPTY);
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let palette = Palette::resolve(DEFAULT_PALETTE);
        let style = CellStyle::for_text("Cours de sport", &palette);
        assert_eq!(style.background, palette.color_of("Cours").unwrap());
        assert!(style.bold);

        let style = CellStyle::for_text("cours de maths", &palette);
        assert_eq!(style.background, palette.color_of("Cours").unwrap());
    }

    #[test]
    fn first_matching_keyword_wins() {
        // "CM" precedes "Cours" in every built-in palette.
        let palette = Palette::resolve("Vif (contrasté)");
        let style = CellStyle::for_text("CM + cours magistral", &palette);
        assert_eq!(style.background, palette.color_of("CM").unwrap());
    }

    #[test]
    fn keyword_inside_longer_word_still_matches() {
        // Documented quirk: substring, not word-boundary.
        let palette = Palette::resolve(DEFAULT_PALETTE);
        let style = CellStyle::for_text("parcours fléché", &palette);
        assert_eq!(style.background, palette.color_of("Cours").unwrap());
        assert!(style.bold);
    }

    #[test]
    fn unmatched_text_gets_filled_style() {
        let palette = Palette::resolve(DEFAULT_PALETTE);
        assert_eq!(
            CellStyle::for_text("reunion libre", &palette),
            CellStyle::FILLED
        );
    }
}
