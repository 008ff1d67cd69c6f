//! Embedded 5×7 bitmap font used by the text tool.

use crate::paint::model::MAX_FONT_SIZE;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance in font units (glyph plus one column of spacing).
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; the low five bits of each row are pixels, bit 4 leftmost.
pub fn glyph(ch: char) -> Option<[u8; 7]> {
    macro_rules! g {
        ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr) => {
            Some([$a, $b, $c, $d, $e, $f, $g])
        };
    }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110),
        '1' => g!(0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        '2' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111),
        '3' => g!(0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110),
        '4' => g!(0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010),
        '5' => g!(0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110),
        '6' => g!(0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110),
        '7' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000),
        '8' => g!(0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110),
        '9' => g!(0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100),

        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        ' ' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000),
        '!' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100),
        '"' => g!(0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000),
        '#' => g!(0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010),
        '%' => g!(0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011),
        '&' => g!(0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101),
        '\'' => g!(0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000),
        '(' => g!(0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010),
        ')' => g!(0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000),
        '*' => g!(0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000),
        '+' => g!(0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000),
        ',' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000),
        '-' => g!(0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000),
        '.' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100),
        '/' => g!(0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000),
        ':' => g!(0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000),
        ';' => g!(0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000),
        '<' => g!(0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010),
        '=' => g!(0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000),
        '>' => g!(0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000),
        '?' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100),
        '@' => g!(0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110),
        '_' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111),
        '|' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),

        _ => None,
    }
}

/// Integer scale factor for a requested font size in pixels.
pub fn scale_for_font_size(font_size: u32) -> i32 {
    let font_size = font_size.min(MAX_FONT_SIZE);
    ((font_size as f32 / 8.0).round() as i32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_uses_uppercase_glyphs() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn unknown_characters_have_no_glyph() {
        assert!(glyph('é').is_none());
        assert!(glyph('~').is_none());
    }

    #[test]
    fn glyph_rows_fit_five_columns() {
        for ch in (' '..='Z').chain(['_', '|']) {
            if let Some(rows) = glyph(ch) {
                assert!(rows.iter().all(|row| *row < 0b100000), "{ch:?}");
            }
        }
    }

    #[test]
    fn font_scale_tracks_size() {
        assert_eq!(scale_for_font_size(1), 1);
        assert_eq!(scale_for_font_size(16), 2);
        assert_eq!(scale_for_font_size(40), 5);
        assert_eq!(scale_for_font_size(u32::MAX), 128);
    }
}
