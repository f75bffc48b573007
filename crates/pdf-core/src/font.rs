//! Standard Type1 fonts and their metrics
//!
//! Only the Helvetica and Courier families of the PDF standard 14 are
//! supported. They need no embedding: every conforming reader ships them, and
//! the advance widths below are the published AFM metrics, so the width used
//! for line breaking is the width the reader will draw.

use crate::encoding::{to_win_ansi, FALLBACK_CHAR};
use lopdf::{Dictionary, Object};
use unicode_normalization::UnicodeNormalization;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Standard font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

impl FontFamily {
    /// Get the standard font for the specified weight and style
    pub fn variant(self, weight: FontWeight, style: FontStyle) -> StandardFont {
        use StandardFont::*;
        match (self, weight, style) {
            (FontFamily::Helvetica, FontWeight::Regular, FontStyle::Normal) => Helvetica,
            (FontFamily::Helvetica, FontWeight::Bold, FontStyle::Normal) => HelveticaBold,
            (FontFamily::Helvetica, FontWeight::Regular, FontStyle::Italic) => HelveticaOblique,
            (FontFamily::Helvetica, FontWeight::Bold, FontStyle::Italic) => HelveticaBoldOblique,
            (FontFamily::Courier, FontWeight::Regular, FontStyle::Normal) => Courier,
            (FontFamily::Courier, FontWeight::Bold, FontStyle::Normal) => CourierBold,
            (FontFamily::Courier, FontWeight::Regular, FontStyle::Italic) => CourierOblique,
            (FontFamily::Courier, FontWeight::Bold, FontStyle::Italic) => CourierBoldOblique,
        }
    }
}

/// One of the supported standard-14 fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

const ALL_FONTS: [StandardFont; 8] = [
    StandardFont::Helvetica,
    StandardFont::HelveticaBold,
    StandardFont::HelveticaOblique,
    StandardFont::HelveticaBoldOblique,
    StandardFont::Courier,
    StandardFont::CourierBold,
    StandardFont::CourierOblique,
    StandardFont::CourierBoldOblique,
];

/// Courier is monospaced
const COURIER_ADVANCE: u16 = 600;

/// Helvetica advance widths for WinAnsi codes 0x20..=0xFF
///
/// Codes that WinAnsi leaves undefined carry the bullet width.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 224] = [
    // 0x20
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 0x40
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 0x50
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 0x60
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 0x70
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
    // 0x80
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    // 0x90
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    // 0xA0
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // 0xB0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 0xC0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // 0xD0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 0xE0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    // 0xF0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Helvetica-Bold advance widths for WinAnsi codes 0x20..=0xFF
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    // 0x20
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    // 0x40
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    // 0x50
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    // 0x60
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    // 0x70
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 350,
    // 0x80
    556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    // 0x90
    350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
    // 0xA0
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // 0xB0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 0xC0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // 0xD0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 0xE0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    // 0xF0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

impl StandardFont {
    /// Look up a font by its PostScript name (case-insensitive)
    ///
    /// # Example
    /// ```
    /// use pdf_core::StandardFont;
    ///
    /// assert_eq!(StandardFont::from_name("helvetica-bold"), Some(StandardFont::HelveticaBold));
    /// assert_eq!(StandardFont::from_name("Comic Sans"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_FONTS
            .into_iter()
            .find(|font| font.base_font().eq_ignore_ascii_case(name))
    }

    /// PostScript name used as `/BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    pub fn family(&self) -> FontFamily {
        match self {
            StandardFont::Helvetica
            | StandardFont::HelveticaBold
            | StandardFont::HelveticaOblique
            | StandardFont::HelveticaBoldOblique => FontFamily::Helvetica,
            _ => FontFamily::Courier,
        }
    }

    pub fn weight(&self) -> FontWeight {
        match self {
            StandardFont::HelveticaBold
            | StandardFont::HelveticaBoldOblique
            | StandardFont::CourierBold
            | StandardFont::CourierBoldOblique => FontWeight::Bold,
            _ => FontWeight::Regular,
        }
    }

    pub fn style(&self) -> FontStyle {
        match self {
            StandardFont::HelveticaOblique
            | StandardFont::HelveticaBoldOblique
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => FontStyle::Italic,
            _ => FontStyle::Normal,
        }
    }

    /// Get glyph advance width in 1/1000 em
    ///
    /// Characters outside WinAnsi are measured as [`FALLBACK_CHAR`], which is
    /// what the encoder will draw in their place.
    pub fn glyph_advance(&self, c: char) -> u16 {
        let table = match self.family() {
            FontFamily::Courier => return COURIER_ADVANCE,
            FontFamily::Helvetica => match self.weight() {
                // Oblique variants share the upright metrics
                FontWeight::Regular => &HELVETICA_WIDTHS,
                FontWeight::Bold => &HELVETICA_BOLD_WIDTHS,
            },
        };

        let code = to_win_ansi(c).unwrap_or(FALLBACK_CHAR as u8);
        table[(code - 0x20) as usize]
    }

    /// Calculate text width in font units (1/1000 em)
    pub fn text_width(&self, text: &str) -> u32 {
        text.nfc().map(|c| self.glyph_advance(c) as u32).sum()
    }

    /// Calculate text width in points for a given font size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f64 {
        self.text_width(text) as f64 * font_size as f64 / 1000.0
    }

    /// Encode text as hex string for PDF Tj operator
    pub fn encode_text_hex(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 2 + 2);
        result.push('<');
        for byte in crate::encoding::win_ansi_bytes(text) {
            result.push_str(&format!("{byte:02X}"));
        }
        result.push('>');
        result
    }

    /// Generate the font dictionary referenced from page resources
    pub fn to_pdf_object(&self) -> Dictionary {
        Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(self.base_font().as_bytes().to_vec())),
            ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(
            StandardFont::from_name("Helvetica"),
            Some(StandardFont::Helvetica)
        );
        assert_eq!(
            StandardFont::from_name("COURIER-BOLDOBLIQUE"),
            Some(StandardFont::CourierBoldOblique)
        );
        assert_eq!(StandardFont::from_name("Times-Roman"), None);
        assert_eq!(StandardFont::from_name(""), None);
    }

    #[test]
    fn test_base_font_roundtrip() {
        for font in ALL_FONTS {
            assert_eq!(StandardFont::from_name(font.base_font()), Some(font));
        }
    }

    #[test]
    fn test_family_variants() {
        assert_eq!(
            FontFamily::Helvetica.variant(FontWeight::Bold, FontStyle::Normal),
            StandardFont::HelveticaBold
        );
        assert_eq!(
            FontFamily::Courier.variant(FontWeight::Regular, FontStyle::Italic),
            StandardFont::CourierOblique
        );
        for font in ALL_FONTS {
            assert_eq!(font.family().variant(font.weight(), font.style()), font);
        }
    }

    #[test]
    fn test_helvetica_widths() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.glyph_advance(' '), 278);
        assert_eq!(font.glyph_advance('W'), 944);
        assert_eq!(font.glyph_advance('i'), 222);
        assert_eq!(font.glyph_advance('é'), 556);
        assert_eq!(font.glyph_advance('—'), 1000);
        // H + e + l + l + o
        assert_eq!(font.text_width("Hello"), 722 + 556 + 222 + 222 + 556);
    }

    #[test]
    fn test_helvetica_bold_widths() {
        let font = StandardFont::HelveticaBold;
        assert_eq!(font.text_width("Hello"), 722 + 556 + 278 + 278 + 611);
        assert_eq!(font.glyph_advance('@'), 975);
    }

    #[test]
    fn test_oblique_shares_upright_metrics() {
        assert_eq!(
            StandardFont::HelveticaOblique.text_width("Il était une fois"),
            StandardFont::Helvetica.text_width("Il était une fois")
        );
    }

    #[test]
    fn test_courier_is_monospaced() {
        assert_eq!(StandardFont::Courier.text_width("Hello"), 3000);
        assert_eq!(StandardFont::CourierBold.text_width("iiiii"), 3000);
    }

    #[test]
    fn test_unencodable_measured_as_fallback() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.glyph_advance('🐉'), font.glyph_advance('?'));
    }

    #[test]
    fn test_text_width_points() {
        let font = StandardFont::Courier;
        assert_eq!(font.text_width_points("abcde", 10.0), 30.0);
        assert_eq!(font.text_width_points("", 12.0), 0.0);

        let width = StandardFont::Helvetica.text_width_points("Hello", 12.0);
        assert!((width - 27.336).abs() < 1e-9);
    }

    #[test]
    fn test_decomposed_accent_measures_like_composed() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.text_width("e\u{0301}"), font.text_width("é"));
    }

    #[test]
    fn test_encode_text_hex() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.encode_text_hex(""), "<>");
        assert_eq!(font.encode_text_hex("AB"), "<4142>");
        assert_eq!(font.encode_text_hex("été"), "<E974E9>");
        assert_eq!(font.encode_text_hex("a🐉"), "<613F>");
    }

    #[test]
    fn test_to_pdf_object() {
        let dict = StandardFont::HelveticaBold.to_pdf_object();
        assert_eq!(
            dict.get(b"BaseFont").unwrap(),
            &Object::Name(b"Helvetica-Bold".to_vec())
        );
        assert_eq!(
            dict.get(b"Encoding").unwrap(),
            &Object::Name(b"WinAnsiEncoding".to_vec())
        );
        assert_eq!(dict.get(b"Subtype").unwrap(), &Object::Name(b"Type1".to_vec()));
    }
}
