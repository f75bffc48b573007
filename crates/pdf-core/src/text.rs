//! Content stream text objects

use crate::document::Color;
use crate::Align;

/// One line of text as written to a content stream
pub struct TextObject<'a> {
    /// Resource name of the font on the page, e.g. `F1`
    pub font: &'a str,
    pub size: f32,
    pub color: Color,
    /// Measured width in points, used to resolve alignment
    pub width: f64,
}

/// Offset of a line of `text_width` inside a box of `container_width`
///
/// `0` for left alignment, half the slack for centred text and all of it
/// for right alignment.
pub fn calculate_x_offset(text_width: f64, container_width: f64, align: Align) -> f64 {
    let slack = container_width - text_width;
    match align {
        Align::Left => 0.0,
        Align::Center => slack / 2.0,
        Align::Right => slack,
    }
}

/// Format a number for a content stream
///
/// Rounds to two decimals and trims trailing zeros, so `12.0` becomes `12`
/// and `72.504` becomes `72.5`. Content streams stay byte-stable across runs.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let formatted = format!("{rounded:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

impl TextObject<'_> {
    /// Left edge of the text when `anchor` is its left edge, centre or right edge
    pub fn origin_x(&self, anchor: f64, align: Align) -> f64 {
        anchor + calculate_x_offset(self.width, 0.0, align)
    }

    /// `BT .. ET` block drawing `text_hex` with its baseline at `y`
    ///
    /// `text_hex` is the already encoded string operand, e.g. `<48656C6C6F>`.
    pub fn operators(&self, text_hex: &str, anchor: f64, y: f64, align: Align) -> Vec<u8> {
        let Color { r, g, b } = self.color;
        let [r, g, b] = [r, g, b].map(|c| format_number(c as f64));
        let size = format_number(self.size as f64);
        let x = format_number(self.origin_x(anchor, align));
        let y = format_number(y);

        format!(
            "BT\n{r} {g} {b} rg\n/{font} {size} Tf\n{x} {y} Td\n{text_hex} Tj\nET\n",
            font = self.font
        )
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn object(width: f64, color: Color) -> TextObject<'static> {
        TextObject {
            font: "F1",
            size: 12.0,
            color,
            width,
        }
    }

    #[test]
    fn test_offset_in_container() {
        assert_eq!(calculate_x_offset(120.0, 495.0, Align::Left), 0.0);
        assert_eq!(calculate_x_offset(120.0, 495.0, Align::Center), 187.5);
        assert_eq!(calculate_x_offset(120.0, 495.0, Align::Right), 375.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(72.504), "72.5");
        assert_eq!(format_number(0.333333), "0.33");
        assert_eq!(format_number(774.0), "774");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(-12.25), "-12.25");
    }

    #[test]
    fn test_origin_from_anchor() {
        let text = object(80.0, Color::black());
        assert_eq!(text.origin_x(300.0, Align::Left), 300.0);
        assert_eq!(text.origin_x(300.0, Align::Center), 260.0);
        assert_eq!(text.origin_x(300.0, Align::Right), 220.0);
    }

    #[test]
    fn test_operators_exact() {
        let ops = object(30.0, Color::black()).operators("<4C6561>", 50.0, 792.0, Align::Left);
        assert_eq!(
            String::from_utf8(ops).unwrap(),
            "BT\n0 0 0 rg\n/F1 12 Tf\n50 792 Td\n<4C6561> Tj\nET\n"
        );
    }

    #[test]
    fn test_operators_right_aligned_grey() {
        let text = TextObject {
            font: "F2",
            size: 10.5,
            color: Color::rgb(0.5, 0.5, 0.5),
            width: 45.25,
        };
        let ops = String::from_utf8(text.operators("<41>", 545.0, 30.125, Align::Right)).unwrap();

        assert!(ops.contains("0.5 0.5 0.5 rg\n"));
        assert!(ops.contains("/F2 10.5 Tf\n"));
        assert!(ops.contains("499.75 30.13 Td\n"));
    }
}
