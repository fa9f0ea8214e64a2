//! Sizes and glyphs of a [`MacDropdown`](crate::MacDropdown).

/// The size constants of a [`MacDropdown`](crate::MacDropdown), in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Metrics {
    /// The size of the labels.
    pub font_size: f32,
    /// The extra vertical room above and below a label.
    pub font_padding: f32,
    /// The vertical padding of a row and the gap after its checkmark.
    pub item_padding: f32,
    /// The size of the checkmark glyph.
    pub glyph_size: f32,
    /// The padding inside the toggle surface.
    pub toggle_padding: f32,
    /// The horizontal padding around the toggle label.
    pub label_padding: f32,
    /// The side of the disclosure indicator square.
    pub indicator_size: f32,
    /// The corner radius of the disclosure indicator.
    pub indicator_radius: f32,
    /// The size of the chevron glyphs.
    pub chevron_size: f32,
    /// How far each chevron sits from the center of the indicator.
    pub chevron_offset: f32,
    /// The horizontal inset of the hover highlight from the menu edges.
    pub highlight_inset: f32,
    /// The corner radius of the hover highlight.
    pub highlight_radius: f32,
    /// The horizontal padding between the highlight and the row content.
    pub row_padding: f32,
    /// The vertical padding of the menu surface around its rows.
    pub menu_padding: f32,
}

impl Metrics {
    /// The metrics of the native control at the system font size.
    pub const DEFAULT: Self = Self {
        font_size: 13.0,
        font_padding: 1.5,
        item_padding: 3.0,
        glyph_size: 10.0,
        toggle_padding: 3.0,
        label_padding: 6.0,
        indicator_size: 16.0,
        indicator_radius: 4.0,
        chevron_size: 7.5,
        chevron_offset: 3.0,
        highlight_inset: 6.0,
        highlight_radius: 4.0,
        row_padding: 2.0,
        menu_padding: 4.0,
    };

    /// Returns these [`Metrics`] with another font size.
    ///
    /// The checkmark keeps its size relative to the labels.
    #[must_use]
    pub fn with_font_size(self, font_size: f32) -> Self {
        Self {
            font_size,
            glyph_size: (font_size - 3.0).max(1.0),
            ..self
        }
    }

    /// The height of a single menu row.
    pub fn row_height(&self) -> f32 {
        self.font_size + 2.0 * self.item_padding + 2.0 * self.font_padding
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The code points drawn by a [`MacDropdown`](crate::MacDropdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Glyphs {
    /// Marks the selected row.
    pub checkmark: char,
    /// The upper half of the disclosure indicator.
    pub chevron_up: char,
    /// The lower half of the disclosure indicator.
    pub chevron_down: char,
}

impl Glyphs {
    /// Glyphs available in most fonts.
    pub const UNICODE: Self = Self {
        checkmark: '\u{2713}',
        chevron_up: '\u{2303}',
        chevron_down: '\u{2304}',
    };

    /// The SF Symbols glyphs of the native control.
    ///
    /// These live in a private use area, so the glyph font must carry them.
    pub const SF_SYMBOLS: Self = Self {
        checkmark: '\u{100185}',
        chevron_up: '\u{100187}',
        chevron_down: '\u{100188}',
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_height_adds_paddings_to_font_size() {
        assert_eq!(Metrics::default().row_height(), 22.0);
    }

    #[test]
    fn font_size_override_moves_glyph_size() {
        let metrics = Metrics::default().with_font_size(17.0);

        assert_eq!(metrics.font_size, 17.0);
        assert_eq!(metrics.glyph_size, 14.0);
        assert_eq!(metrics.row_height(), 26.0);
        assert_eq!(metrics.item_padding, Metrics::DEFAULT.item_padding);
    }

    #[test]
    fn tiny_font_keeps_a_visible_glyph() {
        assert_eq!(Metrics::default().with_font_size(2.0).glyph_size, 1.0);
    }

    #[test]
    fn sf_symbols_live_in_the_private_use_area() {
        let glyphs = Glyphs::SF_SYMBOLS;

        for glyph in [glyphs.checkmark, glyphs.chevron_up, glyphs.chevron_down] {
            assert!(('\u{100000}'..='\u{10FFFD}').contains(&glyph));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_metrics_fill_in_defaults() {
        let metrics: Metrics = serde_json::from_str(r#"{ "font_size": 15.0 }"#).unwrap();

        assert_eq!(metrics.font_size, 15.0);
        assert_eq!(metrics.menu_padding, Metrics::DEFAULT.menu_padding);
    }
}
