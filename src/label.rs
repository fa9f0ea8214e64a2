//! Label selection for the toggle and the menu rows.

/// Returns the label with the most characters.
///
/// The first one wins a tie. An empty list yields an empty label.
///
/// Every label of the widget is laid over a transparent copy of this one, so
/// the toggle and the rows keep the same width whatever the selection is.
///
/// Characters are counted, not measured. The transparent copy sizes the
/// layer stack, so a label with fewer but wider glyphs than this one (`"WWW"`
/// against `"iiii"`) is clipped to the width of this one.
pub fn longest_label<S: AsRef<str>>(labels: &[S]) -> &str {
    labels
        .iter()
        .map(AsRef::as_ref)
        .fold(("", 0), |(longest, length), label| {
            let count = label.chars().count();

            if count > length {
                (label, count)
            } else {
                (longest, length)
            }
        })
        .0
}

/// Returns the label at `index`, or an empty label if there is none.
pub fn selected_label<S: AsRef<str>>(labels: &[S], index: usize) -> &str {
    labels.get(index).map(AsRef::as_ref).unwrap_or_default()
}

/// The glyph at the start of a menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingGlyph {
    /// The row is the selected one.
    Checkmark,
    /// Room of the same width as the checkmark.
    Blank,
}

/// Returns the [`LeadingGlyph`] of the row at `index`.
pub fn leading_glyph(index: usize, selected: usize) -> LeadingGlyph {
    if index == selected {
        LeadingGlyph::Checkmark
    } else {
        LeadingGlyph::Blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [&str; 3] = ["Low", "Medium", "High"];

    #[test]
    fn longest_label_counts_characters() {
        assert_eq!(longest_label(&LEVELS), "Medium");
        // 5 characters in 7 bytes
        assert_eq!(longest_label(&["Größe", "Widths"]), "Widths");
        assert_eq!(longest_label(&["ÄÄÄ", "abcd"]), "abcd");
    }

    #[test]
    fn longest_label_ignores_glyph_widths() {
        assert_eq!(longest_label(&["WWW", "iiii"]), "iiii");
    }

    #[test]
    fn longest_label_keeps_the_first_tie() {
        assert_eq!(longest_label(&["One", "Two", "Six"]), "One");
    }

    #[test]
    fn longest_label_of_nothing_is_empty() {
        assert_eq!(longest_label::<&str>(&[]), "");
    }

    #[test]
    fn reserved_label_does_not_follow_the_selection() {
        let labels = vec![String::from("A"), String::from("Much longer"), String::from("Mid")];

        for selected in 0..labels.len() {
            assert_eq!(longest_label(&labels), "Much longer");
            assert_eq!(selected_label(&labels, selected), labels[selected]);
        }
    }

    #[test]
    fn out_of_bounds_selection_shows_nothing() {
        assert_eq!(selected_label(&LEVELS, 1), "Medium");
        assert_eq!(selected_label(&LEVELS, 3), "");
        assert_eq!(selected_label::<&str>(&[], 0), "");
    }

    #[test]
    fn only_the_selected_row_is_checked() {
        for selected in 0..LEVELS.len() {
            let checked: Vec<usize> = (0..LEVELS.len())
                .filter(|&index| leading_glyph(index, selected) == LeadingGlyph::Checkmark)
                .collect();

            assert_eq!(checked, vec![selected]);
        }
    }

    #[test]
    fn medium_scenario_marks_row_one() {
        let glyphs: Vec<LeadingGlyph> = (0..LEVELS.len()).map(|index| leading_glyph(index, 1)).collect();

        assert_eq!(
            glyphs,
            [LeadingGlyph::Blank, LeadingGlyph::Checkmark, LeadingGlyph::Blank]
        );
    }
}
