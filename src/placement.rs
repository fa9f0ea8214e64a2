//! Placement of the menu relative to the toggle.
//!
//! The menu opens below the toggle, then moves up by one row per row up to
//! and including the selected one. The selected row ends up over the toggle,
//! where the pointer already is.
use iced::{Point, Rectangle, Size, Vector};

/// The offset of the menu from its [`anchor`].
pub fn menu_offset(selected: usize, row_height: f32) -> Vector {
    Vector::new(0.0, -(row_height * (selected as f32 + 1.0)))
}

/// The point the menu would open at without an offset: the bottom-left
/// corner of the toggle.
pub fn anchor(toggle: Rectangle) -> Point {
    Point::new(toggle.x, toggle.y + toggle.height)
}

/// The top-left corner of the first row of the menu.
pub fn menu_position(toggle: Rectangle, selected: usize, row_height: f32) -> Point {
    anchor(toggle) + menu_offset(selected, row_height)
}

/// Moves the rows at `position` so the menu surface stays in the viewport.
///
/// The surface extends `padding` above and below the rows. A menu taller
/// than the viewport is pinned to its top edge.
pub fn clamp_to_viewport(position: Point, rows: Size, padding: f32, viewport: Size) -> Point {
    let y = if rows.height + 2.0 * padding >= viewport.height {
        padding
    } else {
        position.y.clamp(padding, viewport.height - rows.height - padding)
    };

    let x = if rows.width >= viewport.width {
        0.0
    } else {
        position.x.clamp(0.0, viewport.width - rows.width)
    };

    Point::new(x, y)
}

/// The bounds of the menu surface around its rows.
pub fn surface_bounds(rows: Rectangle, padding: f32) -> Rectangle {
    Rectangle {
        y: rows.y - padding,
        height: rows.height + 2.0 * padding,
        ..rows
    }
}

/// The bounds of the row at `index`.
pub fn row_bounds(rows: Rectangle, index: usize, row_height: f32) -> Rectangle {
    Rectangle {
        y: rows.y + index as f32 * row_height,
        height: row_height,
        ..rows
    }
}

/// The bounds of the hover highlight of a row.
pub fn highlight_bounds(row: Rectangle, inset: f32) -> Rectangle {
    Rectangle {
        x: row.x + inset,
        width: (row.width - 2.0 * inset).max(0.0),
        ..row
    }
}

/// Returns the index of the row under `point`, if any.
pub fn row_at(rows: Rectangle, point: Point, row_height: f32, len: usize) -> Option<usize> {
    if row_height <= 0.0 || !rows.contains(point) {
        return None;
    }

    let index = ((point.y - rows.y) / row_height).floor() as usize;

    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: f32 = 22.0;

    fn toggle() -> Rectangle {
        Rectangle {
            x: 40.0,
            y: 200.0,
            width: 90.0,
            height: 22.0,
        }
    }

    #[test]
    fn offset_moves_up_one_row_per_index() {
        assert_eq!(menu_offset(0, ROW), Vector::new(0.0, -22.0));
        assert_eq!(menu_offset(1, ROW), Vector::new(0.0, -44.0));
        assert_eq!(menu_offset(4, 10.0), Vector::new(0.0, -50.0));
    }

    #[test]
    fn anchor_is_below_the_toggle() {
        assert_eq!(anchor(toggle()), Point::new(40.0, 222.0));
    }

    #[test]
    fn selected_row_lies_over_the_toggle() {
        let toggle = toggle();

        for selected in 0..5 {
            let position = menu_position(toggle, selected, ROW);
            let rows = Rectangle::new(position, Size::new(toggle.width, ROW * 5.0));
            let row = row_bounds(rows, selected, ROW);

            assert_eq!(row.y, toggle.y + toggle.height - ROW);
            assert_eq!(row.x, toggle.x);
        }
    }

    #[test]
    fn medium_scenario_places_row_one_on_the_toggle() {
        let position = menu_position(toggle(), 1, ROW);

        assert_eq!(position, Point::new(40.0, 178.0));
        assert_eq!(position.y + ROW, toggle().y);
    }

    #[test]
    fn clamping_keeps_fitting_menus_untouched() {
        let viewport = Size::new(800.0, 600.0);
        let position = Point::new(40.0, 178.0);

        assert_eq!(
            clamp_to_viewport(position, Size::new(90.0, 66.0), 4.0, viewport),
            position
        );
    }

    #[test]
    fn clamping_pushes_menus_into_the_viewport() {
        let viewport = Size::new(800.0, 600.0);
        let rows = Size::new(120.0, 110.0);

        assert_eq!(
            clamp_to_viewport(Point::new(10.0, -60.0), rows, 4.0, viewport),
            Point::new(10.0, 4.0)
        );
        assert_eq!(
            clamp_to_viewport(Point::new(750.0, 560.0), rows, 4.0, viewport),
            Point::new(680.0, 486.0)
        );
    }

    #[test]
    fn oversized_menus_are_pinned_to_the_top() {
        let viewport = Size::new(300.0, 100.0);

        assert_eq!(
            clamp_to_viewport(Point::new(20.0, 50.0), Size::new(400.0, 220.0), 4.0, viewport),
            Point::new(0.0, 4.0)
        );
    }

    #[test]
    fn surface_wraps_the_rows_vertically() {
        let rows = Rectangle::new(Point::new(10.0, 20.0), Size::new(100.0, 66.0));

        assert_eq!(
            surface_bounds(rows, 4.0),
            Rectangle::new(Point::new(10.0, 16.0), Size::new(100.0, 74.0))
        );
    }

    #[test]
    fn highlight_is_inset_horizontally() {
        let row = Rectangle::new(Point::new(10.0, 20.0), Size::new(100.0, ROW));

        assert_eq!(
            highlight_bounds(row, 6.0),
            Rectangle::new(Point::new(16.0, 20.0), Size::new(88.0, ROW))
        );
        assert_eq!(highlight_bounds(row, 80.0).width, 0.0);
    }

    #[test]
    fn hit_testing_finds_the_row_under_the_pointer() {
        let rows = Rectangle::new(Point::new(0.0, 100.0), Size::new(100.0, ROW * 3.0));

        assert_eq!(row_at(rows, Point::new(50.0, 100.0), ROW, 3), Some(0));
        assert_eq!(row_at(rows, Point::new(50.0, 121.0), ROW, 3), Some(0));
        assert_eq!(row_at(rows, Point::new(50.0, 122.0), ROW, 3), Some(1));
        assert_eq!(row_at(rows, Point::new(50.0, 165.0), ROW, 3), Some(2));
        assert_eq!(row_at(rows, Point::new(50.0, 166.0), ROW, 3), None);
        assert_eq!(row_at(rows, Point::new(50.0, 99.0), ROW, 3), None);
        assert_eq!(row_at(rows, Point::new(101.0, 110.0), ROW, 3), None);
    }
}
