//! A macOS-styled dropdown menu for [iced].
//!
//! A [`MacDropdown`] looks like the pop-up buttons of macOS: a rounded
//! toggle that shows the selected label next to a double chevron. Clicking
//! it opens a menu *over* the toggle, with the selected row exactly where the
//! toggle was and a checkmark in front of it.
//!
//! The toggle and every row reserve the width of the longest label, so nothing
//! moves when the selection changes.
//!
//! ```no_run
//! use iced::Element;
//! use mac_dropdown::mac_dropdown;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Selected(usize),
//! }
//!
//! fn view(selected: &usize) -> Element<'_, Message> {
//!     mac_dropdown(["Low", "Medium", "High"], *selected, Message::Selected).into()
//! }
//! ```
//!
//! [iced]: https://iced.rs
pub mod dropdown;
pub mod label;
pub mod metrics;
pub mod placement;
pub mod state;
pub mod style;

mod error;
mod menu;

pub use dropdown::MacDropdown;
pub use error::Error;
pub use metrics::{Glyphs, Metrics};
pub use style::{Catalog, MenuStyle, Status, ToggleStyle};

/// Creates a new [`MacDropdown`].
///
/// The dropdown shows `labels[selected]` and produces `on_select(index)` when
/// the row at `index` is clicked.
pub fn mac_dropdown<'a, Message, Theme, S>(
    labels: impl IntoIterator<Item = S>,
    selected: usize,
    on_select: impl Fn(usize) -> Message + 'a,
) -> MacDropdown<'a, Message, Theme>
where
    Theme: Catalog,
    S: Into<String>,
{
    MacDropdown::new(labels, selected, on_select)
}
