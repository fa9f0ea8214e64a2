//! Dropdowns let users pick one item from a menu of labels.
//!
//! The closed dropdown is a toggle showing the selected label next to a
//! disclosure indicator. Pressing it opens a menu over the toggle, with the
//! selected row where the toggle was.
//!
//! # Example
//! ```no_run
//! use iced::Element;
//! use mac_dropdown::mac_dropdown;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     LevelSelected(usize),
//! }
//!
//! struct State {
//!     level: usize,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     mac_dropdown(["Low", "Medium", "High"], state.level, Message::LevelSelected).into()
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::LevelSelected(level) => state.level = level,
//!     }
//! }
//! ```
use crate::Error;
use crate::label::{self, LeadingGlyph};
use crate::menu::Menu;
use crate::metrics::{Glyphs, Metrics};
use crate::placement;
use crate::state::State;
use crate::style::{Catalog, MenuStyle, MenuStyleFn, Status, ToggleStyle, ToggleStyleFn};

use iced::advanced::layout;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::text;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::alignment;
use iced::font::{self, Font};
use iced::mouse;
use iced::touch;
use iced::widget::text::{Catalog as TextCatalog, StyleFn as TextStyleFn};
use iced::widget::{Row, Stack, Text};
use iced::window;
use iced::{Color, Element, Event, Length, Point, Rectangle, Size, Vector, border};

const LABEL: usize = 0;
const CHEVRON_UP: usize = 1;
const CHEVRON_DOWN: usize = 2;
const FIRST_ROW: usize = 3;

/// A macOS-styled dropdown menu.
///
/// The selection belongs to the caller: the dropdown only reports the index
/// of the row that was clicked through `on_select`.
pub struct MacDropdown<'a, Message, Theme = iced::Theme>
where
    Theme: Catalog,
{
    labels: Vec<String>,
    selected: usize,
    on_select: Box<dyn Fn(usize) -> Message + 'a>,
    on_open: Option<Message>,
    on_close: Option<Message>,
    metrics: Metrics,
    glyphs: Glyphs,
    font: Option<Font>,
    glyph_font: Option<Font>,
    class: <Theme as Catalog>::Class<'a>,
    menu_class: <Theme as Catalog>::MenuClass<'a>,
}

impl<'a, Message, Theme> MacDropdown<'a, Message, Theme>
where
    Theme: Catalog,
{
    /// Creates a new [`MacDropdown`] with the given labels, the index of the
    /// selected one, and the message to produce when a row is clicked.
    ///
    /// The index is not checked. An index without a label shows an empty
    /// toggle and a menu without a checkmark.
    pub fn new<S>(
        labels: impl IntoIterator<Item = S>,
        selected: usize,
        on_select: impl Fn(usize) -> Message + 'a,
    ) -> Self
    where
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if selected >= labels.len() {
            log::debug!(
                "dropdown selection {selected} is out of bounds for {} items",
                labels.len()
            );
        }

        Self {
            labels,
            selected,
            on_select: Box::new(on_select),
            on_open: None,
            on_close: None,
            metrics: Metrics::default(),
            glyphs: Glyphs::default(),
            font: None,
            glyph_font: None,
            class: <Theme as Catalog>::default(),
            menu_class: <Theme as Catalog>::default_menu(),
        }
    }

    /// Creates a new [`MacDropdown`] like [`new`](Self::new), rejecting an
    /// empty list of labels or a selection without a label.
    pub fn try_new<S>(
        labels: impl IntoIterator<Item = S>,
        selected: usize,
        on_select: impl Fn(usize) -> Message + 'a,
    ) -> Result<Self, Error>
    where
        S: Into<String>,
    {
        let dropdown = Self::new(labels, selected, on_select);
        let len = dropdown.labels.len();

        if len == 0 {
            return Err(Error::Empty);
        }

        if selected >= len {
            return Err(Error::OutOfBounds {
                index: selected,
                len,
            });
        }

        Ok(dropdown)
    }

    /// Sets the message that will be produced when the menu is opened.
    pub fn on_open(mut self, on_open: Message) -> Self {
        self.on_open = Some(on_open);
        self
    }

    /// Sets the message that will be produced when the menu is closed.
    pub fn on_close(mut self, on_close: Message) -> Self {
        self.on_close = Some(on_close);
        self
    }

    /// Sets the [`Metrics`] of the [`MacDropdown`].
    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the size of the labels.
    pub fn text_size(mut self, size: impl Into<iced::Pixels>) -> Self {
        self.metrics = self.metrics.with_font_size(size.into().0);
        self
    }

    /// Sets the font of the labels.
    pub fn font(mut self, font: impl Into<Font>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the font of the checkmark and the chevrons.
    ///
    /// Defaults to the label font.
    pub fn glyph_font(mut self, font: impl Into<Font>) -> Self {
        self.glyph_font = Some(font.into());
        self
    }

    /// Sets the [`Glyphs`] of the [`MacDropdown`].
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Sets the style of the toggle.
    #[must_use]
    pub fn toggle_style(mut self, style: impl Fn(&Theme, Status) -> ToggleStyle + 'a) -> Self
    where
        <Theme as Catalog>::Class<'a>: From<ToggleStyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as ToggleStyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style of the menu.
    #[must_use]
    pub fn menu_style(mut self, style: impl Fn(&Theme) -> MenuStyle + 'a) -> Self
    where
        <Theme as Catalog>::MenuClass<'a>: From<MenuStyleFn<'a, Theme>>,
    {
        self.menu_class = (Box::new(style) as MenuStyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the toggle.
    #[must_use]
    pub fn class(mut self, class: impl Into<<Theme as Catalog>::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the style class of the menu.
    #[must_use]
    pub fn menu_class(mut self, class: impl Into<<Theme as Catalog>::MenuClass<'a>>) -> Self {
        self.menu_class = class.into();
        self
    }

    /// The label whose width every label reserves.
    fn reserved_label(&self) -> &str {
        label::longest_label(&self.labels)
    }

    /// The label shown by the toggle.
    fn shown_label(&self) -> &str {
        label::selected_label(&self.labels, self.selected)
    }
}

impl<'a, Message, Theme> MacDropdown<'a, Message, Theme>
where
    Message: Clone + 'a,
    Theme: Catalog + TextCatalog + 'a,
    <Theme as TextCatalog>::Class<'a>: From<TextStyleFn<'a, Theme>>,
{
    fn into_widget<Renderer>(self) -> Dropdown<'a, Message, Theme, Renderer>
    where
        Renderer: text::Renderer<Font = Font> + 'a,
    {
        let metrics = self.metrics;
        let glyph_font = Font {
            weight: font::Weight::Bold,
            ..self.glyph_font.or(self.font).unwrap_or(Font::DEFAULT)
        };

        let reserved = self.reserved_label().to_owned();

        let mut children: Vec<Element<'a, Message, Theme, Renderer>> =
            Vec::with_capacity(FIRST_ROW + self.labels.len());

        children.push(ghosted(&reserved, self.shown_label(), metrics.font_size, self.font));
        children.push(glyph(self.glyphs.chevron_up, metrics.chevron_size, glyph_font).into());
        children.push(glyph(self.glyphs.chevron_down, metrics.chevron_size, glyph_font).into());

        for (index, item) in self.labels.iter().enumerate() {
            let checkmark = glyph(self.glyphs.checkmark, metrics.glyph_size, glyph_font);

            let checkmark = match label::leading_glyph(index, self.selected) {
                LeadingGlyph::Checkmark => checkmark,
                LeadingGlyph::Blank => checkmark.color(Color::TRANSPARENT),
            };

            children.push(
                Row::with_children([
                    checkmark.into(),
                    ghosted(&reserved, item, metrics.font_size, self.font),
                ])
                .spacing(metrics.item_padding)
                .align_y(alignment::Vertical::Center)
                .into(),
            );
        }

        Dropdown {
            rows: self.labels.len(),
            selected: self.selected,
            on_select: self.on_select,
            on_open: self.on_open,
            on_close: self.on_close,
            metrics,
            class: self.class,
            menu_class: self.menu_class,
            children,
            last_status: None,
        }
    }
}

impl<'a, Message, Theme, Renderer> From<MacDropdown<'a, Message, Theme>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + TextCatalog + 'a,
    <Theme as TextCatalog>::Class<'a>: From<TextStyleFn<'a, Theme>>,
    Renderer: text::Renderer<Font = Font> + 'a,
{
    fn from(dropdown: MacDropdown<'a, Message, Theme>) -> Self {
        Element::new(dropdown.into_widget())
    }
}

/// A label laid over a transparent copy of `reserved`.
fn ghosted<'a, Message, Theme, Renderer>(
    reserved: &str,
    shown: &str,
    size: f32,
    font: Option<Font>,
) -> Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: TextCatalog + 'a,
    <Theme as TextCatalog>::Class<'a>: From<TextStyleFn<'a, Theme>>,
    Renderer: text::Renderer<Font = Font> + 'a,
{
    Stack::with_children([
        label_text(reserved, size, font)
            .color(Color::TRANSPARENT)
            .into(),
        label_text(shown, size, font).into(),
    ])
    .into()
}

fn label_text<'a, Theme, Renderer>(
    content: &str,
    size: f32,
    font: Option<Font>,
) -> Text<'a, Theme, Renderer>
where
    Theme: TextCatalog + 'a,
    Renderer: text::Renderer<Font = Font>,
{
    let text = Text::new(content.to_owned())
        .size(size)
        .wrapping(text::Wrapping::None);

    match font {
        Some(font) => text.font(font),
        None => text,
    }
}

fn glyph<'a, Theme, Renderer>(code_point: char, size: f32, font: Font) -> Text<'a, Theme, Renderer>
where
    Theme: TextCatalog + 'a,
    Renderer: text::Renderer<Font = Font>,
{
    Text::new(code_point.to_string())
        .size(size)
        .font(font)
        .shaping(text::Shaping::Advanced)
        .wrapping(text::Wrapping::None)
}

/// The widget a [`MacDropdown`] turns into once its elements are built.
struct Dropdown<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    rows: usize,
    selected: usize,
    on_select: Box<dyn Fn(usize) -> Message + 'a>,
    on_open: Option<Message>,
    on_close: Option<Message>,
    metrics: Metrics,
    class: <Theme as Catalog>::Class<'a>,
    menu_class: <Theme as Catalog>::MenuClass<'a>,
    /// The toggle label, the two chevrons, then one element per row.
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    last_status: Option<Status>,
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Dropdown<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new())
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let metrics = self.metrics;
        let loose = layout::Limits::new(Size::ZERO, Size::INFINITE);

        let [label, chevron_up, chevron_down] = [LABEL, CHEVRON_UP, CHEVRON_DOWN].map(|index| {
            self.children[index]
                .as_widget_mut()
                .layout(&mut tree.children[index], renderer, &loose)
        });

        let padding = metrics.toggle_padding;
        let label_size = label.size();
        let content_height = label_size.height.max(metrics.indicator_size);

        let size = Size::new(
            2.0 * padding + 2.0 * metrics.label_padding + label_size.width + metrics.indicator_size,
            2.0 * padding + content_height,
        );

        let label = label.move_to(Point::new(
            padding + metrics.label_padding,
            padding + (content_height - label_size.height) / 2.0,
        ));

        let indicator = indicator_bounds(Rectangle::with_size(size), &metrics);
        let center = indicator.center();
        let offset = Vector::new(0.0, metrics.chevron_offset);

        layout::Node::with_children(
            limits.resolve(Length::Shrink, Length::Shrink, size),
            vec![
                label,
                centered(chevron_up, center - offset),
                centered(chevron_down, center + offset),
            ],
        )
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();

        if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) = event
        {
            if state.is_open() {
                // The menu did not capture the press, so it landed outside of it.
                if state.dismiss() {
                    log::debug!("dropdown dismissed");

                    if let Some(on_close) = &self.on_close {
                        shell.publish(on_close.clone());
                    }
                }

                shell.capture_event();
                shell.request_redraw();
            } else if cursor.is_over(layout.bounds()) {
                if state.open(self.rows) {
                    log::debug!("dropdown opened with row {} selected", self.selected);

                    if let Some(on_open) = &self.on_open {
                        shell.publish(on_open.clone());
                    }
                }

                shell.capture_event();
                shell.request_redraw();
            }
        }

        let status = if state.is_open() {
            Status::Opened
        } else if cursor.is_over(layout.bounds()) {
            Status::Hovered
        } else {
            Status::Active
        };

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.last_status = Some(status);
        } else if self
            .last_status
            .is_some_and(|last_status| last_status != status)
        {
            shell.request_redraw();
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let style = <Theme as Catalog>::style(
            theme,
            &self.class,
            self.last_status.unwrap_or(Status::Active),
        );

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: style.border,
                shadow: style.shadow,
                ..renderer::Quad::default()
            },
            style.background,
        );

        renderer.fill_quad(
            renderer::Quad {
                bounds: indicator_bounds(bounds, &self.metrics),
                border: border::rounded(self.metrics.indicator_radius),
                ..renderer::Quad::default()
            },
            style.indicator_background,
        );

        let label_style = renderer::Style {
            text_color: style.text_color,
        };
        let indicator_style = renderer::Style {
            text_color: style.indicator_color,
        };

        for (index, child_layout) in layout.children().enumerate() {
            let child_style = if index == LABEL {
                &label_style
            } else {
                &indicator_style
            };

            self.children[index].as_widget().draw(
                &tree.children[index],
                renderer,
                theme,
                child_style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        _renderer: &Renderer,
        _viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let state = tree.state.downcast_mut::<State>();

        if !state.is_open() {
            return None;
        }

        state.resize(self.rows);

        let position = placement::menu_position(
            layout.bounds() + translation,
            self.selected,
            self.metrics.row_height(),
        );

        Some(overlay::Element::new(Box::new(Menu {
            position,
            state,
            rows: &mut self.children[FIRST_ROW..],
            trees: &mut tree.children[FIRST_ROW..],
            on_select: &*self.on_select,
            on_close: self.on_close.as_ref(),
            metrics: self.metrics,
            class: &self.menu_class,
        })))
    }
}

/// The square of the disclosure indicator at the end of the toggle.
fn indicator_bounds(toggle: Rectangle, metrics: &Metrics) -> Rectangle {
    let size = metrics.indicator_size;

    Rectangle {
        x: toggle.x + toggle.width - metrics.toggle_padding - size,
        y: toggle.center_y() - size / 2.0,
        width: size,
        height: size,
    }
}

fn centered(node: layout::Node, center: Point) -> layout::Node {
    let size = node.size();

    node.move_to(Point::new(
        center.x - size.width / 2.0,
        center.y - size.height / 2.0,
    ))
}
