//! The menu overlay of a dropdown.
use crate::metrics::Metrics;
use crate::placement;
use crate::state::State;
use crate::style::Catalog;

use iced::advanced::layout;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::Tree;
use iced::advanced::{Clipboard, Layout, Shell};
use iced::mouse;
use iced::touch;
use iced::{Element, Event, Point, Size, border};

/// The rows of an open dropdown, drawn above the rest of the interface.
pub(crate) struct Menu<'a, 'b, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    /// Where the first row starts before the menu is kept in the viewport.
    pub(crate) position: Point,
    pub(crate) state: &'b mut State,
    pub(crate) rows: &'b mut [Element<'a, Message, Theme, Renderer>],
    pub(crate) trees: &'b mut [Tree],
    pub(crate) on_select: &'b dyn Fn(usize) -> Message,
    pub(crate) on_close: Option<&'b Message>,
    pub(crate) metrics: Metrics,
    pub(crate) class: &'b <Theme as Catalog>::MenuClass<'a>,
}

impl<Message, Theme, Renderer> Menu<'_, '_, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    fn row_under(&self, layout: Layout<'_>, cursor: mouse::Cursor) -> Option<usize> {
        cursor.position().and_then(|position| {
            placement::row_at(
                layout.bounds(),
                position,
                self.metrics.row_height(),
                self.rows.len(),
            )
        })
    }
}

impl<Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for Menu<'_, '_, Message, Theme, Renderer>
where
    Message: Clone,
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, bounds: Size) -> layout::Node {
        let row_height = self.metrics.row_height();
        let inset = self.metrics.highlight_inset + self.metrics.row_padding;
        let limits = layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, row_height));

        let nodes: Vec<layout::Node> = self
            .rows
            .iter_mut()
            .zip(self.trees.iter_mut())
            .map(|(row, tree)| row.as_widget_mut().layout(tree, renderer, &limits))
            .collect();

        let content_width = nodes
            .iter()
            .fold(0.0_f32, |width, node| width.max(node.size().width));

        let size = Size::new(
            content_width + 2.0 * inset,
            row_height * nodes.len() as f32,
        );

        let children = nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let height = node.size().height;

                node.move_to(Point::new(
                    inset,
                    index as f32 * row_height + (row_height - height) / 2.0,
                ))
            })
            .collect();

        let position = placement::clamp_to_viewport(
            self.position,
            size,
            self.metrics.menu_padding,
            bounds,
        );

        layout::Node::with_children(size, children).move_to(position)
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        let bounds = layout.bounds();
        let surface = placement::surface_bounds(bounds, self.metrics.menu_padding);
        let style = <Theme as Catalog>::menu_style(theme, self.class);
        let row_height = self.metrics.row_height();

        renderer.fill_quad(
            renderer::Quad {
                bounds: surface,
                border: style.border,
                shadow: style.shadow,
                ..renderer::Quad::default()
            },
            style.background,
        );

        for (index, ((row, tree), row_layout)) in self
            .rows
            .iter()
            .zip(self.trees.iter())
            .zip(layout.children())
            .enumerate()
        {
            let text_color = if self.state.is_hovered(index) {
                let highlight = placement::highlight_bounds(
                    placement::row_bounds(bounds, index, row_height),
                    self.metrics.highlight_inset,
                );

                renderer.fill_quad(
                    renderer::Quad {
                        bounds: highlight,
                        border: border::rounded(self.metrics.highlight_radius),
                        ..renderer::Quad::default()
                    },
                    style.hovered_background,
                );

                style.hovered_text_color
            } else {
                style.text_color
            };

            row.as_widget().draw(
                tree,
                renderer,
                theme,
                &renderer::Style { text_color },
                row_layout,
                cursor,
                &surface,
            );
        }
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        let surface = placement::surface_bounds(layout.bounds(), self.metrics.menu_padding);

        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                let row = self.row_under(layout, cursor);

                if self.state.hover(row) {
                    log::trace!("dropdown hover moved to {row:?}");
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if self.state.hover(None) {
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(index) = self
                    .row_under(layout, cursor)
                    .and_then(|row| self.state.select(row))
                {
                    log::debug!("dropdown row {index} selected");

                    shell.publish((self.on_select)(index));

                    if let Some(on_close) = self.on_close {
                        shell.publish(on_close.clone());
                    }

                    shell.request_redraw();
                }
            }
            _ => {}
        }

        if cursor.is_over(surface) {
            shell.capture_event();
        }
    }
}
