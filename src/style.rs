//! The appearance of the toggle and the menu.
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// The possible status of the toggle of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The toggle can be interacted with.
    Active,
    /// The toggle is being hovered.
    Hovered,
    /// The menu is open.
    Opened,
}

/// The appearance of the toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleStyle {
    /// The [`Background`] of the toggle surface.
    pub background: Background,
    /// The [`Color`] of the selected label.
    pub text_color: Color,
    /// The [`Border`] of the toggle surface.
    pub border: Border,
    /// The [`Shadow`] of the toggle surface.
    pub shadow: Shadow,
    /// The [`Background`] of the disclosure indicator.
    pub indicator_background: Background,
    /// The [`Color`] of the chevrons.
    pub indicator_color: Color,
}

/// The appearance of the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuStyle {
    /// The [`Background`] of the menu surface.
    pub background: Background,
    /// The text [`Color`] of rows that are not hovered.
    pub text_color: Color,
    /// The [`Border`] of the menu surface.
    pub border: Border,
    /// The [`Shadow`] of the menu surface.
    pub shadow: Shadow,
    /// The [`Background`] of the hovered row.
    pub hovered_background: Background,
    /// The text [`Color`] of the hovered row.
    pub hovered_text_color: Color,
}

/// The theme catalog of a [`MacDropdown`](crate::MacDropdown).
pub trait Catalog {
    /// The style class of the toggle.
    type Class<'a>;
    /// The style class of the menu.
    type MenuClass<'a>;

    /// The default class of the toggle.
    fn default<'a>() -> Self::Class<'a>;

    /// The default class of the menu.
    fn default_menu<'a>() -> Self::MenuClass<'a>;

    /// The [`ToggleStyle`] of a class with the given status.
    fn style(&self, class: &Self::Class<'_>, status: Status) -> ToggleStyle;

    /// The [`MenuStyle`] of a class.
    fn menu_style(&self, class: &Self::MenuClass<'_>) -> MenuStyle;
}

/// A styling function for the toggle.
pub type ToggleStyleFn<'a, Theme> = Box<dyn Fn(&Theme, Status) -> ToggleStyle + 'a>;

/// A styling function for the menu.
pub type MenuStyleFn<'a, Theme> = Box<dyn Fn(&Theme) -> MenuStyle + 'a>;

impl Catalog for Theme {
    type Class<'a> = ToggleStyleFn<'a, Self>;
    type MenuClass<'a> = MenuStyleFn<'a, Self>;

    fn default<'a>() -> ToggleStyleFn<'a, Self> {
        Box::new(default_toggle)
    }

    fn default_menu<'a>() -> MenuStyleFn<'a, Self> {
        Box::new(default_menu)
    }

    fn style(&self, class: &ToggleStyleFn<'_, Self>, status: Status) -> ToggleStyle {
        class(self, status)
    }

    fn menu_style(&self, class: &MenuStyleFn<'_, Self>) -> MenuStyle {
        class(self)
    }
}

/// The default style of the toggle.
pub fn default_toggle(theme: &Theme, status: Status) -> ToggleStyle {
    let palette = theme.extended_palette();

    let active = ToggleStyle {
        background: palette.background.base.color.into(),
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.15),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        indicator_background: palette.primary.base.color.into(),
        indicator_color: Color::WHITE,
    };

    match status {
        Status::Active | Status::Hovered => active,
        Status::Opened => ToggleStyle {
            background: palette.background.weak.color.into(),
            ..active
        },
    }
}

/// The default style of the menu.
pub fn default_menu(theme: &Theme) -> MenuStyle {
    let palette = theme.extended_palette();

    MenuStyle {
        background: palette.background.weak.color.into(),
        text_color: palette.background.weak.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.25),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        hovered_background: palette.primary.base.color.scale_alpha(0.7).into(),
        hovered_text_color: Color::WHITE,
    }
}
