//! Shows a few dropdowns and what they report.

use iced::widget::{center, column, row, text};
use iced::{Element, Task, Theme};
use mac_dropdown::style::{self, MenuStyle, Status, ToggleStyle};
use mac_dropdown::{MacDropdown, mac_dropdown};

const QUALITIES: [&str; 3] = ["Low", "Medium", "High"];
const INTERVALS: [&str; 4] = ["Never", "Every Minute", "Every Hour", "Every Day"];

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application(Demo::default, Demo::update, Demo::view)
        .title("Dropdown Demo")
        .theme(Demo::theme)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    QualitySelected(usize),
    IntervalSelected(usize),
    IntervalOpened,
    IntervalClosed,
    DarkModeSelected(usize),
}

struct Demo {
    quality: usize,
    interval: usize,
    interval_open: bool,
    openings: usize,
    dark: bool,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            quality: 1,
            interval: 0,
            interval_open: false,
            openings: 0,
            dark: false,
        }
    }
}

impl Demo {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QualitySelected(quality) => {
                self.quality = quality;
            }
            Message::IntervalSelected(interval) => {
                self.interval = interval;
            }
            Message::IntervalOpened => {
                self.interval_open = true;
                self.openings += 1;
            }
            Message::IntervalClosed => {
                self.interval_open = false;
            }
            Message::DarkModeSelected(index) => {
                self.dark = index == 1;
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let quality = row![
            text("Quality").width(120),
            mac_dropdown(QUALITIES, self.quality, Message::QualitySelected),
        ]
        .spacing(12);

        let interval = row![
            text("Check for updates").width(120),
            MacDropdown::new(INTERVALS, self.interval, Message::IntervalSelected)
                .on_open(Message::IntervalOpened)
                .on_close(Message::IntervalClosed)
                .menu_style(|theme: &Theme| MenuStyle {
                    hovered_background: theme
                        .extended_palette()
                        .success
                        .base
                        .color
                        .scale_alpha(0.7)
                        .into(),
                    ..style::default_menu(theme)
                }),
        ]
        .spacing(12);

        let appearance = row![
            text("Appearance").width(120),
            mac_dropdown(["Light", "Dark"], usize::from(self.dark), Message::DarkModeSelected)
                .text_size(15)
                .toggle_style(|theme: &Theme, status: Status| ToggleStyle {
                    indicator_background: theme.extended_palette().secondary.base.color.into(),
                    ..style::default_toggle(theme, status)
                }),
        ]
        .spacing(12);

        let report = text(format!(
            "{} quality, {} (menu {}, opened {} times)",
            QUALITIES[self.quality],
            INTERVALS[self.interval].to_lowercase(),
            if self.interval_open { "open" } else { "closed" },
            self.openings,
        ));

        center(column![quality, interval, appearance, report].spacing(16)).into()
    }

    fn theme(&self) -> Theme {
        if self.dark { Theme::Dark } else { Theme::Light }
    }
}
