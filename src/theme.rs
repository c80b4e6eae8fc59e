//! Styles scoped per component. Each component's drawing code only reads its
//! own section, so changing the card look never touches the modal.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct CardTheme {
    pub border: Style,
    pub border_focused: Style,
    pub image: Style,
    pub title: Style,
    pub seasons: Style,
    pub tag: Style,
    pub updated: Style,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::White),
            border_focused: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            image: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            title: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            seasons: Style::default().fg(Color::White),
            tag: Style::default().fg(Color::Black).bg(Color::Gray),
            updated: Style::default().fg(Color::DarkGray),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModalTheme {
    pub border: Style,
    pub title: Style,
    pub image: Style,
    pub description: Style,
    pub tag: Style,
    pub updated: Style,
    pub season: Style,
}

impl Default for ModalTheme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Green),
            title: Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
            image: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            description: Style::default().fg(Color::White),
            tag: Style::default().fg(Color::Black).bg(Color::LightGreen),
            updated: Style::default().fg(Color::DarkGray),
            season: Style::default().fg(Color::LightCyan),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub card: CardTheme,
    pub modal: ModalTheme,
    pub header: HeaderTheme,
}

#[derive(Debug, Clone, Copy)]
pub struct HeaderTheme {
    pub title: Style,
    pub hint: Style,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::Green),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}
