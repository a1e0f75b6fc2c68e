use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    Dark,
    Light,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Dark => "Dark",
            PaletteType::Light => "Light",
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            PaletteType::Dark => PaletteType::Light,
            PaletteType::Light => PaletteType::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub root: Style,

    pub clock: Style,
    pub greeting: Style,
    pub date: Style,

    pub border: Style,
    pub border_focus: Style,
    pub card_title: Style,
    pub card_value: Style,
    pub card_label: Style,

    pub status_ready: Style,
    pub status_error: Style,

    pub list_item: Style,
    pub list_selected: Style,

    pub input_text: Style,
    pub footer_key: Style,
    pub footer_text: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Dark => Self::dark(),
            PaletteType::Light => Self::light(),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        let bg = Color::Rgb(24, 24, 37);
        let fg = Color::Rgb(205, 214, 244);
        let dim = Color::Rgb(127, 132, 156);
        let accent = Color::Rgb(137, 180, 250);
        let good = Color::Rgb(166, 227, 161);
        let bad = Color::Rgb(243, 139, 168);

        Self {
            root: Style::default().bg(bg).fg(fg),
            clock: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            greeting: Style::default().fg(accent),
            date: Style::default().fg(dim),
            border: Style::default().fg(dim),
            border_focus: Style::default().fg(accent),
            card_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            card_value: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            card_label: Style::default().fg(dim),
            status_ready: Style::default().fg(good),
            status_error: Style::default().fg(bad),
            list_item: Style::default().fg(fg),
            list_selected: Style::default()
                .fg(bg)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            input_text: Style::default().fg(fg),
            footer_key: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            footer_text: Style::default().fg(dim),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        let bg = Color::Rgb(239, 241, 245);
        let fg = Color::Rgb(76, 79, 105);
        let dim = Color::Rgb(140, 143, 161);
        let accent = Color::Rgb(30, 102, 245);
        let good = Color::Rgb(64, 160, 43);
        let bad = Color::Rgb(210, 15, 57);

        Self {
            root: Style::default().bg(bg).fg(fg),
            clock: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            greeting: Style::default().fg(accent),
            date: Style::default().fg(dim),
            border: Style::default().fg(dim),
            border_focus: Style::default().fg(accent),
            card_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            card_value: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            card_label: Style::default().fg(dim),
            status_ready: Style::default().fg(good),
            status_error: Style::default().fg(bad),
            list_item: Style::default().fg(fg),
            list_selected: Style::default()
                .fg(bg)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            input_text: Style::default().fg(fg),
            footer_key: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            footer_text: Style::default().fg(dim),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(PaletteType::Dark.toggled(), PaletteType::Light);
        assert_eq!(PaletteType::Light.toggled().toggled(), PaletteType::Light);
    }

    #[test]
    fn palette_type_serializes_lowercase() {
        let value = toml::Value::try_from(PaletteType::Dark).unwrap();
        assert_eq!(value, toml::Value::String("dark".to_string()));
    }
}
