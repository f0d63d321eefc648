use crossterm::style::{Color, ContentStyle};
use once_cell::sync::Lazy;

pub const INFO_COLOR: Color = Color::Green;
pub const DEBUG_COLOR: Color = Color::Blue;
pub const ERROR_COLOR: Color = Color::Red;

// the one style that needs a background, shared by every highlight word
static HIGHLIGHT_STYLE: Lazy<ContentStyle> = Lazy::new(|| {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(Color::Red);
    style.background_color = Some(Color::Yellow);
    style
});

/// color for a severity token; anything outside the known set stays uncolored
pub fn base_color(level: &str) -> Option<Color> {
    match level {
        "INFO" => Some(INFO_COLOR),
        "DEBUG" => Some(DEBUG_COLOR),
        "ERROR" => Some(ERROR_COLOR),
        _ => None,
    }
}

/// base paint for a severity token
pub fn base_paint(level: &str) -> Paint {
    Paint::from_color(base_color(level))
}

/// the fixed highlight paint (yellow background, red foreground)
pub fn highlight_paint() -> Paint {
    Paint::from_style(*HIGHLIGHT_STYLE)
}

/// wraps text in a terminal style, or passes it through verbatim when no
/// style applies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    style: Option<ContentStyle>,
}

impl Paint {
    pub fn plain() -> Self {
        Self { style: None }
    }

    pub fn from_color(color: Option<Color>) -> Self {
        Self {
            style: color.map(|color| {
                let mut style = ContentStyle::new();
                style.foreground_color = Some(color);
                style
            }),
        }
    }

    pub fn from_style(style: ContentStyle) -> Self {
        Self { style: Some(style) }
    }

    pub fn wrap(&self, text: &str) -> String {
        match self.style {
            Some(style) => style.apply(text).to_string(),
            None => text.to_owned(),
        }
    }
}
