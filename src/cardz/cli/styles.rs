use console::Style;
use once_cell::sync::Lazy;

pub struct CardzTheme {
    pub index: Style,
    pub brand: Style,
    pub label: Style,
    pub placeholder: Style,
    pub neutral_card: Style,
    pub dot_active: Style,
    pub dot_inactive: Style,
}

pub static CARDZ_THEME: Lazy<CardzTheme> = Lazy::new(|| CardzTheme {
    index: Style::new().yellow(),
    brand: Style::new().bold(),
    label: Style::new().dim(),
    placeholder: Style::new().dim().italic(),
    neutral_card: Style::new().white(),
    dot_active: Style::new().bold(),
    dot_inactive: Style::new().color256(247),
});

pub const DOT_ACTIVE: &str = "●";
pub const DOT_INACTIVE: &str = "○";
