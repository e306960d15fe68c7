//! # Rendering Module
//!
//! Turns command results into terminal text. Every function returns a `String`;
//! printing happens in `main.rs`.
//!
//! Cards are drawn as a fixed-width box in the brand color (true color background
//! via `colored`); cards with no recognized brand use the neutral theme style.
//! Layout math (width, truncation, padding) is Unicode-aware.

use super::styles::{CARDZ_THEME, DOT_ACTIVE, DOT_INACTIVE};
use cardz::api::{Classification, CmdMessage, DisplayCard, MessageLevel};
use cardz::brand::{style, Rgb};
use cardz::config::CardzConfig;
use cardz::form::{CardForm, CardPreview};
use cardz::input::Field;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the text area inside a card box.
pub const CARD_INNER: usize = 32;
const LABEL_WIDTH: usize = 18;

pub fn render_card(preview: &CardPreview) -> String {
    let border = "─".repeat(CARD_INNER + 2);
    let mut rows = vec![format!("╭{}╮", border)];
    for line in card_lines(preview) {
        rows.push(format!("│ {} │", line));
    }
    rows.push(format!("╰{}╯", border));

    rows.into_iter()
        .map(|row| paint(&row, preview))
        .collect::<Vec<_>>()
        .join("\n")
}

fn card_lines(preview: &CardPreview) -> Vec<String> {
    let brand = if preview.brand.is_known() {
        preview.brand.to_string().to_uppercase()
    } else {
        String::new()
    };

    let expiry = format!("EXP {}", preview.expiry);
    let cvc = format!("CVC {}", preview.cvv);
    let gap = CARD_INNER.saturating_sub(expiry.width() + cvc.width());
    let bottom = format!("{}{}{}", expiry, " ".repeat(gap), cvc);

    [
        brand,
        String::new(),
        center(&preview.number, CARD_INNER),
        String::new(),
        bottom,
        truncate_to_width(&preview.holder, CARD_INNER),
    ]
    .iter()
    .map(|line| pad_to_width(line, CARD_INNER))
    .collect()
}

fn paint(row: &str, preview: &CardPreview) -> String {
    match preview.style.color {
        Some(Rgb(r, g, b)) => row.on_truecolor(r, g, b).truecolor(255, 255, 255).to_string(),
        None => CARDZ_THEME.neutral_card.apply_to(row).to_string(),
    }
}

/// All cards, each with its index and brand above the card box.
pub fn render_card_list(cards: &[DisplayCard]) -> String {
    cards
        .iter()
        .map(|dc| format!("{}\n{}", card_header(dc), render_card(&dc.preview)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn card_header(dc: &DisplayCard) -> String {
    let index = CARDZ_THEME.index.apply_to(format!("{}.", dc.index));
    let brand = CARDZ_THEME.brand.apply_to(dc.preview.brand.to_string());
    format!("{} {}", index, brand)
}

/// The focused card with the indicator dots underneath.
pub fn render_carousel(cards: &[DisplayCard]) -> String {
    let Some(focused) = cards.iter().find(|dc| dc.selected) else {
        return String::new();
    };

    let dots = cards
        .iter()
        .map(|dc| {
            if dc.selected {
                CARDZ_THEME.dot_active.apply_to(DOT_ACTIVE).to_string()
            } else {
                CARDZ_THEME.dot_inactive.apply_to(DOT_INACTIVE).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let dots_width = cards.len() * 2 - 1;
    let indent = " ".repeat((CARD_INNER + 4).saturating_sub(dots_width) / 2);

    format!(
        "{}\n{}\n{}{}",
        card_header(focused),
        render_card(&focused.preview),
        indent,
        dots
    )
}

/// The form fields as they look while typing (grouped number, `MM/YY` expiry).
pub fn render_form_fields(form: &CardForm) -> String {
    Field::ALL
        .iter()
        .map(|field| {
            let label = pad_to_width(field.label(), LABEL_WIDTH);
            let raw = &form.value(*field).text;
            let shown = if raw.is_empty() {
                CARDZ_THEME.placeholder.apply_to("(empty)".to_string()).to_string()
            } else {
                field.display(raw)
            };
            format!("{}{}", CARDZ_THEME.label.apply_to(label), shown)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_classification(classification: &Classification) -> String {
    let brand_style = style(classification.brand);
    let mut line = format!(
        "{} {}",
        CARDZ_THEME.brand.apply_to(classification.brand.to_string()),
        CARDZ_THEME.label.apply_to(format!("({})", classification.number))
    );
    if let Some(color) = brand_style.color {
        line.push_str(&format!("  {}", color.to_hex_string()));
    }
    line
}

pub fn render_config(config: &CardzConfig) -> String {
    format!("mask-char = {}", config.mask_char())
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn center(s: &str, width: usize) -> String {
    let left = width.saturating_sub(s.width()) / 2;
    format!("{}{}", " ".repeat(left), s)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardz::model::CardRecord;

    fn plain() {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    fn display(position: usize, record: CardRecord, selected: bool) -> DisplayCard {
        DisplayCard {
            selected,
            ..DisplayCard::new(position, &record, '*')
        }
    }

    #[test]
    fn card_box_has_fixed_width() {
        plain();
        let preview = CardPreview::of(&CardRecord::new("4111", "JANE DOE", "1229", "1"), '*');
        let out = render_card(&preview);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 8);
        for row in rows {
            assert_eq!(row.width(), CARD_INNER + 4, "{:?}", row);
        }
        assert!(out.contains("VISA"));
        assert!(out.contains("4111 **** **** ****"));
        assert!(out.contains("EXP 12 / 29"));
        assert!(out.contains("CVC 1**"));
        assert!(out.contains("JANE DOE"));
    }

    #[test]
    fn unknown_brand_has_no_brand_line_and_placeholder_holder() {
        plain();
        let preview = CardPreview::of(&CardRecord::default(), '*');
        let out = render_card(&preview);
        assert!(!out.contains("UNKNOWN"));
        assert!(out.contains("Card Holder Name"));
    }

    #[test]
    fn long_holder_is_truncated() {
        let long = "A".repeat(40);
        let out = truncate_to_width(&long, CARD_INNER);
        assert_eq!(out.width(), CARD_INNER);
        assert!(out.ends_with('…'));
        assert_eq!(truncate_to_width("SHORT", CARD_INNER), "SHORT");
    }

    #[test]
    fn list_shows_indexes_and_brands() {
        plain();
        let cards = vec![
            display(0, CardRecord::new("51", "", "", ""), false),
            display(1, CardRecord::new("9792", "", "", ""), false),
        ];
        let out = render_card_list(&cards);
        assert!(out.contains("1. Mastercard"));
        assert!(out.contains("2. Troy"));
    }

    #[test]
    fn carousel_shows_focused_card_and_dots() {
        plain();
        let cards = vec![
            display(0, CardRecord::new("51", "", "", ""), false),
            display(1, CardRecord::new("37", "", "", ""), true),
        ];
        let out = render_carousel(&cards);
        assert!(out.contains("2. American Express"));
        assert!(!out.contains("1. Mastercard"));
        assert!(out.trim_end().ends_with("○ ●"));
    }

    #[test]
    fn form_fields_use_field_display() {
        plain();
        let form = CardForm::new()
            .with_input(Field::Number, "411111")
            .with_input(Field::Expiry, "1229");
        let out = render_form_fields(&form);
        assert!(out.contains("4111 11"));
        assert!(out.contains("12/29"));
        assert!(out.contains("(empty)"));
    }

    #[test]
    fn classification_line() {
        plain();
        let out = render_classification(&Classification {
            number: "4".into(),
            brand: cardz::model::Brand::Visa,
        });
        assert_eq!(out, "Visa (4)  #1C478B");
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("a"), CmdMessage::warning("b")]);
        assert_eq!(out, "a\nb");
    }
}
