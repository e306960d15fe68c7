//! # Input Normalization
//!
//! Every keystroke in a card field goes through one of the filters here before it
//! reaches the form state. The filters are total: any text is accepted, offending
//! characters are dropped, and overlong input is truncated. Nothing in this module
//! can fail.
//!
//! There are two kinds of transform:
//!
//! - **Raw transforms** ([`normalize_digits`], [`normalize_name`], [`Field::accept`])
//!   decide what gets stored.
//! - **Display transforms** ([`ExpiryFormat`], [`CardNumberFormat`], [`mask_cvv`],
//!   [`format_number_preview`], [`format_expiry_preview`]) only decide what gets
//!   shown. Their output is never written back into a field.
//!
//! Display transforms that insert separators into an editable field also implement
//! [`OffsetMapping`], so a cursor can be moved between raw and displayed text.

pub const NUMBER_MAX_LEN: usize = 16;
pub const EXPIRY_MAX_LEN: usize = 4;
pub const CVV_MAX_LEN: usize = 3;

/// Mask used on the card preview when nothing else is configured.
pub const DEFAULT_MASK: char = '*';

/// Keeps the first `max_len` ASCII digits of `input`, dropping everything else.
///
/// Digits from other scripts (`٤`, `४`) are dropped too: brand prefixes and the
/// stored number are ASCII only.
pub fn normalize_digits(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

/// Keeps letters and whitespace, uppercased. No length cap.
pub fn normalize_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Accepted field text plus the cursor position, counted in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    pub text: String,
    pub cursor: usize,
}

impl FieldValue {
    /// A value with the cursor pinned after the last char.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The four inputs of the add-card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Number,
    HolderName,
    Expiry,
    Cvv,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Number, Field::HolderName, Field::Expiry, Field::Cvv];

    pub fn label(self) -> &'static str {
        match self {
            Field::Number => "Card Number",
            Field::HolderName => "Card Holder Name",
            Field::Expiry => "Expiry Date",
            Field::Cvv => "CVV",
        }
    }

    pub fn max_len(self) -> Option<usize> {
        match self {
            Field::Number => Some(NUMBER_MAX_LEN),
            Field::HolderName => None,
            Field::Expiry => Some(EXPIRY_MAX_LEN),
            Field::Cvv => Some(CVV_MAX_LEN),
        }
    }

    pub fn normalize(self, input: &str) -> String {
        match self {
            Field::HolderName => normalize_name(input),
            digits => normalize_digits(input, digits.max_len().unwrap_or(usize::MAX)),
        }
    }

    /// Accepts the raw text of an edit.
    ///
    /// The accepted text replaces `previous` entirely and the cursor always lands at
    /// its end; `previous` is taken so callers can wire this straight into a
    /// text-change callback.
    pub fn accept(self, previous: &FieldValue, input: &str) -> FieldValue {
        let accepted = FieldValue::new(self.normalize(input));
        if accepted != *previous {
            log::trace!("{:?} accepted {} chars", self, accepted.cursor);
        }
        accepted
    }

    /// Display transform for the editable field, if it has one.
    pub fn display_transform(self) -> Option<&'static dyn DisplayTransform> {
        match self {
            Field::Number => Some(&CardNumberFormat),
            Field::Expiry => Some(&ExpiryFormat),
            Field::HolderName | Field::Cvv => None,
        }
    }

    /// Text shown inside the editable field for a raw value.
    pub fn display(self, raw: &str) -> String {
        match self.display_transform() {
            Some(transform) => transform.format(raw),
            None => raw.to_string(),
        }
    }
}

/// Maps cursor offsets between raw text and its displayed form.
pub trait OffsetMapping {
    fn original_to_transformed(&self, offset: usize) -> usize;
    fn transformed_to_original(&self, offset: usize) -> usize;
}

pub trait DisplayTransform: OffsetMapping {
    fn format(&self, raw: &str) -> String;
}

/// `MMYY` shown as `MM/YY` while typing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiryFormat;

impl DisplayTransform for ExpiryFormat {
    fn format(&self, raw: &str) -> String {
        let trimmed: Vec<char> = raw.chars().take(EXPIRY_MAX_LEN).collect();
        if trimmed.len() <= 2 {
            return trimmed.into_iter().collect();
        }
        let mut out: String = trimmed[..2].iter().collect();
        out.push('/');
        out.extend(&trimmed[2..]);
        out
    }
}

impl OffsetMapping for ExpiryFormat {
    fn original_to_transformed(&self, offset: usize) -> usize {
        match offset {
            0..=2 => offset,
            3..=4 => offset + 1,
            _ => 5,
        }
    }

    fn transformed_to_original(&self, offset: usize) -> usize {
        match offset {
            0..=2 => offset,
            3..=5 => offset - 1,
            _ => EXPIRY_MAX_LEN,
        }
    }
}

/// Card number shown in groups of four while typing (`1234 5678 9`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CardNumberFormat;

const NUMBER_GROUP: usize = 4;
const NUMBER_DISPLAY_LEN: usize = NUMBER_MAX_LEN + NUMBER_MAX_LEN / NUMBER_GROUP - 1;

impl DisplayTransform for CardNumberFormat {
    fn format(&self, raw: &str) -> String {
        group(raw.chars().take(NUMBER_MAX_LEN))
    }
}

impl OffsetMapping for CardNumberFormat {
    fn original_to_transformed(&self, offset: usize) -> usize {
        match offset {
            0 => 0,
            1..=NUMBER_MAX_LEN => offset + (offset - 1) / NUMBER_GROUP,
            _ => NUMBER_DISPLAY_LEN,
        }
    }

    fn transformed_to_original(&self, offset: usize) -> usize {
        if offset <= NUMBER_DISPLAY_LEN {
            offset - offset / (NUMBER_GROUP + 1)
        } else {
            NUMBER_MAX_LEN
        }
    }
}

fn group(chars: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    for (i, c) in chars.enumerate() {
        if i > 0 && i % NUMBER_GROUP == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Typed CVV digits overlaid on three mask chars: `"1"` becomes `"1**"`.
pub fn mask_cvv(cvv: &str, mask: char) -> String {
    let shown: String = cvv.chars().take(CVV_MAX_LEN).collect();
    let missing = CVV_MAX_LEN - shown.chars().count();
    shown.chars().chain(std::iter::repeat_n(mask, missing)).collect()
}

/// The number as printed on the card face: padded to 16 with `mask`, grouped by four.
pub fn format_number_preview(number: &str, mask: char) -> String {
    let digits: Vec<char> = number.chars().take(NUMBER_MAX_LEN).collect();
    let missing = NUMBER_MAX_LEN - digits.len();
    group(digits.into_iter().chain(std::iter::repeat_n(mask, missing)))
}

/// The expiry as printed on the card face: `"1229"` becomes `"12 / 29"`.
pub fn format_expiry_preview(expiry: &str) -> String {
    let chars: Vec<char> = expiry.chars().take(EXPIRY_MAX_LEN).collect();
    chars
        .chunks(2)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 16, "")]
    #[case("4111-1111 1111.1111", 16, "4111111111111111")]
    #[case("41111111111111112222", 16, "4111111111111111")]
    #[case("12/29", 4, "1229")]
    #[case("abc", 3, "")]
    #[case("1a2b3c4d", 3, "123")]
    #[case("١٢٣", 3, "")]
    fn digits_are_filtered_and_capped(
        #[case] input: &str,
        #[case] max: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(normalize_digits(input, max), expected);
    }

    #[test]
    fn digit_output_length_is_min_of_cap_and_digit_count() {
        let inputs = ["", "x1y2z3", "0000000000000000000000", "12 34 56", "--9--"];
        for input in inputs {
            let digit_count = input.chars().filter(|c| c.is_ascii_digit()).count();
            for max in 0..20 {
                let out = normalize_digits(input, max);
                assert!(out.chars().all(|c| c.is_ascii_digit()));
                assert_eq!(out.len(), max.min(digit_count));
            }
        }
    }

    #[rstest]
    #[case("jane doe", "JANE DOE")]
    #[case("J4ne D0e!", "JNE DE")]
    #[case("", "")]
    #[case("o'brien-smith", "OBRIENSMITH")]
    #[case("  élodie\tmüller ", "  ÉLODIE\tMÜLLER ")]
    fn names_keep_letters_and_whitespace_uppercased(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(input), expected);
    }

    #[test]
    fn name_output_has_no_lowercase_or_punctuation() {
        let out = normalize_name("Mary-Jane 0'Neil, jr.");
        assert!(out
            .chars()
            .all(|c| c.is_whitespace() || (c.is_alphabetic() && !c.is_lowercase())));
        assert_eq!(out, "MARYJANE NEIL JR");
    }

    #[test]
    fn accept_pins_cursor_to_end() {
        let previous = FieldValue::new("41");
        let value = Field::Number.accept(&previous, "41 11 ab");
        assert_eq!(value.text, "4111");
        assert_eq!(value.cursor, 4);

        let value = Field::HolderName.accept(&FieldValue::default(), "zoë");
        assert_eq!(value.text, "ZOË");
        assert_eq!(value.cursor, 3);
    }

    #[test]
    fn accept_applies_field_caps() {
        let empty = FieldValue::default();
        assert_eq!(Field::Expiry.accept(&empty, "12/2030").text, "1220");
        assert_eq!(Field::Cvv.accept(&empty, "12345").text, "123");
        assert_eq!(Field::Number.accept(&empty, &"9".repeat(30)).text.len(), 16);
        assert!(Field::HolderName.max_len().is_none());
    }

    #[rstest]
    #[case("", "")]
    #[case("1", "1")]
    #[case("12", "12")]
    #[case("122", "12/2")]
    #[case("1229", "12/29")]
    #[case("122999", "12/29")]
    fn expiry_field_display(#[case] raw: &str, #[case] shown: &str) {
        assert_eq!(ExpiryFormat.format(raw), shown);
        assert_eq!(Field::Expiry.display(raw), shown);
    }

    #[test]
    fn expiry_display_length() {
        for raw in ["", "1", "12", "123", "1234"] {
            let expected = if raw.len() <= 2 { raw.len() } else { raw.len() + 1 };
            assert_eq!(ExpiryFormat.format(raw).len(), expected);
        }
    }

    #[test]
    fn expiry_offsets() {
        let f = ExpiryFormat;
        assert_eq!(f.original_to_transformed(2), 2);
        assert_eq!(f.original_to_transformed(3), 4);
        assert_eq!(f.original_to_transformed(4), 5);
        assert_eq!(f.original_to_transformed(9), 5);
        assert_eq!(f.transformed_to_original(3), 2);
        assert_eq!(f.transformed_to_original(5), 4);
        assert_eq!(f.transformed_to_original(8), 4);
        for offset in 0..=EXPIRY_MAX_LEN {
            assert_eq!(
                f.transformed_to_original(f.original_to_transformed(offset)),
                offset
            );
        }
    }

    #[rstest]
    #[case("", "")]
    #[case("4111", "4111")]
    #[case("41111", "4111 1")]
    #[case("4111111111111111", "4111 1111 1111 1111")]
    #[case("41111111111111119999", "4111 1111 1111 1111")]
    fn number_field_display(#[case] raw: &str, #[case] shown: &str) {
        assert_eq!(Field::Number.display(raw), shown);
    }

    #[test]
    fn number_offsets_follow_inserted_spaces() {
        let f = CardNumberFormat;
        let shown = f.format("4111111111111111");
        for offset in 0..=NUMBER_MAX_LEN {
            let t = f.original_to_transformed(offset);
            assert!(t <= shown.len());
            assert_eq!(f.transformed_to_original(t), offset);
        }
        assert_eq!(f.original_to_transformed(5), 6);
        assert_eq!(f.transformed_to_original(5), 4);
        assert_eq!(f.transformed_to_original(40), NUMBER_MAX_LEN);
    }

    #[rstest]
    #[case("", "***")]
    #[case("1", "1**")]
    #[case("12", "12*")]
    #[case("123", "123")]
    #[case("12345", "123")]
    fn cvv_mask(#[case] cvv: &str, #[case] masked: &str) {
        assert_eq!(mask_cvv(cvv, '*'), masked);
    }

    #[test]
    fn number_preview_pads_and_groups() {
        assert_eq!(format_number_preview("", '*'), "**** **** **** ****");
        assert_eq!(format_number_preview("41111", '*'), "4111 1*** **** ****");
        assert_eq!(format_number_preview("4111111111111111", '•'), "4111 1111 1111 1111");
        assert_eq!(format_number_preview("123", '•'), "123• •••• •••• ••••");
    }

    #[rstest]
    #[case("", "")]
    #[case("1", "1")]
    #[case("122", "12 / 2")]
    #[case("1229", "12 / 29")]
    fn expiry_preview(#[case] raw: &str, #[case] shown: &str) {
        assert_eq!(format_expiry_preview(raw), shown);
    }
}
