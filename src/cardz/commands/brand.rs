use crate::brand::classify;
use crate::commands::{Classification, CmdMessage, CmdResult};
use crate::error::Result;
use crate::input::Field;

/// Classifies whatever was typed into the number field.
pub fn run(raw: &str) -> Result<CmdResult> {
    let number = Field::Number.normalize(raw);
    let brand = classify(&number);

    let mut result = CmdResult::default();
    if number.is_empty() {
        result.add_message(CmdMessage::warning("No digits to classify"));
    }
    Ok(result.with_classification(Classification { number, brand }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Brand;

    #[test]
    fn normalizes_before_classifying() {
        let result = run("9792-0000").unwrap();
        let c = result.classification.unwrap();
        assert_eq!(c.number, "97920000");
        assert_eq!(c.brand, Brand::Troy);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_digits_is_unknown_with_warning() {
        let result = run("abc").unwrap();
        assert_eq!(result.classification.unwrap().brand, Brand::None);
        assert_eq!(result.messages.len(), 1);
    }
}
