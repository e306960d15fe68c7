use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A saved card: four raw text fields, in the order they are entered.
///
/// The brand is not stored; it is derived from `number` whenever it is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,
    #[serde(rename = "name", default, deserialize_with = "lenient_string")]
    pub holder_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expiry: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cvv: String,
}

impl CardRecord {
    pub fn new(
        number: impl Into<String>,
        holder_name: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            holder_name: holder_name.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    pub fn brand(&self) -> Brand {
        crate::brand::classify(&self.number)
    }
}

/// Accepts any scalar where a string is expected. `null` reads as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar field, found {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brand {
    #[default]
    None,
    Visa,
    Mastercard,
    AmericanExpress,
    DinersClub,
    Maestro,
    RuPay,
    Troy,
}

impl Brand {
    pub const ALL: [Brand; 8] = [
        Brand::None,
        Brand::Visa,
        Brand::Mastercard,
        Brand::AmericanExpress,
        Brand::DinersClub,
        Brand::Maestro,
        Brand::RuPay,
        Brand::Troy,
    ];

    pub fn is_known(self) -> bool {
        self != Brand::None
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Brand::None => "Unknown",
            Brand::Visa => "Visa",
            Brand::Mastercard => "Mastercard",
            Brand::AmericanExpress => "American Express",
            Brand::DinersClub => "Diners Club",
            Brand::Maestro => "Maestro",
            Brand::RuPay => "RuPay",
            Brand::Troy => "Troy",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_persisted_key_names_in_order() {
        let card = CardRecord::new("4111111111111111", "JANE DOE", "1229", "123");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(
            json,
            r#"{"number":"4111111111111111","name":"JANE DOE","expiry":"1229","cvv":"123"}"#
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let card: CardRecord = serde_json::from_str(r#"{"number":"4"}"#).unwrap();
        assert_eq!(card, CardRecord::new("4", "", "", ""));
    }

    #[test]
    fn scalar_fields_are_read_as_text() {
        let card: CardRecord =
            serde_json::from_str(r#"{"number":4111,"name":null,"expiry":"0229","cvv":true}"#)
                .unwrap();
        assert_eq!(card.number, "4111");
        assert_eq!(card.holder_name, "");
        assert_eq!(card.expiry, "0229");
        assert_eq!(card.cvv, "true");
    }

    #[test]
    fn nested_values_are_rejected() {
        let parsed: Result<CardRecord, _> = serde_json::from_str(r#"{"number":[1,2]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn brand_display_names() {
        assert_eq!(Brand::AmericanExpress.to_string(), "American Express");
        assert_eq!(Brand::None.to_string(), "Unknown");
        assert!(!Brand::None.is_known());
        assert!(Brand::Troy.is_known());
    }
}
