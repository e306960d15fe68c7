//! # Brand Classification
//!
//! A card's brand is inferred from the leading digits of its raw number on every
//! change to the number field. Classification is purely prefix-based: there is no
//! checksum, and numbers that satisfy none of the rules are simply [`Brand::None`].
//!
//! The rules are checked in a fixed order and the first match wins. The order is
//! part of the contract: `9792` is tested before any two-digit prefix, and the
//! Diners Club prefixes `30`/`36`/`38` are tested before Visa's single `4`.

use crate::model::Brand;

const TROY_PREFIX: &str = "9792";
const DINERS_PREFIXES: [&str; 3] = ["30", "36", "38"];
const VISA_PREFIX: &str = "4";
const MASTERCARD_PREFIXES: [&str; 6] = ["50", "51", "52", "53", "54", "55"];
const MAESTRO_PREFIXES: [&str; 5] = ["56", "57", "58", "63", "67"];
const RUPAY_PREFIX: &str = "60";
const AMEX_PREFIX: &str = "37";

pub fn classify(number: &str) -> Brand {
    let two = leading(number, 2);

    if number.starts_with(TROY_PREFIX) {
        Brand::Troy
    } else if DINERS_PREFIXES.contains(&two) {
        Brand::DinersClub
    } else if number.starts_with(VISA_PREFIX) {
        Brand::Visa
    } else if MASTERCARD_PREFIXES.contains(&two) {
        Brand::Mastercard
    } else if MAESTRO_PREFIXES.contains(&two) {
        Brand::Maestro
    } else if number.starts_with(RUPAY_PREFIX) {
        Brand::RuPay
    } else if number.starts_with(AMEX_PREFIX) {
        Brand::AmericanExpress
    } else {
        Brand::None
    }
}

/// The first `n` chars of `s`, or all of it when shorter.
fn leading(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// How a brand is drawn on the card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandStyle {
    /// Card background. `None` means the UI's neutral theme color.
    pub color: Option<Rgb>,
    /// Icon asset name. `None` means no icon is shown.
    pub icon: Option<&'static str>,
}

const NEUTRAL: BrandStyle = BrandStyle {
    color: None,
    icon: None,
};

const fn branded(hex: u32, icon: &'static str) -> BrandStyle {
    BrandStyle {
        color: Some(Rgb::from_hex(hex)),
        icon: Some(icon),
    }
}

pub fn style(brand: Brand) -> BrandStyle {
    match brand {
        Brand::None => NEUTRAL,
        Brand::Visa => branded(0x1C478B, "ic_visa"),
        Brand::Mastercard => branded(0x3BB9A1, "ic_mastercard"),
        Brand::RuPay => branded(0xB2B1FD, "ic_rupay"),
        Brand::AmericanExpress => branded(0xA671FC, "ic_american_express"),
        Brand::Maestro => branded(0x99BEF8, "ic_maestro"),
        Brand::DinersClub => branded(0xFC4444, "ic_dinersclub"),
        Brand::Troy => branded(0x45AF97, "ic_troy"),
    }
}
