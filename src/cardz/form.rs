//! # Add-Card Form
//!
//! The form screen is an explicit state object, [`CardForm`], plus a pure render
//! function, [`CardForm::preview`]. Every edit goes through [`CardForm::on_input`],
//! which runs the field's normalizer; whatever UI sits on top re-renders the
//! preview after each call.
//!
//! Saving takes a [`CardForm::snapshot`] of the four raw texts. The preview is
//! never stored.

use crate::brand::{self, BrandStyle};
use crate::input::{
    format_expiry_preview, format_number_preview, mask_cvv, Field, FieldValue,
};
use crate::model::{Brand, CardRecord};

/// Shown on the card face while no holder name has been typed.
pub const HOLDER_PLACEHOLDER: &str = "Card Holder Name";

/// Holder names longer than this are drawn in a smaller face.
const COMPACT_HOLDER_LEN: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    number: FieldValue,
    holder_name: FieldValue,
    expiry: FieldValue,
    cvv: FieldValue,
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &FieldValue {
        match field {
            Field::Number => &self.number,
            Field::HolderName => &self.holder_name,
            Field::Expiry => &self.expiry,
            Field::Cvv => &self.cvv,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut FieldValue {
        match field {
            Field::Number => &mut self.number,
            Field::HolderName => &mut self.holder_name,
            Field::Expiry => &mut self.expiry,
            Field::Cvv => &mut self.cvv,
        }
    }

    /// Applies an edit to `field` and returns the accepted value.
    pub fn on_input(&mut self, field: Field, raw: &str) -> &FieldValue {
        let accepted = field.accept(self.value(field), raw);
        let slot = self.value_mut(field);
        *slot = accepted;
        slot
    }

    pub fn with_input(mut self, field: Field, raw: &str) -> Self {
        self.on_input(field, raw);
        self
    }

    pub fn brand(&self) -> Brand {
        brand::classify(&self.number.text)
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    pub fn snapshot(&self) -> CardRecord {
        CardRecord::new(
            self.number.text.clone(),
            self.holder_name.text.clone(),
            self.expiry.text.clone(),
            self.cvv.text.clone(),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn preview(&self, mask: char) -> CardPreview {
        CardPreview::of(&self.snapshot(), mask)
    }
}

/// Everything needed to draw the card face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPreview {
    pub number: String,
    pub holder: String,
    pub holder_is_placeholder: bool,
    pub compact_holder: bool,
    pub expiry: String,
    pub cvv: String,
    pub brand: Brand,
    pub style: BrandStyle,
}

impl CardPreview {
    pub fn of(record: &CardRecord, mask: char) -> Self {
        let brand = record.brand();
        let holder_is_placeholder = record.holder_name.is_empty();
        let holder = if holder_is_placeholder {
            HOLDER_PLACEHOLDER.to_string()
        } else {
            record.holder_name.clone()
        };

        Self {
            number: format_number_preview(&record.number, mask),
            compact_holder: record.holder_name.chars().count() > COMPACT_HOLDER_LEN,
            holder,
            holder_is_placeholder,
            expiry: format_expiry_preview(&record.expiry),
            cvv: mask_cvv(&record.cvv, mask),
            brand,
            style: brand::style(brand),
        }
    }
}
