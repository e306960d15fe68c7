use crate::config::CardzConfig;
use crate::form::CardPreview;
use crate::model::{Brand, CardRecord};
use std::path::PathBuf;

pub mod add;
pub mod brand;
pub mod config;
pub mod list;
pub mod remove;
pub mod view;

#[derive(Debug, Clone)]
pub struct CardzPaths {
    pub data_dir: PathBuf,
    pub prefs_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A stored card as a UI lists it: 1-based index, raw record and rendered face.
#[derive(Debug, Clone)]
pub struct DisplayCard {
    pub index: usize,
    pub record: CardRecord,
    pub preview: CardPreview,
    pub selected: bool,
}

impl DisplayCard {
    pub fn new(position: usize, record: &CardRecord, mask: char) -> Self {
        Self {
            index: position + 1,
            record: record.clone(),
            preview: CardPreview::of(record, mask),
            selected: false,
        }
    }
}

/// Result of classifying a raw number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: String,
    pub brand: Brand,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<CardRecord>,
    pub listed_cards: Vec<DisplayCard>,
    pub previews: Vec<CardPreview>,
    pub classification: Option<Classification>,
    pub config: Option<CardzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<CardRecord>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<DisplayCard>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_previews(mut self, previews: Vec<CardPreview>) -> Self {
        self.previews = previews;
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn with_config(mut self, config: CardzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Turns a 1-based display index into a store index; 0 maps to -1 (never valid).
pub(crate) fn store_index(display_index: usize) -> isize {
    isize::try_from(display_index).map_or(-1, |i| i - 1)
}
