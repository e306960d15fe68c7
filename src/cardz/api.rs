//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every cardz operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the bound [`CardStore`] and the loaded [`CardzConfig`]
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no presentation logic.
//!
//! ## Generic Over Preferences
//!
//! `CardzApi<P: Preferences>` is generic over the persistence handle:
//! - Production: `CardzApi<FilePreferences>`
//! - Testing: `CardzApi<&MemoryPreferences>`

use crate::commands;
use crate::config::CardzConfig;
use crate::error::Result;
use crate::form::CardForm;
use crate::prefs::Preferences;
use crate::store::CardStore;

pub struct CardzApi<P: Preferences> {
    store: CardStore<P>,
    config: CardzConfig,
    paths: commands::CardzPaths,
}

impl<P: Preferences> CardzApi<P> {
    /// Binds a fresh store to `prefs` and loads the persisted cards.
    pub fn open(prefs: P, config: CardzConfig, paths: commands::CardzPaths) -> Result<Self> {
        let mut store = CardStore::new();
        store.initialize(prefs);
        store.load()?;
        Ok(Self {
            store,
            config,
            paths,
        })
    }

    pub fn add_card(&mut self, form: &CardForm, dry_run: bool) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, form, self.config.mask_char(), dry_run)
    }

    pub fn list_cards(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.config.mask_char())
    }

    pub fn view_card(&self, display_index: usize) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, display_index, self.config.mask_char())
    }

    pub fn remove_card(&mut self, display_index: usize) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, display_index, self.config.mask_char())
    }

    pub fn classify(&self, raw: &str) -> Result<commands::CmdResult> {
        commands::brand::run(raw)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn store(&self) -> &CardStore<P> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CardzPaths, Classification, CmdMessage, CmdResult, DisplayCard, MessageLevel};
