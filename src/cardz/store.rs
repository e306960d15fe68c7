//! # Card Store
//!
//! An ordered, in-memory list of [`CardRecord`]s bound to a [`Preferences`] handle.
//!
//! ## Lifecycle
//!
//! ```text
//! Unbound ──initialize(handle)──▶ Bound(handle)
//! ```
//!
//! `Bound` is terminal: a second `initialize` is ignored and the first handle stays
//! in place. `load`, `add_card` and `remove_at` need a bound store and return
//! [`CardzError::Unbound`] otherwise.
//!
//! ## Persistence Contract
//!
//! The collection is stored as a single JSON array under [`KEY_CARDS`] in the
//! [`PREFS_NAME`] namespace:
//!
//! ```text
//! [{"number":"4111111111111111","name":"JANE DOE","expiry":"1229","cvv":"123"}]
//! ```
//!
//! - Every mutation is immediately followed by a full overwrite of that value.
//!   There are no partial writes and no dirty tracking.
//! - `load` replaces the in-memory list with the persisted one. An absent value
//!   leaves the list untouched. A value that does not parse is logged and ignored:
//!   the in-memory list is kept as it was, and `load` still succeeds.
//! - Out-of-range removals do nothing and write nothing.

use crate::error::{CardzError, Result};
use crate::model::CardRecord;
use crate::prefs::Preferences;

/// Namespace the store persists into.
pub const PREFS_NAME: &str = "cards_repo_prefs";
/// Key holding the serialized collection.
pub const KEY_CARDS: &str = "cards_json";

#[derive(Debug)]
enum StoreState<P> {
    Unbound,
    Bound(P),
}

pub struct CardStore<P: Preferences> {
    state: StoreState<P>,
    cards: Vec<CardRecord>,
}

impl<P: Preferences> Default for CardStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Preferences> CardStore<P> {
    pub fn new() -> Self {
        Self {
            state: StoreState::Unbound,
            cards: Vec::new(),
        }
    }

    /// A store that is already bound to `prefs`. Nothing is loaded yet.
    pub fn bound(prefs: P) -> Self {
        let mut store = Self::new();
        store.initialize(prefs);
        store
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, StoreState::Bound(_))
    }

    /// Binds the store. Returns `false` (and drops `prefs`) if it was already bound.
    pub fn initialize(&mut self, prefs: P) -> bool {
        match self.state {
            StoreState::Bound(_) => {
                log::debug!("card store already bound; keeping the first handle");
                false
            }
            StoreState::Unbound => {
                self.state = StoreState::Bound(prefs);
                log::info!("card store bound to {}", PREFS_NAME);
                true
            }
        }
    }

    fn prefs(&self) -> Result<&P> {
        match &self.state {
            StoreState::Bound(prefs) => Ok(prefs),
            StoreState::Unbound => Err(CardzError::Unbound),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        let Some(json) = self.prefs()?.get_string(KEY_CARDS)? else {
            log::debug!("no persisted cards");
            return Ok(());
        };

        match serde_json::from_str::<Vec<CardRecord>>(&json) {
            Ok(loaded) => {
                log::debug!("loaded {} card(s)", loaded.len());
                self.cards = loaded;
            }
            Err(e) => {
                log::warn!("ignoring unreadable {}: {}", KEY_CARDS, e);
            }
        }
        Ok(())
    }

    pub fn add_card(&mut self, card: CardRecord) -> Result<()> {
        self.prefs()?;
        self.cards.push(card);
        self.persist()
    }

    /// Removes the card at `index`, returning it.
    ///
    /// Negative or out-of-range indexes are ignored and return `Ok(None)`.
    pub fn remove_at(&mut self, index: isize) -> Result<Option<CardRecord>> {
        self.prefs()?;
        let Some(i) = usize::try_from(index).ok().filter(|i| *i < self.cards.len()) else {
            log::debug!("remove_at({}) out of range for {} card(s)", index, self.len());
            return Ok(None);
        };
        let removed = self.cards.remove(i);
        self.persist()?;
        Ok(Some(removed))
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&CardRecord> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.cards).map_err(CardzError::Serialization)?;
        self.prefs()?.put_string(KEY_CARDS, &json)?;
        log::debug!("persisted {} card(s)", self.cards.len());
        Ok(())
    }
}
