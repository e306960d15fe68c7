use crate::carousel::Carousel;
use crate::commands::{CmdMessage, CmdResult, DisplayCard};
use crate::error::Result;
use crate::prefs::Preferences;
use crate::store::CardStore;

/// Lists every card with the one at `display_index` focused, the way the
/// saved-cards carousel shows it.
pub fn run<P: Preferences>(
    store: &CardStore<P>,
    display_index: usize,
    mask: char,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let len = store.len();
    let mut carousel = Carousel::new();

    if len == 0 {
        result.add_message(CmdMessage::info("No cards saved."));
        return Ok(result);
    }

    let focused = display_index
        .checked_sub(1)
        .is_some_and(|i| carousel.select(i, len));
    if !focused {
        result.add_message(CmdMessage::warning(format!(
            "No card at index {}, showing card {}",
            display_index,
            carousel.selected() + 1
        )));
    }

    if let Some(card) = store.get(carousel.selected()) {
        log::debug!("focused card {} ({})", carousel.selected() + 1, card.brand());
    }

    let dots = carousel.indicators(len);
    let listed = store
        .cards()
        .iter()
        .enumerate()
        .zip(dots)
        .map(|((i, card), selected)| DisplayCard {
            selected,
            ..DisplayCard::new(i, card, mask)
        })
        .collect();

    Ok(result.with_listed_cards(listed))
}
