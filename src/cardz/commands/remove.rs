use crate::commands::{store_index, CmdMessage, CmdResult};
use crate::error::Result;
use crate::input::format_number_preview;
use crate::prefs::Preferences;
use crate::store::CardStore;

/// Removes the card at a 1-based display index. Unknown indexes only warn.
pub fn run<P: Preferences>(
    store: &mut CardStore<P>,
    display_index: usize,
    mask: char,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove_at(store_index(display_index))? {
        Some(card) => {
            result.add_message(CmdMessage::success(format!(
                "Card removed ({}): {}",
                display_index,
                format_number_preview(&card.number, mask)
            )));
            result.affected_cards.push(card);
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No card at index {}, nothing removed",
                display_index
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::CardRecord;
    use crate::prefs::memory::MemoryPreferences;

    #[test]
    fn removes_by_display_index() {
        let prefs = MemoryPreferences::new();
        let mut store = CardStore::bound(&prefs);
        store.add_card(CardRecord::new("1", "", "", "")).unwrap();
        store.add_card(CardRecord::new("2", "", "", "")).unwrap();

        let result = run(&mut store, 2, '*').unwrap();
        assert_eq!(result.affected_cards[0].number, "2");
        assert_eq!(store.cards(), &[CardRecord::new("1", "", "", "")]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn zero_and_past_end_are_ignored() {
        let prefs = MemoryPreferences::new();
        let mut store = CardStore::bound(&prefs);
        store.add_card(CardRecord::new("1", "", "", "")).unwrap();

        for index in [0, 2, usize::MAX] {
            let result = run(&mut store, index, '*').unwrap();
            assert!(result.affected_cards.is_empty());
            assert_eq!(result.messages[0].level, MessageLevel::Warning);
        }
        assert_eq!(store.len(), 1);
    }
}
