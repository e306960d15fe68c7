use crate::commands::{CmdMessage, CmdResult, DisplayCard};
use crate::error::Result;
use crate::prefs::Preferences;
use crate::store::CardStore;

pub fn run<P: Preferences>(store: &CardStore<P>, mask: char) -> Result<CmdResult> {
    let listed: Vec<DisplayCard> = store
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| DisplayCard::new(i, card, mask))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No cards saved."));
    }
    Ok(result.with_listed_cards(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardRecord;
    use crate::prefs::memory::MemoryPreferences;

    #[test]
    fn lists_in_insertion_order_with_display_indexes() {
        let prefs = MemoryPreferences::new();
        let mut store = CardStore::bound(&prefs);
        store.add_card(CardRecord::new("9792", "B", "", "")).unwrap();
        store.add_card(CardRecord::new("30", "A", "", "")).unwrap();

        let result = run(&store, '*').unwrap();
        let names: Vec<_> = result
            .listed_cards
            .iter()
            .map(|dc| (dc.index, dc.record.holder_name.as_str()))
            .collect();
        assert_eq!(names, vec![(1, "B"), (2, "A")]);
        assert_eq!(result.listed_cards[0].preview.number, "9792 **** **** ****");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_message() {
        let prefs = MemoryPreferences::new();
        let store = CardStore::bound(&prefs);
        let result = run(&store, '*').unwrap();
        assert!(result.listed_cards.is_empty());
        assert_eq!(result.messages[0].content, "No cards saved.");
    }
}
