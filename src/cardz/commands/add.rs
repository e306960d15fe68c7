use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::CardForm;
use crate::prefs::Preferences;
use crate::store::CardStore;

/// Saves a snapshot of the form. With `dry_run` only the preview is produced.
pub fn run<P: Preferences>(
    store: &mut CardStore<P>,
    form: &CardForm,
    mask: char,
    dry_run: bool,
) -> Result<CmdResult> {
    let preview = form.preview(mask);
    let mut result = CmdResult::default().with_previews(vec![preview.clone()]);

    if form.is_empty() {
        result.add_message(CmdMessage::warning("Saving a card with no details"));
    }

    if dry_run {
        result.add_message(CmdMessage::info("Dry run: card not saved"));
        return Ok(result);
    }

    let record = form.snapshot();
    store.add_card(record.clone())?;
    result.add_message(CmdMessage::success(format!(
        "Card saved ({}): {}",
        store.len(),
        preview.number
    )));
    Ok(result.with_affected_cards(vec![record]))
}
