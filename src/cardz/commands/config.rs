use crate::commands::{CardzPaths, CmdMessage, CmdResult};
use crate::config::CardzConfig;
use crate::error::Result;

pub const MASK_CHAR_KEY: &str = "mask-char";

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetMaskChar(String),
}

pub fn run(paths: &CardzPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CardzConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if key != MASK_CHAR_KEY {
                result.add_message(CmdMessage::warning(format!(
                    "Unknown config key: {}",
                    key
                )));
                return Ok(result);
            }
        }
        ConfigAction::SetMaskChar(value) => {
            config.set_mask_char(&value)?;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                MASK_CHAR_KEY, config.mask_char
            )));
        }
    }

    Ok(result.with_config(config))
}
