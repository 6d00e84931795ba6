use crate::commands::{CmdMessage, CmdResult};
use crate::config::XatagConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = XatagConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            for key in ["omit-default-key", "one-line"] {
                if let Some(val) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, val)));
                }
            }
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let config = XatagConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = XatagConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn show_all_lists_every_key() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn set_then_show_round_trips() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("one-line".to_string(), "true".to_string()),
        )
        .unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("one-line".to_string())).unwrap();
        assert_eq!(result.messages[0].content, "true");
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("nope".to_string())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
