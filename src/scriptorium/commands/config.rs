use crate::commands::{BlogPaths, CmdMessage, CmdResult};
use crate::config::BlogConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Every action answers with the resulting config; a rejected `Set` leaves the file untouched.
pub fn run(paths: &BlogPaths, action: ConfigAction) -> Result<CmdResult> {
    let root = paths.config_dir();
    let mut config = BlogConfig::load(root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(root)?;
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            }
            Err(e) => result.add_message(CmdMessage::error(e.to_string())),
        },
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = TempDir::new().unwrap();
        let paths = BlogPaths::new(dir.path());

        run(&paths, ConfigAction::Set("home-limit".into(), "5".into())).unwrap();
        let shown = run(&paths, ConfigAction::ShowKey("home-limit".into())).unwrap();
        assert_eq!(shown.messages[0].content, "5");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().home_limit, 5);
    }

    #[test]
    fn bad_value_reports_error_without_saving() {
        let dir = TempDir::new().unwrap();
        let paths = BlogPaths::new(dir.path());

        let result = run(&paths, ConfigAction::Set("home-limit".into(), "lots".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
