use crate::commands::{CmdMessage, CmdResult};
use crate::config::MdbConfig;
use crate::error::Result;

pub fn run(config: &MdbConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match MdbConfig::config_dir() {
        Some(dir) => result.add_message(CmdMessage::info(format!(
            "Config directory: {}",
            dir.display()
        ))),
        None => result.add_message(CmdMessage::warning(
            "No config directory available on this platform.",
        )),
    }
    Ok(result.with_config(config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_effective_config() {
        let config = MdbConfig {
            default_style: Some("flat".into()),
            ..Default::default()
        };
        let result = run(&config).unwrap();
        assert_eq!(result.config, Some(config));
        assert_eq!(result.messages.len(), 1);
    }
}
