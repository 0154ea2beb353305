use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RawCfg {
    pub appendlog: RawAppendlogCfg,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawAppendlogCfg {
    pub message_file: Option<PathBuf>,
    pub changelog: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config() {
        let cfg = include_str!("../demos/appendlog.toml");
        let res = toml::from_str(cfg);
        assert!(res.is_ok(), "{res:?}");
        let cfg: RawCfg = res.unwrap();

        assert_eq!(
            cfg.appendlog.message_file,
            Some("commit_message.txt".into())
        );
        assert_eq!(cfg.appendlog.changelog, Some("docs/CHANGELOG.md".into()));
    }

    #[test]
    fn dogfood_config() {
        let cfg = include_str!("../.appendlog.toml");
        let res = toml::from_str(cfg);
        assert!(res.is_ok(), "{res:?}");
        let cfg: RawCfg = res.unwrap();

        assert_eq!(cfg.appendlog.changelog, Some("CHANGELOG.md".into()));
        assert_eq!(cfg.appendlog.message_file, None);
    }
}
