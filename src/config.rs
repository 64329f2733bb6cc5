use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: Web,
    pub repository: Repository,
}

impl Config {
    pub async fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let data = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| "cannot read config file")?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> anyhow::Result<Self> {
        toml::from_str(data).with_context(|| "invalid config toml")
    }

    /// Looks up the bearer credential named by `repository.token_env`.
    ///
    /// An empty variable counts as missing.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.repository.token_env)
            .ok()
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web {
    pub listen_address: String,
    pub route: String,
}

impl Default for Web {
    fn default() -> Self {
        Self {
            listen_address: "127.0.0.1:3000".into(),
            route: "api/get-files".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub user_agent: String,
    pub token_env: String,
}

impl Default for Repository {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".into(),
            owner: "andreensina".into(),
            repo: "dados".into(),
            path: String::new(),
            user_agent: "Media-Repository-App".into(),
            token_env: "GITHUB_TOKEN".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toml_matches_default() {
        let config = Config::parse(crate::DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file() {
        let config = Config::parse(
            r#"
            [repository]
            owner = "someone"
            path = "media/clips"
            "#,
        )
        .unwrap();

        assert_eq!(config.repository.owner, "someone");
        assert_eq!(config.repository.path, "media/clips");
        assert_eq!(config.repository.repo, "dados");
        assert_eq!(config.web, Web::default());
    }

    #[test]
    fn invalid_toml() {
        let err = Config::parse("[web\nroute = 1").unwrap_err();
        assert_eq!(err.to_string(), "invalid config toml");
    }

    #[test]
    fn empty_token_is_missing() {
        let mut config = Config::default();
        config.repository.token_env = "MEDIALIST_TEST_EMPTY_TOKEN".into();
        std::env::set_var("MEDIALIST_TEST_EMPTY_TOKEN", "");
        assert_eq!(config.token(), None);

        config.repository.token_env = "MEDIALIST_TEST_BLANK_TOKEN".into();
        std::env::set_var("MEDIALIST_TEST_BLANK_TOKEN", "  ");
        assert_eq!(config.token().as_deref(), Some("  "));

        config.repository.token_env = "MEDIALIST_TEST_SET_TOKEN".into();
        std::env::set_var("MEDIALIST_TEST_SET_TOKEN", "hunter2");
        assert_eq!(config.token().as_deref(), Some("hunter2"));

        config.repository.token_env = "MEDIALIST_TEST_UNSET_TOKEN".into();
        std::env::remove_var("MEDIALIST_TEST_UNSET_TOKEN");
        assert_eq!(config.token(), None);
    }
}
