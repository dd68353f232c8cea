use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::hand::BLACKJACK_SCORE;
use crate::engine::rules::{HouseRules, MAX_PACKS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ошибка разбора TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("некорректный конфиг: {0}")]
    Invalid(String),
}

/// Конфиг сервиса сессий.
///
/// Пример TOML (суммы в сотых долях):
///
/// ```toml
/// queue_capacity = 1
/// lockout_on_auth_failure = false
///
/// [rules]
/// min_bet = 500
/// default_pack_count = 2
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    pub rules: HouseRules,
    /// Ёмкость очереди команд одной сессии (>= 1).
    pub queue_capacity: usize,
    /// Останавливать актёр сессии после неверного токена
    /// (иначе отклоняется только сам вызов).
    pub lockout_on_auth_failure: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rules: HouseRules::default(),
            queue_capacity: 1,
            lockout_on_auth_failure: false,
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ServiceConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::Invalid("queue_capacity должен быть >= 1".into()));
        }
        if !HouseRules::is_valid_pack_count(self.rules.default_pack_count) {
            return Err(ConfigError::Invalid(format!(
                "default_pack_count должен быть в диапазоне 1..={MAX_PACKS}"
            )));
        }
        if self.rules.dealer_stand > BLACKJACK_SCORE {
            return Err(ConfigError::Invalid(format!(
                "dealer_stand не может превышать {BLACKJACK_SCORE}"
            )));
        }
        if !self.rules.min_bet.is_positive() {
            return Err(ConfigError::Invalid("min_bet должен быть больше нуля".into()));
        }
        if self.rules.admin_secret.is_empty() {
            return Err(ConfigError::Invalid("admin_secret не может быть пустым".into()));
        }
        Ok(())
    }
}
