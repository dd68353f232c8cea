use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки уровня сессий (над движком одной сессии).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Сессии с таким именем нет в реестре.
    #[error("Сессия игрока {0} не найдена")]
    NotFound(String),

    /// Актёр сессии остановлен, команды больше не принимаются.
    #[error("Сессия игрока {0} закрыта")]
    Closed(String),

    /// Нарушение инварианта в движке; после него актёр останавливается.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
