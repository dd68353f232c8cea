use thiserror::Error;

use crate::actor::SessionError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Неизвестное имя операции.
    #[error("неизвестная операция: {0}")]
    UnknownOperation(String),

    /// Обязательный параметр не передан.
    #[error("не передан параметр: {0}")]
    MissingParameter(&'static str),

    /// Параметр передан, но не проходит разбор или проверку диапазона.
    #[error("некорректный параметр {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Ошибка уровня сессии (нет такой, закрыта, инвариант).
    #[error(transparent)]
    Session(#[from] SessionError),
}
