//! Внешний API блэкджек-сервиса.
//!
//! Здесь описываются:
//! - запросы и их разбор (commands.rs): строки от транспорта -> типизированные операции;
//! - выполнение операций через реестр сессий (dispatch.rs);
//! - ошибки (errors.rs): то, что видит клиент.

pub mod commands;
pub mod dispatch;
pub mod errors;

pub use commands::*;
pub use dispatch::*;
pub use errors::*;
