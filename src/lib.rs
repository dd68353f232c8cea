//! Блэкджек-сервис: независимая сессия на каждого игрока.
//!
//! Слои:
//! - `domain`: карты, колода, руки, деньги;
//! - `engine`: правила, раздача, расчёт;
//! - `state`: состояние одной сессии;
//! - `actor`: актёр на сессию, который сериализует конкурентные команды;
//! - `api`: разбор строковых запросов и маршрутизация в сессии;
//! - `infra`: RNG, конфиг, логи.

pub mod actor;
pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;

pub use actor::{SessionError, SessionHandle, SessionRegistry};
pub use api::{handle_request, ApiError, Operation, Request};
pub use engine::{Command, HouseRules, Report};
pub use infra::ServiceConfig;
pub use state::{SessionSnapshot, SessionState};
