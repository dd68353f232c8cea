//! Актёры сессий: по одному на игрока, каждый сериализует свои команды.
//!
//! - session.rs: цикл актёра (владеет SessionState);
//! - handle.rs: хэндл для отправки команды и ожидания ответа;
//! - registry.rs: реестр сессий по имени игрока;
//! - errors.rs: ошибки уровня сессий.

pub mod errors;
pub mod handle;
pub mod registry;
pub mod session;

pub use errors::SessionError;
pub use handle::SessionHandle;
pub use registry::{RngFactory, SessionCreated, SessionRegistry};
pub use session::{BoxedRng, SessionActor};
