use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::actor::errors::SessionError;
use crate::engine::{Command, Report};

/// Команда в очереди вместе со своим слотом ответа.
pub(crate) struct Envelope {
    pub command: Command,
    pub reply: oneshot::Sender<Result<Report, SessionError>>,
}

/// Хэндл сессии: через него любые вызывающие отправляют команды актёру.
///
/// Клонируется свободно. Каждая команда получает свой oneshot-ответ,
/// поэтому конкурентные вызывающие не перепутают чужие результаты.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    name: Arc<str>,
    sender: mpsc::Sender<Envelope>,
}

impl SessionHandle {
    pub(crate) fn new(name: Arc<str>, sender: mpsc::Sender<Envelope>) -> Self {
        Self { name, sender }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Актёр остановлен (очередь закрыта).
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Поставить команду в очередь и дождаться её результата.
    ///
    /// Порядок выполнения: порядок попадания в очередь (FIFO).
    pub async fn submit(&self, command: Command) -> Result<Report, SessionError> {
        let (reply, response) = oneshot::channel();

        self.sender
            .send(Envelope { command, reply })
            .await
            .map_err(|_| self.closed())?;

        // Отправитель ответа дропнут без ответа: актёр умер с этой командой в очереди.
        response.await.map_err(|_| self.closed())?
    }

    fn closed(&self) -> SessionError {
        SessionError::Closed(self.name.to_string())
    }
}
