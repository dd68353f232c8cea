use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::actor::errors::SessionError;
use crate::actor::handle::{Envelope, SessionHandle};
use crate::engine::{apply_command, Command, RandomSource, Report};
use crate::infra::config::ServiceConfig;
use crate::state::SessionState;

/// RNG, который можно унести в задачу актёра.
pub type BoxedRng = Box<dyn RandomSource + Send>;

/// Что делать актёру после команды.
enum Control {
    Continue,
    Stop,
}

/// Актёр одной сессии.
///
/// Эксклюзивно владеет `SessionState`: берёт из очереди по одной команде,
/// выполняет её до конца, отдаёт ответ и только потом берёт следующую.
pub struct SessionActor {
    name: Arc<str>,
    state: SessionState,
    config: Arc<ServiceConfig>,
    rng: BoxedRng,
    inbox: mpsc::Receiver<Envelope>,
}

impl SessionActor {
    /// Создать актёра и хэндл к нему. Актёр ещё не запущен.
    pub fn new(
        state: SessionState,
        config: Arc<ServiceConfig>,
        rng: BoxedRng,
    ) -> (Self, SessionHandle) {
        let (sender, inbox) = mpsc::channel(config.queue_capacity.max(1));
        let name: Arc<str> = Arc::from(state.player.name.as_str());

        let actor = Self {
            name: Arc::clone(&name),
            state,
            config,
            rng,
            inbox,
        };
        (actor, SessionHandle::new(name, sender))
    }

    /// Создать актёра и сразу запустить его в tokio-задаче.
    pub fn spawn(state: SessionState, config: Arc<ServiceConfig>, rng: BoxedRng) -> SessionHandle {
        let (actor, handle) = Self::new(state, config, rng);
        tokio::spawn(actor.run());
        handle
    }

    /// Цикл актёра. Завершается, когда все хэндлы дропнуты или после
    /// фатальной ошибки / блокировки по неверному токену.
    pub async fn run(mut self) {
        info!(player = %self.name, "session worker started");

        while let Some(Envelope { command, reply }) = self.inbox.recv().await {
            let (result, control) = self.process(&command);

            if reply.send(result).is_err() {
                debug!(
                    player = %self.name,
                    command = command.name(),
                    "caller dropped before reply"
                );
            }

            if let Control::Stop = control {
                break;
            }
        }

        info!(player = %self.name, "session worker stopped");
    }

    fn process(&mut self, command: &Command) -> (Result<Report, SessionError>, Control) {
        debug!(player = %self.name, command = command.name(), "processing command");

        match apply_command(&mut self.state, &self.config.rules, &mut *self.rng, command) {
            Ok(Report::AuthFailed) => {
                warn!(
                    player = %self.name,
                    command = command.name(),
                    "privileged command with bad token"
                );
                let control = if self.config.lockout_on_auth_failure {
                    warn!(player = %self.name, "session locked out after auth failure");
                    Control::Stop
                } else {
                    Control::Continue
                };
                (Ok(Report::AuthFailed), control)
            }
            Ok(report) => (Ok(report), Control::Continue),
            Err(err) => {
                error!(
                    player = %self.name,
                    command = command.name(),
                    error = %err,
                    "invariant violated, stopping session"
                );
                (Err(SessionError::Engine(err)), Control::Stop)
            }
        }
    }
}
