use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::actor::errors::SessionError;
use crate::actor::handle::SessionHandle;
use crate::actor::session::{BoxedRng, SessionActor};
use crate::domain::chips::Chips;
use crate::domain::PlayerName;
use crate::engine::{Command, Report};
use crate::infra::config::ServiceConfig;
use crate::infra::rng::{session_seed, DeterministicRng, SystemRng};
use crate::state::SessionState;

/// Фабрика RNG для новой сессии (по имени игрока).
pub type RngFactory = Arc<dyn Fn(&str) -> BoxedRng + Send + Sync>;

/// Итог создания сессии.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCreated {
    pub name: PlayerName,
    /// `false`: сессия с таким именем уже была, ничего не изменилось.
    pub created: bool,
}

impl fmt::Display for SessionCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.created {
            write!(f, "Game created, user {}", self.name)
        } else {
            write!(f, "User {} already has a game", self.name)
        }
    }
}

/// Реестр сессий:
/// - хранит хэндлы актёров по имени игрока;
/// - создание: атомарная проверка-и-вставка под одной блокировкой,
///   поэтому на одно имя никогда не поднимется два актёра;
/// - после создания реестр только читается.
pub struct SessionRegistry {
    config: Arc<ServiceConfig>,
    rng_factory: RngFactory,
    sessions: Mutex<HashMap<PlayerName, SessionHandle>>,
}

impl SessionRegistry {
    /// Реестр с системным RNG.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_rng_factory(config, Arc::new(|_: &str| Box::new(SystemRng) as BoxedRng))
    }

    /// Реестр с воспроизводимыми колодами: seed сессии = f(seed, имя).
    pub fn with_seed(config: ServiceConfig, seed: u64) -> Self {
        Self::with_rng_factory(
            config,
            Arc::new(move |name: &str| {
                Box::new(DeterministicRng::from_seed(session_seed(seed, name))) as BoxedRng
            }),
        )
    }

    pub fn with_rng_factory(config: ServiceConfig, rng_factory: RngFactory) -> Self {
        Self {
            config: Arc::new(config),
            rng_factory,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Создать сессию, если имени ещё нет в реестре. Иначе: no-op.
    pub async fn create_session(&self, name: &str, opening_funds: Chips) -> SessionCreated {
        let state = SessionState::new(name, opening_funds, &self.config.rules);
        self.create_session_from_state(state).await
    }

    /// То же, но с заранее подготовленным состоянием (например, с заданной колодой).
    pub async fn create_session_from_state(&self, state: SessionState) -> SessionCreated {
        let name = state.player.name.clone();

        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(&name) {
            return SessionCreated {
                name,
                created: false,
            };
        }

        let funds = state.player.funds;
        let rng = (self.rng_factory)(&name);
        let handle = SessionActor::spawn(state, Arc::clone(&self.config), rng);
        sessions.insert(name.clone(), handle);

        info!(player = %name, funds = %funds, "session created");

        SessionCreated {
            name,
            created: true,
        }
    }

    /// Хэндл сессии по имени.
    pub async fn get(&self, name: &str) -> Option<SessionHandle> {
        self.sessions.lock().await.get(name).cloned()
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.sessions.lock().await.contains_key(name)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Имена всех сессий, отсортированные.
    pub async fn names(&self) -> Vec<PlayerName> {
        let mut names: Vec<_> = self.sessions.lock().await.keys().cloned().collect();
        names.sort();
        names
    }

    /// Отправить команду в сессию и дождаться результата.
    ///
    /// Блокировка реестра отпускается до ожидания ответа.
    pub async fn submit(&self, name: &str, command: Command) -> Result<Report, SessionError> {
        let handle = self
            .get(name)
            .await
            .ok_or_else(|| SessionError::NotFound(name.to_string()))?;
        handle.submit(command).await
    }
}
