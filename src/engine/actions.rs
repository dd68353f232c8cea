use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Команда для одной сессии: тег действия + уже типизированный параметр.
///
/// Неизменяема после создания. Строковые параметры разбираются
/// на границе (`api::commands`), сюда приходят только проверенные значения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    Deal,
    Hit,
    Stay,
    Bet(Chips),
    Deposit(Chips),
    /// Текущая рука и очки (только чтение).
    Hand,
    /// Баланс игрока (только чтение).
    Funds,
    /// Снимок состояния сессии (только чтение).
    Status,
    /// Показать колоду. Привилегированная.
    ShowDeck { token: String },
    /// Пересобрать колоду на `pack_count` упаковок. Привилегированная.
    ResizeDeck { pack_count: u32, token: String },
}

impl Command {
    /// Короткое имя для логов.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deal => "deal",
            Command::Hit => "hit",
            Command::Stay => "stay",
            Command::Bet(_) => "bet",
            Command::Deposit(_) => "deposit",
            Command::Hand => "hand",
            Command::Funds => "funds",
            Command::Status => "status",
            Command::ShowDeck { .. } => "show-deck",
            Command::ResizeDeck { .. } => "resize-deck",
        }
    }
}
