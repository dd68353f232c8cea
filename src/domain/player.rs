use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Hand;

/// Игрок: имя: ключ сессии, стабильная идентичность.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
    /// Свободные средства (ставка уже списана отсюда).
    pub funds: Chips,
    /// Текущая ставка, 0: ставки нет.
    pub bet: Chips,
}

impl Player {
    pub fn new(name: impl Into<String>, funds: Chips) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            funds,
            bet: Chips::ZERO,
        }
    }

    pub fn has_bet(&self) -> bool {
        self.bet.is_positive()
    }
}

/// Дилер: сторона банка казино. Баланс не ограничивается снизу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dealer {
    pub hand: Hand,
    pub funds: Chips,
}

impl Dealer {
    pub fn new(funds: Chips) -> Self {
        Self {
            hand: Hand::new(),
            funds,
        }
    }
}
