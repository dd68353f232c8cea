use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::player::{Dealer, Player};
use crate::engine::rules::HouseRules;

/// Фаза сессии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Раздачи нет: можно ставить и раздавать.
    Idle,
    /// Карты сданы, ждём hit/stay.
    HandInProgress,
}

/// Состояние одной сессии (один игрок против дома).
///
/// Важное:
/// - мутирует его ровно один владелец: актёр сессии;
/// - колода создаётся лениво, при первой раздаче или resize.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub player: Player,
    pub dealer: Dealer,
    pub deck: Option<Deck>,
    /// Сколько упаковок в шузе.
    pub pack_count: u32,
}

impl SessionState {
    pub fn new(name: impl Into<String>, opening_funds: Chips, rules: &HouseRules) -> Self {
        Self {
            player: Player::new(name, opening_funds),
            dealer: Dealer::new(rules.house_funds),
            deck: None,
            pack_count: rules.default_pack_count,
        }
    }

    /// Подставить готовую колоду (конкретный порядок карт).
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn phase(&self) -> Phase {
        if self.player.hand.is_empty() {
            Phase::Idle
        } else {
            Phase::HandInProgress
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            name: self.player.name.clone(),
            phase: self.phase(),
            funds: self.player.funds,
            bet: self.player.bet,
            house_funds: self.dealer.funds,
            player_cards: self.player.hand.len(),
            dealer_cards: self.dealer.hand.len(),
            cards_remaining: self.deck.as_ref().map_or(0, Deck::len),
            pack_count: self.pack_count,
        }
    }
}

/// Снэпшот сессии только для чтения (статус, тесты, мониторинг).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub name: String,
    pub phase: Phase,
    pub funds: Chips,
    pub bet: Chips,
    pub house_funds: Chips,
    pub player_cards: usize,
    pub dealer_cards: usize,
    pub cards_remaining: usize,
    pub pack_count: u32,
}

impl SessionSnapshot {
    /// Все деньги сессии: свободные средства игрока + ставка + банк дома.
    /// Расчёт раздачи эту сумму не меняет, меняет только депозит.
    pub fn total_money(&self) -> Chips {
        self.funds + self.bet + self.house_funds
    }
}
