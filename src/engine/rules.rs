use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::BLACKJACK_SCORE;

/// Максимум колод в шузе.
pub const MAX_PACKS: u32 = 8;

/// Порог достаточности колоды: `2 × 21 + 2`.
/// Если пессимистичная оценка остатка ниже, перед раздачей колода пересобирается.
pub const MIN_DECK_SCORE: u32 = 2 * BLACKJACK_SCORE + 2;

/// Правила дома. Значения по умолчанию: классические константы стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HouseRules {
    /// Минимальная ставка.
    pub min_bet: Chips,
    /// Дилер добирает, пока у него меньше этого значения.
    pub dealer_stand: u32,
    /// Выплата за обычный выигрыш, в процентах от ставки (100 = 1:1).
    pub payout_percent: u32,
    /// Выплата за блэкджек, в процентах от ставки (150 = 3:2).
    pub blackjack_percent: u32,
    /// Сколько колод в шузе у новой сессии.
    pub default_pack_count: u32,
    /// Стартовый банк дилера каждой сессии.
    pub house_funds: Chips,
    /// Общий секрет для привилегированных команд.
    pub admin_secret: String,
}

impl Default for HouseRules {
    fn default() -> Self {
        Self {
            min_bet: Chips::whole(5),
            dealer_stand: 17,
            payout_percent: 100,
            blackjack_percent: 150,
            default_pack_count: 2,
            house_funds: Chips::whole(1_000_000),
            admin_secret: "titanoboa".to_string(),
        }
    }
}

impl HouseRules {
    pub fn is_valid_pack_count(pack_count: u32) -> bool {
        (1..=MAX_PACKS).contains(&pack_count)
    }

    pub fn check_secret(&self, token: &str) -> bool {
        self.admin_secret == token
    }
}
