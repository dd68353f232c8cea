use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::rules::HouseRules;
use crate::state::SessionState;

/// Исход завершённой раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Push,
    Blackjack,
}

/// Расчёт раздачи: переводы между игроком и домом + сброс состояния раздачи.
///
/// Ставка к этому моменту уже списана с `funds` (при `Bet`).
/// - Win/Blackjack: игрок получает ставку назад + выплату, дом платит выплату;
/// - Loss: ставка уходит дому;
/// - Push: ставка возвращается игроку.
///
/// Единственное место, которое обнуляет ставку и руки.
/// Возвращает сумму для отображения (выплата, проигранная ставка или 0).
pub fn settle(state: &mut SessionState, outcome: Outcome, rules: &HouseRules) -> Chips {
    let bet = state.player.bet;

    let net = match outcome {
        Outcome::Win | Outcome::Blackjack => {
            let percent = if outcome == Outcome::Blackjack {
                rules.blackjack_percent
            } else {
                rules.payout_percent
            };
            let payoff = bet.percent(percent);
            state.player.funds += bet + payoff;
            state.dealer.funds -= payoff;
            payoff
        }
        Outcome::Loss => {
            state.dealer.funds += bet;
            bet
        }
        Outcome::Push => {
            state.player.funds += bet;
            Chips::ZERO
        }
    };

    state.player.hand.clear();
    state.dealer.hand.clear();
    state.player.bet = Chips::ZERO;

    net
}
