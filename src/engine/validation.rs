use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::rules::HouseRules;

/// Почему ставка не принята.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BetViolation {
    BelowMinimum { bet: Chips, minimum: Chips },
    AboveFunds { bet: Chips, funds: Chips },
}

/// Проверка ставки: `min_bet <= amount <= funds`.
pub fn validate_bet(
    player: &Player,
    amount: Chips,
    rules: &HouseRules,
) -> Result<(), BetViolation> {
    if amount < rules.min_bet {
        return Err(BetViolation::BelowMinimum {
            bet: amount,
            minimum: rules.min_bet,
        });
    }
    if amount > player.funds {
        return Err(BetViolation::AboveFunds {
            bet: amount,
            funds: player.funds,
        });
    }
    Ok(())
}
