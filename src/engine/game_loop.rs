use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::BLACKJACK_SCORE;
use crate::engine::actions::Command;
use crate::engine::errors::EngineError;
use crate::engine::report::{Notice, Report};
use crate::engine::rules::{HouseRules, MAX_PACKS, MIN_DECK_SCORE};
use crate::engine::settlement::{settle, Outcome};
use crate::engine::validation::{validate_bet, BetViolation};
use crate::engine::{shuffle, RandomSource};
use crate::state::{Phase, SessionState};

/// Применить одну команду к состоянию сессии.
///
/// `Ok(Report)`: команда отработала (в том числе с отказом по условию).
/// `Err(EngineError)`: нарушен инвариант, дальше сессию вести нельзя.
pub fn apply_command(
    state: &mut SessionState,
    rules: &HouseRules,
    rng: &mut dyn RandomSource,
    command: &Command,
) -> Result<Report, EngineError> {
    match command {
        Command::Deal => deal(state, rules, rng),
        Command::Hit => hit(state, rules),
        Command::Stay => stay(state, rules),
        Command::Bet(amount) => Ok(bet(state, rules, *amount)),
        Command::Deposit(amount) => Ok(deposit(state, rules, *amount)),
        Command::Hand => hand(state),
        Command::Funds => Ok(Report::Funds {
            funds: state.player.funds,
        }),
        Command::Status => Ok(Report::Status(state.snapshot())),
        Command::ShowDeck { token } => Ok(show_deck(state, rules, token)),
        Command::ResizeDeck { pack_count, token } => {
            resize_deck(state, rules, rng, *pack_count, token)
        }
    }
}

/// Собрать шуз из `pack_count` упаковок и перемешать.
pub fn build_deck(pack_count: u32, rng: &mut dyn RandomSource) -> Result<Deck, EngineError> {
    if !HouseRules::is_valid_pack_count(pack_count) {
        return Err(EngineError::InvalidPackCount(pack_count));
    }
    let mut deck = Deck::packs(pack_count);
    shuffle(deck.cards.make_contiguous(), rng);
    Ok(deck)
}

/// Раздача: дилер, игрок, дилер, игрок.
pub fn deal(
    state: &mut SessionState,
    rules: &HouseRules,
    rng: &mut dyn RandomSource,
) -> Result<Report, EngineError> {
    if !state.player.has_bet() {
        return Ok(Report::Notice(Notice::NoBetYet));
    }
    if state.phase() == Phase::HandInProgress {
        return Ok(Report::Notice(Notice::HandInProgress));
    }

    // Перетасовка только до начала раздачи, никогда посередине.
    let needs_reload = state
        .deck
        .as_ref()
        .map_or(true, |d| d.conservative_score() < MIN_DECK_SCORE);
    if needs_reload {
        state.deck = Some(build_deck(state.pack_count, rng)?);
    }

    state.dealer.hand.clear();
    state.player.hand.clear();

    let dealer_1 = draw(state)?;
    let player_1 = draw(state)?;
    let dealer_2 = draw(state)?;
    let player_2 = draw(state)?;

    state.dealer.hand.push(dealer_1);
    state.dealer.hand.push(dealer_2);
    state.player.hand.push(player_1);
    state.player.hand.push(player_2);

    if state.player.hand.score() == BLACKJACK_SCORE {
        let payoff = settle(state, Outcome::Blackjack, rules);
        return Ok(Report::Blackjack {
            payoff,
            dealer_up: dealer_1,
        });
    }

    Ok(Report::Showing {
        dealer_up: dealer_1,
        hand: state.player.hand.clone(),
        score: state.player.hand.score(),
    })
}

/// Игрок добирает одну карту. Перебор: сразу проигрыш.
pub fn hit(state: &mut SessionState, rules: &HouseRules) -> Result<Report, EngineError> {
    if state.phase() == Phase::Idle {
        return Ok(Report::Notice(Notice::NoDealYet));
    }
    if !state.player.has_bet() {
        return Ok(Report::Notice(Notice::NoBetYet));
    }

    let card = draw(state)?;
    state.player.hand.push(card);

    let score = state.player.hand.score();
    if score > BLACKJACK_SCORE {
        let loss = settle(state, Outcome::Loss, rules);
        return Ok(Report::Busted { loss, score });
    }

    Ok(Report::Showing {
        dealer_up: dealer_up_card(state)?,
        hand: state.player.hand.clone(),
        score,
    })
}

/// Игрок останавливается: дилер добирает до `dealer_stand`, затем сравнение.
pub fn stay(state: &mut SessionState, rules: &HouseRules) -> Result<Report, EngineError> {
    if !state.player.has_bet() {
        return Ok(Report::Notice(Notice::NoBetYet));
    }
    if state.phase() == Phase::Idle {
        return Ok(Report::Notice(Notice::NoDealYet));
    }

    while state.dealer.hand.score() < rules.dealer_stand {
        let card = draw(state)?;
        state.dealer.hand.push(card);
    }

    let player_score = state.player.hand.score();
    let dealer_score = state.dealer.hand.score();

    let report = if dealer_score > BLACKJACK_SCORE || player_score > dealer_score {
        let payoff = settle(state, Outcome::Win, rules);
        Report::Win {
            payoff,
            player_score,
            dealer_score,
        }
    } else if player_score == dealer_score {
        settle(state, Outcome::Push, rules);
        Report::Push {
            player_score,
            dealer_score,
        }
    } else {
        let loss = settle(state, Outcome::Loss, rules);
        Report::Lose {
            loss,
            player_score,
            dealer_score,
        }
    };

    Ok(report)
}

/// Ставка: проверка границ, затем немедленное списание с баланса.
pub fn bet(state: &mut SessionState, rules: &HouseRules, amount: Chips) -> Report {
    if let Err(violation) = validate_bet(&state.player, amount, rules) {
        let notice = match violation {
            BetViolation::BelowMinimum { bet, minimum } => Notice::BetBelowMinimum { bet, minimum },
            BetViolation::AboveFunds { bet, funds } => Notice::BetAboveFunds { bet, funds },
        };
        return Report::Notice(notice);
    }

    // amount <= funds, так что вычитание не переполняется.
    let funds = state.player.funds - amount;
    let Some(bet) = state.player.bet.checked_add(amount) else {
        return Report::Notice(Notice::AmountTooLarge { amount });
    };
    if !fits_settlement(funds, bet, state.dealer.funds, rules) {
        return Report::Notice(Notice::AmountTooLarge { amount });
    }

    state.player.bet = bet;
    state.player.funds = funds;

    Report::BetPlaced {
        bet: state.player.bet,
        funds: state.player.funds,
    }
}

pub fn deposit(state: &mut SessionState, rules: &HouseRules, amount: Chips) -> Report {
    let Some(funds) = state.player.funds.checked_add(amount) else {
        return Report::Notice(Notice::AmountTooLarge { amount });
    };
    if !fits_settlement(funds, state.player.bet, state.dealer.funds, rules) {
        return Report::Notice(Notice::AmountTooLarge { amount });
    }

    state.player.funds = funds;
    Report::Deposited {
        amount,
        funds: state.player.funds,
    }
}

pub fn hand(state: &SessionState) -> Result<Report, EngineError> {
    if state.phase() == Phase::Idle {
        return Ok(Report::Notice(Notice::NoDealYet));
    }
    Ok(Report::Showing {
        dealer_up: dealer_up_card(state)?,
        hand: state.player.hand.clone(),
        score: state.player.hand.score(),
    })
}

pub fn show_deck(state: &SessionState, rules: &HouseRules, token: &str) -> Report {
    if !rules.check_secret(token) {
        return Report::AuthFailed;
    }
    let cards = state
        .deck
        .as_ref()
        .map(|d| d.cards.iter().copied().collect())
        .unwrap_or_default();
    Report::Deck { cards }
}

/// Пересобрать шуз на новое количество упаковок, выбросив текущие карты.
/// Только между раздачами.
pub fn resize_deck(
    state: &mut SessionState,
    rules: &HouseRules,
    rng: &mut dyn RandomSource,
    pack_count: u32,
    token: &str,
) -> Result<Report, EngineError> {
    if !rules.check_secret(token) {
        return Ok(Report::AuthFailed);
    }
    if state.phase() == Phase::HandInProgress {
        return Ok(Report::Notice(Notice::HandInProgress));
    }
    if !HouseRules::is_valid_pack_count(pack_count) {
        return Ok(Report::Notice(Notice::InvalidPackCount {
            requested: pack_count,
            max: MAX_PACKS,
        }));
    }

    let deck = build_deck(pack_count, rng)?;
    let cards = deck.len();
    state.deck = Some(deck);
    state.pack_count = pack_count;

    Ok(Report::DeckResized { pack_count, cards })
}

/// Любой исход раздачи с такими балансами помещается в `i64`:
/// игрок получает сверху не больше `bet + payoff`, дом отдаёт не больше `payoff`,
/// общая сумма денег за стол не меняется.
fn fits_settlement(funds: Chips, bet: Chips, house: Chips, rules: &HouseRules) -> bool {
    let payoff = bet.percent(rules.payout_percent.max(rules.blackjack_percent));
    let Some(stake) = funds.checked_add(bet) else {
        return false;
    };
    stake.checked_add(payoff).is_some()
        && stake.checked_add(house).is_some()
        && house.checked_sub(payoff).is_some()
}

fn draw(state: &mut SessionState) -> Result<Card, EngineError> {
    state
        .deck
        .as_mut()
        .ok_or(EngineError::Internal("колода не создана"))?
        .draw_one()
        .ok_or(EngineError::DeckExhausted)
}

fn dealer_up_card(state: &SessionState) -> Result<Card, EngineError> {
    state
        .dealer
        .hand
        .up_card()
        .copied()
        .ok_or(EngineError::Internal("у дилера нет открытой карты"))
}
