use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Hand;
use crate::state::SessionSnapshot;

/// Нарушенное пользовательское условие. Состояние при этом не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Notice {
    NoBetYet,
    NoDealYet,
    HandInProgress,
    BetBelowMinimum { bet: Chips, minimum: Chips },
    BetAboveFunds { bet: Chips, funds: Chips },
    InvalidPackCount { requested: u32, max: u32 },
    /// Сумма не помещается в счётчики сессии.
    AmountTooLarge { amount: Chips },
}

/// Результат одной команды. `Display` даёт человекочитаемый текст.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Report {
    Notice(Notice),

    /// Открытая карта дилера + рука игрока.
    Showing {
        dealer_up: Card,
        hand: Hand,
        score: u32,
    },

    Blackjack { payoff: Chips, dealer_up: Card },

    Busted { loss: Chips, score: u32 },

    Win {
        payoff: Chips,
        player_score: u32,
        dealer_score: u32,
    },

    Lose {
        loss: Chips,
        player_score: u32,
        dealer_score: u32,
    },

    Push { player_score: u32, dealer_score: u32 },

    BetPlaced { bet: Chips, funds: Chips },

    Deposited { amount: Chips, funds: Chips },

    Funds { funds: Chips },

    Status(SessionSnapshot),

    Deck { cards: Vec<Card> },

    DeckResized { pack_count: u32, cards: usize },

    AuthFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoBetYet => write!(f, "You haven't placed a bet yet!"),
            Notice::NoDealYet => write!(f, "No opening deal yet!"),
            Notice::HandInProgress => write!(f, "A hand is already in progress, hit or stay first"),
            Notice::BetBelowMinimum { bet, minimum } => {
                write!(f, "Bet {bet} is under house minimum ({minimum})")
            }
            Notice::BetAboveFunds { bet, funds } => {
                write!(f, "Bet {bet} is above your available funds ({funds})")
            }
            Notice::InvalidPackCount { requested, max } => {
                write!(f, "Pack count {requested} is out of range (1..={max})")
            }
            Notice::AmountTooLarge { amount } => {
                write!(f, "Amount {amount} is too large for this table")
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Notice(n) => write!(f, "{n}"),
            Report::Showing {
                dealer_up,
                hand,
                score,
            } => write!(f, "Dealer showing: {dealer_up}\nYou have: {hand}\nSum: {score}"),
            Report::Blackjack { payoff, dealer_up } => write!(
                f,
                "Blackjack! You win {payoff} parsohns of space cash\nDealer showed: {dealer_up}"
            ),
            Report::Busted { loss, score } => {
                write!(f, "You are bust at {score}, loss of {loss} parsohns")
            }
            Report::Win {
                payoff,
                player_score,
                dealer_score,
            } => write!(
                f,
                "You win {payoff} parsohns of space cash\nYou: {player_score}\nDealer: {dealer_score}"
            ),
            Report::Lose {
                loss,
                player_score,
                dealer_score,
            } => write!(
                f,
                "You lose {loss} parsohns of space cash\nYou: {player_score}\nDealer: {dealer_score}"
            ),
            Report::Push {
                player_score,
                dealer_score,
            } => write!(f, "Push!\nYou: {player_score}\nDealer: {dealer_score}"),
            Report::BetPlaced { bet, .. } => {
                write!(f, "Your current bet: {bet} parsohns of space cash")
            }
            Report::Deposited { amount, funds } => {
                write!(f, "Deposited {amount}, balance now {funds}")
            }
            Report::Funds { funds } => {
                write!(f, "Your remaining funds: {funds} parsohns of space cash")
            }
            Report::Status(s) => write!(
                f,
                "{}: {:?}, funds {}, bet {}, house {}, {} cards left in {} pack(s)",
                s.name, s.phase, s.funds, s.bet, s.house_funds, s.cards_remaining, s.pack_count
            ),
            Report::Deck { cards } => {
                write!(f, "Current state of deck ({} cards):", cards.len())?;
                for card in cards {
                    write!(f, " {card}")?;
                }
                Ok(())
            }
            Report::DeckResized { pack_count, cards } => {
                write!(f, "New deck: {pack_count} pack(s), {cards} cards")
            }
            Report::AuthFailed => write!(f, "Incorrect auth"),
        }
    }
}
