use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Очки блэкджека.
pub const BLACKJACK_SCORE: u32 = 21;

/// Рука одной стороны (игрока или дилера). Пустая до раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Открытая карта (первая сданная).
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn score(&self) -> u32 {
        score_hand(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK_SCORE
    }
}

impl fmt::Display for Hand {
    /// `[Td 6c]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Сумма номиналов (туз = 11) и количество тузов.
pub fn sum_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u32, u32) {
    cards.into_iter().fold((0, 0), |(sum, aces), card| {
        (sum + card.value(), aces + u32::from(card.is_ace()))
    })
}

/// Очки руки: пока сумма больше 21 и остались «мягкие» тузы,
/// один туз пересчитывается из 11 в 1.
///
/// `A T` = 21, `A A A` = 13, `A 5 6` = 22 -> 12.
///
/// Понижается столько тузов, сколько нужно, а не ровно один:
/// иначе `A A A` дало бы 23 вместо 13.
pub fn score_hand(cards: &[Card]) -> u32 {
    let (mut sum, mut soft_aces) = sum_cards(cards);
    while sum > BLACKJACK_SCORE && soft_aces > 0 {
        sum -= 10;
        soft_aces -= 1;
    }
    sum
}
