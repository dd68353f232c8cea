use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::sum_cards;

/// Размер одной стандартной колоды.
pub const BASE_DECK_LEN: usize = 52;

/// Колода (шуз) из одной или нескольких упаковок.
/// Голова очереди: следующая карта для раздачи.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: VecDeque<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = VecDeque::with_capacity(BASE_DECK_LEN);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// `pack_count` копий шаблона подряд, без перемешивания.
    pub fn packs(pack_count: u32) -> Self {
        let template = Self::standard_52();
        let mut cards = VecDeque::with_capacity(BASE_DECK_LEN * pack_count as usize);
        for _ in 0..pack_count {
            cards.extend(template.cards.iter().copied());
        }
        Deck { cards }
    }

    /// Колода в заданном порядке (первая карта раздаётся первой).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Deck {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Следующая карта без снятия.
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Снять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Пессимистичная оценка остатка: все тузы считаются за 1.
    /// Используется только для решения о перетасовке.
    pub fn conservative_score(&self) -> u32 {
        let (sum, aces) = sum_cards(self.cards.iter());
        sum - aces * 10
    }
}
