//! Доменная модель блэкджека: карты, колода, руки, деньги, игрок и дилер.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;

/// Имя игрока: ключ сессии.
pub type PlayerName = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
