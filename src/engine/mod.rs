//! Движок блэкджека: правила дома, перетасовка, раздача, расчёт.
//!
//! Высокоуровневая точка входа: `apply_command`
//! Основные операции:
//!   - `deal` / `hit` / `stay` – ход раздачи
//!   - `bet` / `deposit` – деньги игрока
//!   - `settle` – единственное место, где раздача закрывается

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod report;
pub mod rules;
pub mod settlement;
pub mod validation;

pub use actions::Command;
pub use errors::EngineError;
pub use game_loop::{apply_command, build_deck};
pub use report::{Notice, Report};
pub use rules::{HouseRules, MAX_PACKS, MIN_DECK_SCORE};
pub use settlement::{settle, Outcome};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайный индекс из `0..=upper`.
    fn index_inclusive(&mut self, upper: usize) -> usize;
}

/// Тасование Фишера–Йетса (Дурстенфельд): от последнего индекса к 1,
/// каждый элемент меняется местами со случайным из ещё не перемешанного
/// префикса `0..=i`.
pub fn shuffle<T, R: RandomSource + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.index_inclusive(i);
        slice.swap(i, j);
    }
}
