use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Сколько «копеек» в одной единице валюты.
pub const CHIPS_SCALE: i64 = 100;

/// Денежная сумма в сотых долях валюты казино.
///
/// Знаковая: баланс дома (дилера) в принципе может уйти в минус,
/// его никто не ограничивает.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub i64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    /// Сумма в целых единицах (`Chips::whole(10)` == 10.00).
    pub const fn whole(units: i64) -> Self {
        Chips(units * CHIPS_SCALE)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Chips(cents)
    }

    /// `None`, если сумма не помещается в `i64`.
    pub fn checked_add(self, rhs: Chips) -> Option<Chips> {
        self.0.checked_add(rhs.0).map(Chips)
    }

    pub fn checked_sub(self, rhs: Chips) -> Option<Chips> {
        self.0.checked_sub(rhs.0).map(Chips)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Процент от суммы с округлением вниз до сотой: `bet × percent / 100`.
    pub fn percent(self, percent: u32) -> Chips {
        let scaled = i128::from(self.0) * i128::from(percent) / 100;
        Chips(scaled.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Chips {
    type Output = Chips;

    fn neg(self) -> Self::Output {
        Chips(self.0.saturating_neg())
    }
}

impl fmt::Display for Chips {
    /// Формат с двумя знаками после точки: `10.50`, `-3.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = CHIPS_SCALE as u64;
        write!(f, "{sign}{}.{:02}", abs / scale, abs % scale)
    }
}

/// Ошибка разбора денежной суммы из строки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChipsParseError {
    #[error("пустая сумма")]
    Empty,

    #[error("отрицательная сумма не допускается")]
    Negative,

    #[error("в сумме допустимы только цифры и одна точка")]
    InvalidDigit,

    #[error("не больше двух знаков после точки")]
    TooPrecise,

    #[error("сумма слишком велика")]
    Overflow,
}

/// Разбор неотрицательной десятичной суммы: "10", "10.5", "10.50".
impl FromStr for Chips {
    type Err = ChipsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ChipsParseError::Empty);
        }
        if s.starts_with('-') {
            return Err(ChipsParseError::Negative);
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ChipsParseError::InvalidDigit);
        }
        let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(ChipsParseError::InvalidDigit);
        }
        if frac_part.len() > 2 {
            return Err(ChipsParseError::TooPrecise);
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| ChipsParseError::Overflow)?
        };
        let mut cents: i64 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse().map_err(|_| ChipsParseError::InvalidDigit)?
        };
        if frac_part.len() == 1 {
            cents *= 10;
        }

        whole
            .checked_mul(CHIPS_SCALE)
            .and_then(|v| v.checked_add(cents))
            .map(Chips)
            .ok_or(ChipsParseError::Overflow)
    }
}
