use thiserror::Error;

/// Ошибки движка блэкджека.
///
/// Сюда попадают только нарушения инвариантов. Всё, что может
/// спровоцировать игрок (нет ставки, мало денег и т.п.), оформляется
/// как `Report::Notice`, а не как ошибка.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Колода пуста: взятие карты невозможно")]
    DeckExhausted,

    #[error("Недопустимое количество колод: {0}")]
    InvalidPackCount(u32),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
