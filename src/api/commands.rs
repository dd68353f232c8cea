use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::chips::Chips;
use crate::domain::PlayerName;
use crate::engine::rules::{HouseRules, MAX_PACKS};
use crate::engine::Command;

/// Входящий запрос в том виде, в каком его отдаёт транспорт:
/// имя операции + строковые параметры.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request {
    pub operation: String,
    pub params: HashMap<String, String>,
}

impl Request {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            params: HashMap::new(),
        }
    }

    /// Добавить параметр (builder).
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    fn get(&self, key: &'static str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    fn require(&self, key: &'static str) -> Result<&str, ApiError> {
        self.get(key).ok_or(ApiError::MissingParameter(key))
    }
}

/// Операция верхнего уровня после разбора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operation {
    /// Создать сессию (идемпотентно).
    CreateSession {
        name: PlayerName,
        opening_funds: Chips,
    },

    /// Команда для существующей сессии.
    Session { name: PlayerName, command: Command },
}

/// Разобрать запрос в типизированную операцию.
///
/// Единственное место, где строки превращаются в числа: при ошибке
/// возвращается `InvalidParameter`, значение по умолчанию не подставляется.
pub fn parse_request(request: &Request) -> Result<Operation, ApiError> {
    let name = parse_name(request.require("name")?)?;
    let op = request.operation.trim().to_ascii_lowercase().replace('_', "-");

    let command = match op.as_str() {
        "create-session" | "create-player" | "create-game" => {
            let opening_funds = match request.get("amount") {
                Some(raw) => parse_amount("amount", raw)?,
                None => Chips::ZERO,
            };
            return Ok(Operation::CreateSession {
                name,
                opening_funds,
            });
        }
        "deal" => Command::Deal,
        "hit" => Command::Hit,
        "stay" => Command::Stay,
        "bet" => Command::Bet(parse_amount("amount", request.require("amount")?)?),
        "deposit" => Command::Deposit(parse_amount("amount", request.require("amount")?)?),
        "hand" => Command::Hand,
        "funds" => Command::Funds,
        "status" => Command::Status,
        "show-deck" => Command::ShowDeck {
            token: request.require("auth")?.to_string(),
        },
        "resize-deck" => Command::ResizeDeck {
            pack_count: parse_pack_count(request.require("count")?)?,
            token: request.require("auth")?.to_string(),
        },
        _ => return Err(ApiError::UnknownOperation(request.operation.clone())),
    };

    Ok(Operation::Session { name, command })
}

fn parse_name(raw: &str) -> Result<PlayerName, ApiError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidParameter {
            name: "name",
            reason: "имя игрока не может быть пустым".into(),
        });
    }
    Ok(name.to_string())
}

/// Денежная сумма: неотрицательное десятичное число, максимум 2 знака.
pub fn parse_amount(param: &'static str, raw: &str) -> Result<Chips, ApiError> {
    raw.parse::<Chips>().map_err(|e| ApiError::InvalidParameter {
        name: param,
        reason: e.to_string(),
    })
}

/// Количество упаковок: целое в диапазоне `1..=MAX_PACKS`.
pub fn parse_pack_count(raw: &str) -> Result<u32, ApiError> {
    let count: u32 = raw.trim().parse().map_err(|_| ApiError::InvalidParameter {
        name: "count",
        reason: format!("ожидалось целое число, получено {raw:?}"),
    })?;
    if !HouseRules::is_valid_pack_count(count) {
        return Err(ApiError::InvalidParameter {
            name: "count",
            reason: format!("число упаковок должно быть в диапазоне 1..={MAX_PACKS}"),
        });
    }
    Ok(count)
}
