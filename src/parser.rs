//! Разбор и проверка строки вида `операнд оператор операнд`.
//!
//! Порядок проверок:
//! 1. ровно три токена, разделённых одиночными пробелами;
//! 2. оба операнда в одной системе счисления;
//! 3. перевод операндов в числа;
//! 4. операнды от 1 до 10 включительно;
//! 5. оператор из `+`, `-`, `*`, `/`.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator_rs::parser::parse;
//!
//! let expr = parse("VI / II").unwrap();
//! assert_eq!(expr.evaluate().unwrap(), 3);
//!
//! assert!(parse("2 + II").is_err());
//! ```

use std::ops::RangeInclusive;

use log::debug;
use thiserror::Error;

use crate::expression::{Expression, Operator};
use crate::roman::{self, RomanError};
use crate::token::{self, NumeralSystem};

/// Допустимые значения операндов.
pub const OPERAND_RANGE: RangeInclusive<i64> = 1..=10;

/// Ошибки, возникающие при разборе выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Ввод не делится на три токена.
    #[error("неверный формат ввода: ожидается 'число оператор число', получено токенов: {tokens}")]
    InvalidFormat {
        /// Фактическое количество токенов.
        tokens: usize,
    },

    /// Один операнд римский, другой арабский.
    #[error("используются одновременно разные системы счисления")]
    MixedNumeralSystems,

    /// Арабский операнд не является целым числом.
    #[error("некорректное число: '{token}'")]
    MalformedNumber {
        /// Исходный токен.
        token: String,
    },

    /// Ошибка перевода римского операнда.
    #[error("{0}")]
    Roman(#[from] RomanError),

    /// Операнд вне диапазона 1..=10.
    #[error("числа должны быть от 1 до 10 включительно, получено {value}")]
    OperandOutOfRange {
        /// Значение операнда.
        value: i64,
    },

    /// Неизвестный оператор.
    #[error("недопустимый оператор: '{token}'")]
    UnsupportedOperator {
        /// Исходный токен.
        token: String,
    },
}

/// Разбирает строку в проверенное выражение.
///
/// # Ошибки
///
/// Возвращает [`ParseError`] при первой не пройденной проверке.
pub fn parse(line: &str) -> Result<Expression, ParseError> {
    let [left, op, right] = token::split(line)?;

    let system = NumeralSystem::of(left);
    if system != NumeralSystem::of(right) {
        return Err(ParseError::MixedNumeralSystems);
    }
    debug!("система счисления: {system}");

    let left = operand(left, system)?;
    let right = operand(right, system)?;

    if let Some(&value) = [left, right].iter().find(|&&v| !OPERAND_RANGE.contains(&v)) {
        return Err(ParseError::OperandOutOfRange { value });
    }

    let operator = Operator::from_symbol(op).ok_or_else(|| ParseError::UnsupportedOperator {
        token: op.to_owned(),
    })?;

    Ok(Expression::new(left, operator, right, system))
}

fn operand(token: &str, system: NumeralSystem) -> Result<i64, ParseError> {
    match system {
        NumeralSystem::Roman => Ok(roman::roman_to_arabic(token)?),
        NumeralSystem::Arabic => token
            .parse::<i64>()
            .map_err(|_| ParseError::MalformedNumber {
                token: token.to_owned(),
            }),
    }
}
