//! Разбиение строки на токены и определение системы счисления операнда.
//!
//! # Пример
//!
//! ```
//! use roman_calculator_rs::token::{self, NumeralSystem};
//!
//! let [left, op, right] = token::split("IV * II").unwrap();
//! assert_eq!(op, "*");
//! assert_eq!(NumeralSystem::of(left), NumeralSystem::Roman);
//! assert_eq!(NumeralSystem::of(right), NumeralSystem::Roman);
//! ```

use std::fmt::Display;

use crate::parser::ParseError;

/// Символы, допустимые в римском числе.
pub const ROMAN_SYMBOLS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Система счисления, в которой записан операнд.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Римские цифры.
    Roman,
    /// Арабские (десятичные) цифры.
    Arabic,
}

impl NumeralSystem {
    /// Определяет систему счисления токена.
    ///
    /// Всё, что не является римским числом, считается арабским; ошибки
    /// разбора такого токена обнаруживаются позже.
    #[must_use]
    pub fn of(token: &str) -> Self {
        if is_roman(token) {
            Self::Roman
        } else {
            Self::Arabic
        }
    }
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roman => write!(f, "римская"),
            Self::Arabic => write!(f, "арабская"),
        }
    }
}

/// Проверяет, состоит ли токен только из римских цифр (`IVXLCDM`).
///
/// Учитывается регистр: строчные буквы не считаются римскими цифрами.
/// Пустая строка не является римским числом.
///
/// ```
/// use roman_calculator_rs::token::is_roman;
///
/// assert!(is_roman("XIV"));
/// assert!(!is_roman("xiv"));
/// assert!(!is_roman(""));
/// ```
#[must_use]
pub fn is_roman(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| ROMAN_SYMBOLS.contains(&c))
}

/// Делит строку ввода на три токена по одиночному пробелу.
///
/// Лишние, ведущие и завершающие пробелы не допускаются: они дают пустые
/// токены и меняют их количество.
///
/// # Ошибки
///
/// [`ParseError::InvalidFormat`], если токенов не ровно три.
pub fn split(line: &str) -> Result<[&str; 3], ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();

    match parts.as_slice() {
        &[left, op, right] => Ok([left, op, right]),
        _ => Err(ParseError::InvalidFormat {
            tokens: parts.len(),
        }),
    }
}
