//! Перевод между римскими и арабскими числами.
//!
//! Разбор римского числа не проверяет каноническую форму: `IIII` даёт 4,
//! `VV` даёт 10. Запись обратно всегда канонична.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator_rs::roman::{arabic_to_roman, roman_to_arabic};
//!
//! assert_eq!(roman_to_arabic("XIV"), Ok(14));
//! assert_eq!(arabic_to_roman(49).unwrap(), "XLIX");
//! ```

use std::ops::RangeInclusive;

use thiserror::Error;

/// Значения, которые можно записать римскими цифрами.
pub const ROMAN_RANGE: RangeInclusive<i64> = 1..=100;

/// Таблица для записи числа, по убыванию значений.
const ROMAN_TABLE: [(i64, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Ошибки перевода римских чисел.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    /// Символ, для которого нет значения.
    #[error("неправильный символ римского числа: '{0}'")]
    InvalidCharacter(char),
    /// Число нельзя записать римскими цифрами.
    #[error("число {0} нельзя записать римскими цифрами (допустимо от 1 до 100)")]
    OutOfRange(i64),
}

/// Значение одной римской цифры.
///
/// Поддерживаются только `I`, `V`, `X`, `L`, `C`.
///
/// # Ошибки
///
/// [`RomanError::InvalidCharacter`] для любого другого символа, включая `D` и `M`.
pub const fn roman_value(ch: char) -> Result<i64, RomanError> {
    match ch {
        'I' => Ok(1),
        'V' => Ok(5),
        'X' => Ok(10),
        'L' => Ok(50),
        'C' => Ok(100),
        _ => Err(RomanError::InvalidCharacter(ch)),
    }
}

/// Переводит римское число в целое.
///
/// Строка просматривается слева направо. Если следующая цифра больше
/// текущей, пара считается вычитательной (`IV`, `XC`) и добавляется их
/// разность. Верхняя граница результата не проверяется.
///
/// # Ошибки
///
/// [`RomanError::InvalidCharacter`] при встрече неподдерживаемого символа.
pub fn roman_to_arabic(input: &str) -> Result<i64, RomanError> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = 0;
    let mut i = 0;

    while i < chars.len() {
        let current = roman_value(chars[i])?;

        if let Some(&next_ch) = chars.get(i + 1) {
            let next = roman_value(next_ch)?;
            if current < next {
                result += next - current;
                i += 2;
                continue;
            }
        }

        result += current;
        i += 1;
    }

    Ok(result)
}

/// Записывает число римскими цифрами (жадно, по [`ROMAN_TABLE`]).
///
/// # Ошибки
///
/// [`RomanError::OutOfRange`], если число вне [`ROMAN_RANGE`].
pub fn arabic_to_roman(number: i64) -> Result<String, RomanError> {
    if !ROMAN_RANGE.contains(&number) {
        return Err(RomanError::OutOfRange(number));
    }

    let mut rest = number;
    let mut result = String::new();

    for (value, symbol) in ROMAN_TABLE {
        while rest >= value {
            result.push_str(symbol);
            rest -= value;
        }
    }

    Ok(result)
}
