//! Разобранное выражение `операнд оператор операнд` и его вычисление.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator_rs::expression::{Expression, Operator};
//! use roman_calculator_rs::token::NumeralSystem;
//!
//! let e = Expression::new(7, Operator::Div, 2, NumeralSystem::Roman);
//! assert_eq!(e.evaluate(), Ok(3));
//! assert_eq!(e.render(3).unwrap(), "III");
//! ```

use std::fmt::Display;

use thiserror::Error;

use crate::roman::{self, RomanError};
use crate::token::NumeralSystem;

/// Ошибки при вычислении выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("деление на ноль")]
    DivisionByZero,
    /// Целочисленное переполнение.
    #[error("переполнение")]
    Overflow,
}

/// Арифметические операторы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление.
    Div,
}

impl Operator {
    /// Распознаёт оператор по его записи.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Запись оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить оператор к операндам.
    ///
    /// Деление отбрасывает дробную часть (округление к нулю).
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::Overflow`] при переполнении.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Self::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
            Self::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    left.checked_div(right).ok_or(EvalError::Overflow)
                }
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Проверенное выражение из двух операндов одной системы счисления.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    /// Левый операнд.
    pub left: i64,
    /// Оператор.
    pub operator: Operator,
    /// Правый операнд.
    pub right: i64,
    /// Система счисления операндов, в ней же записывается результат.
    pub system: NumeralSystem,
}

impl Expression {
    /// Создать выражение.
    #[must_use]
    pub const fn new(left: i64, operator: Operator, right: i64, system: NumeralSystem) -> Self {
        Self {
            left,
            operator,
            right,
            system,
        }
    }

    /// Вычислить значение выражения.
    ///
    /// # Ошибки
    ///
    /// См. [`Operator::apply`].
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        self.operator.apply(self.left, self.right)
    }

    /// Записать результат в системе счисления выражения.
    ///
    /// Арабская запись не ограничена: подходят ноль и отрицательные числа.
    ///
    /// # Ошибки
    ///
    /// [`RomanError::OutOfRange`], если результат римского выражения нельзя
    /// записать римскими цифрами.
    pub fn render(&self, value: i64) -> Result<String, RomanError> {
        match self.system {
            NumeralSystem::Roman => roman::arabic_to_roman(value),
            NumeralSystem::Arabic => Ok(value.to_string()),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.left, self.operator, self.right, self.system
        )
    }
}
