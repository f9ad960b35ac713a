//! # roman_calculator_rs
//!
//! Консольный калькулятор для выражений вида `a + b`, где операнды записаны
//! арабскими (1–10) или римскими (I–X) цифрами.
//!
//! Поддерживает:
//! - Операции `+`, `-`, `*`, `/` (деление целочисленное)
//! - Ответ в той же системе счисления, что и операнды
//! - Римский ответ от I до C; арабский без ограничений
//!
//! # Пример использования
//!
//! ```
//! use roman_calculator_rs::calc;
//!
//! assert_eq!(calc("2 + 2").unwrap(), "4");
//! assert_eq!(calc("II + II").unwrap(), "IV");
//! ```

pub mod expression;
pub mod parser;
pub mod roman;
pub mod token;

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::roman::RomanError;

/// Приглашение, выводимое перед каждым вводом.
pub const PROMPT: &str = "Введите арифметическое выражение (например, 2 + 2):";
/// Сообщение при выходе.
pub const FAREWELL: &str = "Выход из калькулятора.";
/// Команда выхода (регистр не важен).
pub const EXIT_COMMAND: &str = "exit";

/// Общий тип ошибки калькулятора.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Ошибка разбора или проверки ввода.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Ошибка вычисления.
    #[error("{0}")]
    Eval(#[from] expression::EvalError),

    /// Результат нельзя записать в системе счисления операндов.
    #[error("{0}")]
    Encode(RomanError),
}

/// Вид ошибки без подробностей.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Не три токена.
    InvalidFormat,
    /// Операнды в разных системах счисления.
    MixedNumeralSystems,
    /// Арабский операнд не разбирается.
    MalformedNumber,
    /// Недопустимый символ римского числа.
    InvalidRomanCharacter,
    /// Операнд вне 1..=10.
    OperandOutOfRange,
    /// Неизвестный оператор.
    UnsupportedOperator,
    /// Деление на ноль.
    DivisionByZero,
    /// Римский результат вне 1..=100.
    ResultOutOfRange,
    /// Переполнение.
    Overflow,
}

impl CalcError {
    /// Возвращает вид ошибки.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        use parser::ParseError as P;

        match self {
            Self::Parse(P::InvalidFormat { .. }) => ErrorKind::InvalidFormat,
            Self::Parse(P::MixedNumeralSystems) => ErrorKind::MixedNumeralSystems,
            Self::Parse(P::MalformedNumber { .. }) => ErrorKind::MalformedNumber,
            Self::Parse(P::Roman(RomanError::InvalidCharacter(_))) => {
                ErrorKind::InvalidRomanCharacter
            }
            // Операнды не записываются римскими цифрами, поэтому здесь не возникает
            Self::Parse(P::Roman(RomanError::OutOfRange(_)) | P::OperandOutOfRange { .. }) => {
                ErrorKind::OperandOutOfRange
            }
            Self::Parse(P::UnsupportedOperator { .. }) => ErrorKind::UnsupportedOperator,
            Self::Eval(expression::EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Eval(expression::EvalError::Overflow) => ErrorKind::Overflow,
            Self::Encode(RomanError::OutOfRange(_)) => ErrorKind::ResultOutOfRange,
            Self::Encode(RomanError::InvalidCharacter(_)) => ErrorKind::InvalidRomanCharacter,
        }
    }
}

/// Вычисляет строку вида `a + b` и возвращает ответ в системе счисления
/// операндов.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках разбора, вычисления или записи
/// результата.
///
/// # Примеры
///
/// ```
/// use roman_calculator_rs::{ErrorKind, calc};
///
/// assert_eq!(calc("X / III").unwrap(), "III");
/// assert_eq!(calc("9 - 10").unwrap(), "-1");
/// assert_eq!(calc("IX - X").unwrap_err().kind(), ErrorKind::ResultOutOfRange);
/// ```
pub fn calc(line: &str) -> Result<String, CalcError> {
    let result = evaluate_line(line);

    match &result {
        Ok(value) => debug!("'{line}' = {value}"),
        Err(e) => warn!("'{line}': {e}"),
    }

    result
}

fn evaluate_line(line: &str) -> Result<String, CalcError> {
    let expr = parser::parse(line)?;
    debug!("выражение: {expr}");

    let value = expr.evaluate()?;
    expr.render(value).map_err(CalcError::Encode)
}

/// Запускает интерактивный калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock())
}

/// Цикл чтения и вычисления над произвольными потоками.
///
/// Перед каждой строкой выводится [`PROMPT`]. Ошибка вычисления выводится
/// и не прерывает сеанс; выход по [`EXIT_COMMAND`] или по концу ввода.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run_with<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    info!("калькулятор запущен");
    let mut line = String::new();

    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("конец ввода");
            break;
        }
        let expr = strip_line_ending(&line);

        if expr.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        match calc(expr) {
            Ok(result) => writeln!(output, "Результат: {result}")?,
            Err(e) => writeln!(output, "Ошибка: {e}")?,
        }
    }

    writeln!(output, "{FAREWELL}")?;
    output.flush()?;
    info!("калькулятор завершён");
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
