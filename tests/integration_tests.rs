//! Интеграционные тесты калькулятора.
//!
//! Тестируют публичный API библиотеки через `calc` и `run_with`.

use roman_calculator_rs::roman::{arabic_to_roman, roman_to_arabic};
use roman_calculator_rs::token::is_roman;
use roman_calculator_rs::{CalcError, ErrorKind, FAREWELL, PROMPT, calc, run_with};

fn kind(line: &str) -> ErrorKind {
    match calc(line) {
        Ok(result) => panic!("ожидалась ошибка для '{line}', получено '{result}'"),
        Err(e) => e.kind(),
    }
}

fn session(input: &str) -> Vec<String> {
    let mut output = Vec::new();
    run_with(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .filter(|l| *l != PROMPT)
        .map(str::to_owned)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Арабские числа
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn arabic_operations() {
    assert_eq!(calc("2 + 2").unwrap(), "4");
    assert_eq!(calc("10 + 10").unwrap(), "20");
    assert_eq!(calc("3 - 7").unwrap(), "-4");
    assert_eq!(calc("5 - 5").unwrap(), "0");
    assert_eq!(calc("10 * 10").unwrap(), "100");
    assert_eq!(calc("7 / 2").unwrap(), "3"); // целочисленное деление
    assert_eq!(calc("1 / 10").unwrap(), "0");
}

#[test]
fn arabic_all_operands_accepted() {
    for a in 1..=10 {
        for b in 1..=10 {
            assert_eq!(calc(&format!("{a} + {b}")).unwrap(), (a + b).to_string());
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Римские числа
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn roman_operations() {
    assert_eq!(calc("II + II").unwrap(), "IV");
    assert_eq!(calc("X / III").unwrap(), "III");
    assert_eq!(calc("VII - II").unwrap(), "V");
    assert_eq!(calc("IX * IX").unwrap(), "LXXXI");
    assert_eq!(calc("X * X").unwrap(), "C");
    assert_eq!(calc("X + IX").unwrap(), "XIX");
}

#[test]
fn roman_non_canonical_operands() {
    assert_eq!(calc("IIII + I").unwrap(), "V");
    assert_eq!(calc("VV / II").unwrap(), "V");
}

#[test]
fn roman_round_trip_operand_range() {
    for n in 1..=10 {
        let roman = arabic_to_roman(n).unwrap();
        assert!(is_roman(&roman));
        assert_eq!(roman_to_arabic(&roman), Ok(n));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Обработка ошибок
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn error_invalid_format() {
    assert_eq!(kind(""), ErrorKind::InvalidFormat);
    assert_eq!(kind("2"), ErrorKind::InvalidFormat);
    assert_eq!(kind("2 +"), ErrorKind::InvalidFormat);
    assert_eq!(kind("2 + 2 + 2"), ErrorKind::InvalidFormat);
    assert_eq!(kind("2  +  2"), ErrorKind::InvalidFormat);
    assert_eq!(kind(" 2 + 2"), ErrorKind::InvalidFormat);
    assert_eq!(kind("2 + 2 "), ErrorKind::InvalidFormat);
}

#[test]
fn error_mixed_systems() {
    assert_eq!(kind("2 + II"), ErrorKind::MixedNumeralSystems);
    assert_eq!(kind("II + 2"), ErrorKind::MixedNumeralSystems);
}

#[test]
fn error_malformed_number() {
    assert_eq!(kind("ii + ii"), ErrorKind::MalformedNumber);
    assert_eq!(kind("2 + 0x1"), ErrorKind::MalformedNumber);
}

#[test]
fn error_d_and_m_are_classified_but_not_converted() {
    assert_eq!(kind("D - M"), ErrorKind::InvalidRomanCharacter);
    assert_eq!(kind("I + MD"), ErrorKind::InvalidRomanCharacter);
}

#[test]
fn error_operand_out_of_range() {
    assert_eq!(kind("5 + 11"), ErrorKind::OperandOutOfRange);
    assert_eq!(kind("0 * 5"), ErrorKind::OperandOutOfRange);
    assert_eq!(kind("XI + I"), ErrorKind::OperandOutOfRange);
    assert_eq!(kind("C / X"), ErrorKind::OperandOutOfRange);
}

#[test]
fn error_unsupported_operator() {
    assert_eq!(kind("2 % 2"), ErrorKind::UnsupportedOperator);
    assert_eq!(kind("II ^ II"), ErrorKind::UnsupportedOperator);
}

#[test]
fn error_roman_result_out_of_range() {
    assert_eq!(kind("IX - X"), ErrorKind::ResultOutOfRange);
    assert_eq!(kind("V - V"), ErrorKind::ResultOutOfRange);
    assert_eq!(kind("II / III"), ErrorKind::ResultOutOfRange);
}

#[test]
fn error_messages_are_readable() {
    let err = calc("2 % 2").unwrap_err();
    assert!(matches!(err, CalcError::Parse(_)));
    assert_eq!(err.to_string(), "недопустимый оператор: '%'");

    let err = calc("IX - X").unwrap_err();
    assert!(matches!(err, CalcError::Encode(_)));
    assert!(err.to_string().contains("-1"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Интерактивный режим
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn session_exit_is_case_insensitive() {
    for command in ["exit", "EXIT", "Exit", "eXiT"] {
        let lines = session(&format!("{command}\n2 + 2\n"));
        assert_eq!(lines, vec![FAREWELL.to_owned()], "команда: '{command}'");
    }
}

#[test]
fn session_keeps_running_after_errors() {
    let lines = session("2 + 11\nX / III\n2 % 2\n3 * 3\nexit\n");
    assert_eq!(
        lines,
        vec![
            "Ошибка: числа должны быть от 1 до 10 включительно, получено 11",
            "Результат: III",
            "Ошибка: недопустимый оператор: '%'",
            "Результат: 9",
            FAREWELL,
        ]
    );
}

#[test]
fn session_handles_crlf() {
    let lines = session("1 + 1\r\nexit\r\n");
    assert_eq!(lines, vec!["Результат: 2", FAREWELL]);
}

#[test]
fn session_exit_with_spaces_is_an_expression() {
    let lines = session(" exit\n");
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Ошибка: неверный формат ввода"));
    assert_eq!(lines[1], FAREWELL);
}

#[test]
fn session_ends_on_eof() {
    assert_eq!(session(""), vec![FAREWELL]);
}
