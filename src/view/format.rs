//! es-CO 숫자/통화/날짜 형식
//!
//! 천 단위 구분자는 `.`, 소수 구분자는 `,`이며 통화는 소수점 없이 `$ 1.234.567` 형태입니다.

use chrono::{Datelike, NaiveDate};

/// 값이 없을 때 표시하는 플레이스홀더
pub const PLACEHOLDER: &str = "--";

/// 통화 기호와 금액 사이의 공백 (no-break space)
const CURRENCY_SEPARATOR: char = '\u{a0}';

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// 정수부에 천 단위 구분자 삽입
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// 소수점 `max_fraction`자리까지 반올림 후 형식화 (뒤쪽 0 제거)
fn format_decimal(value: f64, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// 일반 숫자 (소수 최대 3자리)
pub fn format_number(value: f64) -> String {
    format_decimal(value, 3)
}

/// 통화 (COP, 소수 0자리). 값이 없으면 `--`
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };
    let amount = format_decimal(value, 0);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-${}{}", CURRENCY_SEPARATOR, abs),
        None => format!("${}{}", CURRENCY_SEPARATOR, amount),
    }
}

/// 면적 `85,5 m²`
pub fn format_area(value: f64) -> String {
    format!("{} m²", format_number(value))
}

/// 스페인어 긴 날짜 `18 de octubre de 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(Some(450_000_000.0)), "$\u{a0}450.000.000");
        assert_eq!(format_currency(Some(1_234.6)), "$\u{a0}1.235");
        assert_eq!(format_currency(Some(0.0)), "$\u{a0}0");
        assert_eq!(format_currency(Some(-2500.0)), "-$\u{a0}2.500");
        assert_eq!(format_currency(None), "--");
    }

    #[test]
    fn test_number() {
        assert_eq!(format_number(85.5), "85,5");
        assert_eq!(format_number(1200.0), "1.200");
        assert_eq!(format_number(1.23456), "1,235");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_area() {
        assert_eq!(format_area(72.0), "72 m²");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_long_date(date), "18 de octubre de 2026");
    }
}
