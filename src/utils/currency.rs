//! Normalización de importes
//!
//! Los importes llegan como strings de presentación (`"₹350"`, `"Rs. 1,200"`,
//! `"â‚¹420"`). Este módulo es el único punto donde se convierten a número.
//!
//! Símbolos aceptados: `₹`, `Rs`, `INR`, `$`, `€`, `£`, `¥` y la variante
//! mal codificada `â‚¹` (UTF-8 de `₹` leído como Windows-1252). La coma se
//! trata siempre como separador de miles.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const CURRENCY_SYMBOLS: &[&str] = &["â‚¹", "₹", "INR", "Rs.", "Rs", "$", "€", "£", "¥"];

lazy_static! {
    static ref LEADING_NUMBER: Regex = Regex::new(r"-?\d+(?:\.\d+)?").unwrap();
}

/// Quitar símbolos de moneda, separadores de miles y espacios
pub fn strip_currency(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for symbol in CURRENCY_SYMBOLS {
        cleaned = cleaned.replace(symbol, "");
    }
    cleaned.replace(',', "").trim().to_string()
}

/// Primer número que aparezca en el texto (`"15.5 kWh"` -> 15.5)
pub fn parse_leading_number(raw: &str) -> Option<Decimal> {
    let cleaned = raw.replace(',', "");
    LEADING_NUMBER
        .find(&cleaned)
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
}

/// Importe numérico de un string de coste; importes ilegibles cuentan como 0
pub fn parse_cost(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };

    match parse_leading_number(&strip_currency(raw)) {
        Some(value) => value,
        None => {
            if !raw.trim().is_empty() {
                log::warn!("⚠️ Importe ilegible, se cuenta como 0: '{}'", raw);
            }
            Decimal::ZERO
        }
    }
}

/// Energía en kWh; valores ausentes o ilegibles cuentan como 0
pub fn parse_energy(raw: Option<&str>) -> Decimal {
    raw.and_then(parse_leading_number).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_parse_cost_symbols() {
        assert_eq!(parse_cost(Some("₹350")), dec("350"));
        assert_eq!(parse_cost(Some("â‚¹420")), dec("420"));
        assert_eq!(parse_cost(Some("Rs. 1,200")), dec("1200"));
        assert_eq!(parse_cost(Some("INR 99.50")), dec("99.50"));
        assert_eq!(parse_cost(Some("$12.25")), dec("12.25"));
        assert_eq!(parse_cost(Some("€8")), dec("8"));
    }

    #[test]
    fn test_parse_cost_missing_or_garbage() {
        assert_eq!(parse_cost(None), Decimal::ZERO);
        assert_eq!(parse_cost(Some("")), Decimal::ZERO);
        assert_eq!(parse_cost(Some("free")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_cost_per_unit_price() {
        assert_eq!(parse_cost(Some("₹15/kWh")), dec("15"));
    }

    #[test]
    fn test_parse_energy() {
        assert_eq!(parse_energy(Some("10.0")), dec("10.0"));
        assert_eq!(parse_energy(Some("5.5 kWh")), dec("5.5"));
        assert_eq!(parse_energy(Some("n/a")), Decimal::ZERO);
        assert_eq!(parse_energy(None), Decimal::ZERO);
    }

    #[test]
    fn test_strip_currency() {
        assert_eq!(strip_currency(" ₹1,250 "), "1250");
        assert_eq!(strip_currency("â‚¹75"), "75");
    }
}
