//! Formatting helpers shared by the page models.

use personalistar_core::Price;
use rust_decimal::{Decimal, RoundingStrategy};

/// Returns the current year.
#[must_use]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

/// Two decimal places with a comma separator: `25,50`.
///
/// No thousands grouping, matching how prices were always shown on the site.
#[must_use]
pub fn decimal_brl(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string().replace('.', ",")
}

/// Price as shown on a product detail page: `R$ 25,50`.
#[must_use]
pub fn format_brl(price: Price) -> String {
    format!("R$ {}", decimal_brl(price.amount()))
}

/// Price as shown on a product card: `R$25,50`.
///
/// `None` renders as `R$0,00`.
#[must_use]
pub fn format_brl_compact(price: Option<Price>) -> String {
    let amount = price.map_or(Decimal::ZERO, |p| p.amount());
    format!("R${}", decimal_brl(amount))
}

/// Strip everything but ASCII digits: `(11) 98888-7777` becomes `11988887777`.
#[must_use]
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `wa.me` chat link, or `None` when the phone has no digits.
#[must_use]
pub fn whatsapp_link(country_code: &str, phone: &str) -> Option<String> {
    let digits = digits_only(phone);
    if digits.is_empty() {
        None
    } else {
        Some(format!("https://wa.me/{country_code}{digits}"))
    }
}

/// `tel:` link for a phone number as typed.
#[must_use]
pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

/// Instagram profile link and `@handle` label.
///
/// A leading `@` typed by the admin is tolerated.
#[must_use]
pub fn instagram(user: &str) -> (String, String) {
    let user = user.trim().trim_start_matches('@');
    (format!("https://instagram.com/{user}"), format!("@{user}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(Price::from_cents(2550).unwrap()), "R$ 25,50");
        assert_eq!(format_brl(Price::from_cents(8000).unwrap()), "R$ 80,00");
        assert_eq!(format_brl(Price::from_cents(123_456).unwrap()), "R$ 1234,56");
    }

    #[test]
    fn test_format_brl_rounds_extra_places() {
        let price = Price::parse_form("9.995").unwrap();
        assert_eq!(format_brl(price), "R$ 10,00");
        let price = Price::parse_form("12").unwrap();
        assert_eq!(format_brl(price), "R$ 12,00");
    }

    #[test]
    fn test_compact_format() {
        assert_eq!(
            format_brl_compact(Some(Price::from_cents(2550).unwrap())),
            "R$25,50"
        );
        assert_eq!(format_brl_compact(None), "R$0,00");
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(
            whatsapp_link("55", "(11) 98888-7777").as_deref(),
            Some("https://wa.me/5511988887777")
        );
        assert_eq!(whatsapp_link("55", " - "), None);
        assert_eq!(whatsapp_link("55", ""), None);
    }

    #[test]
    fn test_instagram_strips_at() {
        let (href, handle) = instagram("@graficapersonalistar");
        assert_eq!(href, "https://instagram.com/graficapersonalistar");
        assert_eq!(handle, "@graficapersonalistar");
    }

    #[test]
    fn test_tel_link() {
        assert_eq!(tel_link("(11) 3333-4444"), "tel:(11) 3333-4444");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
