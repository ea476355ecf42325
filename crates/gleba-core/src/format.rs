use crate::i18n::Locale;
use rust_decimal::prelude::*;

/// Format an area as `"X.XX ha"` with locale grouping.
///
/// Rounds the shortest decimal form of the value half away from zero, so
/// `1.005` renders as `1.01` like browser number formatting.
pub fn format_area(value: f64, locale: Locale) -> String {
    format!("{} ha", format_number(value, locale))
}

/// Report variant: missing values render as `N/A`.
pub fn format_area_report(value: Option<f64>, locale: Locale) -> String {
    match value {
        Some(v) if v.is_finite() => format_area(v, locale),
        _ => "N/A".to_string(),
    }
}

/// Inline summary variant: missing values render as `0.00 ha`.
pub fn format_area_inline(value: Option<f64>, locale: Locale) -> String {
    match value {
        Some(v) if v.is_finite() => format_area(v, locale),
        _ => format_area(0.0, locale),
    }
}

/// Expand a year for display in reports.
///
/// Two-digit years pivot at 50: `49` -> 2049, `50` -> 1950. This is a
/// different rule from the one used when aggregating deforestation years.
pub fn format_report_year(year: i32) -> i32 {
    match year {
        0..=49 => 2000 + year,
        50..=99 => 1900 + year,
        _ => year,
    }
}

/// Two fraction digits, locale separators.
pub fn format_number(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Below half a cent everything rounds to zero; this also keeps tiny
    // values within Decimal's 28-digit scale.
    if value.abs() < 0.005 {
        return format!("0{}00", locale.decimal_separator());
    }

    // `Display` gives the shortest round-trip digits, never an exponent.
    let shortest = value.to_string();
    let plain = match shortest.parse::<Decimal>() {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Past Decimal's range every f64 is integral.
        Err(_) => shortest,
    };

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    format!(
        "{sign}{}{}{frac_part:0<2}",
        group_digits(int_part, locale),
        locale.decimal_separator()
    )
}

fn group_digits(digits: &str, locale: Locale) -> String {
    if digits.len() < locale.min_grouping_digits() {
        return digits.to_string();
    }
    let separator = locale.group_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
