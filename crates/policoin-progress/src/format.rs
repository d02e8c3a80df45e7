//! pt-BR display helpers.

/// `"criar_cards_flow"` -> `"Criar cards flow"`.
pub fn display_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whole-number style used for point amounts: `1.234.567`, `1.234,5`.
pub fn format_points(value: f64) -> String {
    format_decimal(value, 0, 3)
}

/// Two fixed decimals: `1.234,50`.
pub fn format_currency(value: f64) -> String {
    format_decimal(value, 2, 2)
}

fn format_decimal(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut fraction = frac_part.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut out = String::new();
    let is_zero = int_part.chars().chain(fraction.chars()).all(|c| c == '0');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(&fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
