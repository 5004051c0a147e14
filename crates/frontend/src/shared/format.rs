//! Formato de números y fechas en estilo es-ES para tablas y tarjetas.

/// Formatea un monto con dos decimales, miles con punto y coma decimal.
///
/// # Ejemplos
///
/// ```
/// let formatted = frontend::shared::format::format_money_es(1234567.89);
/// assert_eq!(formatted, "1.234.567,89");
/// ```
pub fn format_money_es(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };
    format!("{},{}", group_thousands(integer_part), decimal_part)
}

/// Formatea un entero con separador de miles.
pub fn format_int_es(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Una celda numérica ausente se muestra en blanco, nunca revienta el
/// formateo.
pub fn format_opt_money(value: Option<f64>) -> String {
    match value {
        Some(v) => format_money_es(v),
        None => String::new(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut reversed = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            reversed.push('.');
        }
        reversed.push(*c);
    }
    reversed.chars().rev().collect()
}

/// Fecha ISO a presentación DD/MM/YYYY
/// Ejemplo: "2024-01-31" o "2024-01-31T00:00:00" -> "31/01/2024"
pub fn format_date_display(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}
