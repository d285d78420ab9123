//! Formato de números para mostrar en la página

/// Separador de miles usado en la página (locale en-US)
pub const GROUP_SEPARATOR: char = ',';

/// Redondear a entero y agrupar los dígitos de tres en tres: `5000.0` -> `"5,000"`
pub fn format_grouped_integer(value: f64) -> String {
    // NaN o infinito no son un precio: se deja el campo vacío
    if !value.is_finite() {
        return String::new();
    }

    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
