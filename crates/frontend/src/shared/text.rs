//! Utilidades de texto para formularios y previsualizaciones.

/// Devuelve el valor recortado solo si queda algo. Los campos opcionales
/// vacíos se omiten del payload en lugar de viajar como cadena vacía.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Recorta un texto largo a `max_chars` y lo marca con puntos suspensivos.
/// Solo afecta la presentación; el dato original no se toca.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("1105"), Some("1105".to_string()));
        assert_eq!(non_empty("  1105  "), Some("1105".to_string()));
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
    }

    #[test]
    fn test_truncate_preview() {
        assert_eq!(truncate_preview("corto", 30), "corto");
        assert_eq!(
            truncate_preview("CUENTAS POR COBRAR A TERCEROS NACIONALES", 30),
            "CUENTAS POR COBRAR A TERCEROS ..."
        );
        // límite exacto: no se recorta
        assert_eq!(truncate_preview("123456", 6), "123456");
    }

    #[test]
    fn test_truncate_preview_multibyte() {
        assert_eq!(truncate_preview("ñandú", 3), "ñan...");
    }
}
