use serde::{Deserialize, Serialize};

/// Solicitud del reporte de balance por terceros
///
/// POST `/api/balance-report-by-thirdparty`. El backend valida los mismos
/// rangos que el formulario (año 2000-2100, meses 1-13).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReportRequest {
    /// Año del reporte (obligatorio)
    pub year: i32,

    /// Mes de inicio, 1-13 (13 = periodo de cierre)
    pub month_start: u32,

    /// Mes de fin, 1-13
    pub month_end: u32,

    /// Código de cuenta inicial (opcional, se omite si está vacío)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_start: Option<String>,

    /// Código de cuenta final (opcional, se omite si está vacío)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_end: Option<String>,

    /// Incluir diferencia de impuestos
    pub includes_tax_diff: bool,
}

/// Respuesta del reporte. El backend adjunta campos adicionales que el
/// front no conoce de antemano; se conservan en `extra` para mostrarlos
/// como JSON crudo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceReportResponse {
    /// URL de descarga del Excel generado
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    /// ID del archivo en Siigo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_empty_account_range() {
        let request = BalanceReportRequest {
            year: 2024,
            month_start: 1,
            month_end: 12,
            account_start: None,
            account_end: None,
            includes_tax_diff: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("account_start"));
        assert!(!object.contains_key("account_end"));
        assert_eq!(object.len(), 4);
        assert_eq!(value["year"], 2024);
        assert_eq!(value["month_start"], 1);
        assert_eq!(value["month_end"], 12);
        assert_eq!(value["includes_tax_diff"], false);
    }

    #[test]
    fn test_request_includes_account_range_when_present() {
        let request = BalanceReportRequest {
            year: 2024,
            month_start: 1,
            month_end: 13,
            account_start: Some("1105".to_string()),
            account_end: Some("1199".to_string()),
            includes_tax_diff: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["account_start"], "1105");
        assert_eq!(value["account_end"], "1199");
    }

    #[test]
    fn test_response_keeps_unknown_fields() {
        let body = r#"{"file_url":"http://x/f.xlsx","file_id":"abc","pages":7}"#;
        let response: BalanceReportResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.file_url.as_deref(), Some("http://x/f.xlsx"));
        assert_eq!(response.file_id.as_deref(), Some("abc"));
        assert_eq!(response.extra["pages"], 7);
    }

    #[test]
    fn test_response_without_file_url() {
        let response: BalanceReportResponse = serde_json::from_str("{}").unwrap();
        assert!(response.file_url.is_none());
        assert!(response.file_id.is_none());
    }
}
