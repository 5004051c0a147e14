use chrono::Datelike;
use contracts::reports::balance::{BalanceReportRequest, BalanceReportResponse};

use crate::shared::text::non_empty;

/// Estado del formulario del reporte de balance por terceros. Vive mientras
/// la pantalla esté montada; solo lo mutan los manejadores de entrada.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReportForm {
    pub year: i32,
    pub month_start: u32,
    pub month_end: u32,
    pub account_start: String,
    pub account_end: String,
    pub includes_tax_diff: bool,
}

impl Default for BalanceReportForm {
    fn default() -> Self {
        Self {
            year: chrono::Utc::now().year(),
            month_start: 1,
            month_end: 12,
            account_start: String::new(),
            account_end: String::new(),
            includes_tax_diff: false,
        }
    }
}

/// Valida el formulario antes de enviar. Se detiene en la primera regla
/// violada; un error aquí aborta el envío sin tocar la red.
pub fn validate(form: &BalanceReportForm) -> Result<(), String> {
    if form.year < 2000 || form.year > 2100 {
        return Err("El año debe estar entre 2000 y 2100".to_string());
    }
    // 13 = periodo de cierre contable
    if form.month_start < 1 || form.month_start > 13 {
        return Err("El mes de inicio debe estar entre 1 y 13".to_string());
    }
    if form.month_end < 1 || form.month_end > 13 {
        return Err("El mes de fin debe estar entre 1 y 13".to_string());
    }
    if form.month_start > form.month_end {
        return Err("El mes de inicio no puede ser mayor al mes de fin".to_string());
    }
    // account_start y account_end son opcionales según la API de Siigo
    Ok(())
}

/// Construye el payload del backend. Los códigos de cuenta viajan solo si
/// queda algo tras recortar espacios.
pub fn build_payload(form: &BalanceReportForm) -> BalanceReportRequest {
    BalanceReportRequest {
        year: form.year,
        month_start: form.month_start,
        month_end: form.month_end,
        account_start: non_empty(&form.account_start),
        account_end: non_empty(&form.account_end),
        includes_tax_diff: form.includes_tax_diff,
    }
}

/// Modelo de presentación del resultado del reporte.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDisplay {
    pub download: Option<ReportDownload>,
    pub raw_json: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDownload {
    pub file_url: String,
    pub file_id: Option<String>,
}

/// Sin `file_url` no hay botón de descarga; la respuesta completa siempre
/// queda disponible como JSON legible.
pub fn report_display(response: &BalanceReportResponse) -> ReportDisplay {
    let download = response.file_url.as_ref().map(|url| ReportDownload {
        file_url: url.clone(),
        file_id: response.file_id.clone(),
    });
    let raw_json =
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string());
    ReportDisplay { download, raw_json }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_form() -> BalanceReportForm {
        BalanceReportForm {
            year: 2024,
            month_start: 1,
            month_end: 12,
            account_start: String::new(),
            account_end: String::new(),
            includes_tax_diff: false,
        }
    }

    #[test]
    fn test_validate_accepts_valid_form() {
        assert!(validate(&valid_form()).is_ok());
    }

    #[test]
    fn test_validate_year_bounds() {
        let mut form = valid_form();
        form.year = 1999;
        assert_eq!(
            validate(&form).unwrap_err(),
            "El año debe estar entre 2000 y 2100"
        );
        form.year = 2101;
        assert!(validate(&form).is_err());
        form.year = 2000;
        assert!(validate(&form).is_ok());
        form.year = 2100;
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_validate_month_bounds_allow_closing_period() {
        let mut form = valid_form();
        form.month_start = 0;
        assert!(validate(&form).is_err());
        form.month_start = 13;
        form.month_end = 13;
        assert!(validate(&form).is_ok());
        form.month_end = 14;
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_month_range() {
        let mut form = valid_form();
        form.month_start = 6;
        form.month_end = 3;
        assert_eq!(
            validate(&form).unwrap_err(),
            "El mes de inicio no puede ser mayor al mes de fin"
        );
    }

    #[test]
    fn test_validate_stops_at_first_violation() {
        let mut form = valid_form();
        form.year = 0;
        form.month_start = 99;
        // gana la primera regla, no se agregan violaciones
        assert_eq!(
            validate(&form).unwrap_err(),
            "El año debe estar entre 2000 y 2100"
        );
    }

    #[test]
    fn test_payload_omits_blank_accounts() {
        let mut form = valid_form();
        form.account_start = "   ".to_string();
        let payload = build_payload(&form);
        assert!(payload.account_start.is_none());
        assert!(payload.account_end.is_none());

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "year": 2024,
                "month_start": 1,
                "month_end": 12,
                "includes_tax_diff": false
            })
        );
    }

    #[test]
    fn test_payload_trims_accounts() {
        let mut form = valid_form();
        form.account_start = " 1105 ".to_string();
        form.account_end = "1199".to_string();
        let payload = build_payload(&form);
        assert_eq!(payload.account_start.as_deref(), Some("1105"));
        assert_eq!(payload.account_end.as_deref(), Some("1199"));
    }

    #[test]
    fn test_payload_builder_is_idempotent() {
        let form = valid_form();
        assert_eq!(build_payload(&form), build_payload(&form));
    }

    #[test]
    fn test_display_without_file_url_has_no_download() {
        let response: BalanceReportResponse = serde_json::from_str("{}").unwrap();
        let display = report_display(&response);
        assert!(display.download.is_none());
        assert_eq!(display.raw_json, "{}");
    }

    #[test]
    fn test_display_with_file_url() {
        let response: BalanceReportResponse = serde_json::from_str(
            r#"{"file_url": "http://x/reporte.xlsx", "file_id": "f-77"}"#,
        )
        .unwrap();
        let display = report_display(&response);
        let download = display.download.unwrap();
        assert_eq!(download.file_url, "http://x/reporte.xlsx");
        assert_eq!(download.file_id.as_deref(), Some("f-77"));
        assert!(display.raw_json.contains("file_url"));
    }
}
