use chrono::NaiveDate;
use contracts::reports::etl::{DateRangeRequest, DateRangeResult};

use crate::shared::format::{format_date_display, format_int_es};
use crate::shared::text::non_empty;

/// Fecha de corte histórica con la que arranca el ETL.
pub const DEFAULT_FECHA_INICIO: &str = "2024-01-31";

/// Estado del formulario de procesamiento por rango de fechas.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangeForm {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub includes_tax_diff: bool,
    pub clear_existing: bool,
}

impl Default for DateRangeForm {
    fn default() -> Self {
        Self {
            fecha_inicio: DEFAULT_FECHA_INICIO.to_string(),
            fecha_fin: String::new(),
            includes_tax_diff: false,
            clear_existing: true,
        }
    }
}

fn parse_fecha(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Ambas fechas son obligatorias y el fin no puede quedar antes del inicio.
/// El atributo `min` del input es solo orientativo: la regla se verifica
/// aquí sin asumir que el navegador la hizo cumplir.
pub fn validate(form: &DateRangeForm) -> Result<(), String> {
    if form.fecha_inicio.trim().is_empty() {
        return Err("La fecha de inicio es obligatoria".to_string());
    }
    if form.fecha_fin.trim().is_empty() {
        return Err("La fecha de fin es obligatoria".to_string());
    }
    let inicio = match parse_fecha(&form.fecha_inicio) {
        Some(date) => date,
        None => return Err("La fecha de inicio no es válida".to_string()),
    };
    let fin = match parse_fecha(&form.fecha_fin) {
        Some(date) => date,
        None => return Err("La fecha de fin no es válida".to_string()),
    };
    if fin < inicio {
        return Err("La fecha de fin no puede ser anterior a la fecha de inicio".to_string());
    }
    Ok(())
}

pub fn build_payload(form: &DateRangeForm) -> DateRangeRequest {
    DateRangeRequest {
        fecha_inicio: non_empty(&form.fecha_inicio),
        fecha_fin: form.fecha_fin.trim().to_string(),
        includes_tax_diff: form.includes_tax_diff,
        clear_existing: form.clear_existing,
    }
}

/// Resumen de presentación del resultado del procesamiento.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSummary {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub total_periodos: u32,
    pub total_rows: String,
    pub success: bool,
    pub status_label: &'static str,
    pub periodos: Vec<String>,
    pub errors: Vec<String>,
}

/// Un `success: false` con errores por periodo sigue siendo un resultado:
/// se resume y se muestra, no se trata como fallo de transporte.
pub fn summarize(result: &DateRangeResult) -> ProcessSummary {
    ProcessSummary {
        fecha_inicio: format_date_display(&result.fecha_inicio),
        fecha_fin: format_date_display(&result.fecha_fin),
        total_periodos: result.total_periodos,
        total_rows: format_int_es(result.total_rows),
        success: result.success,
        status_label: if result.success {
            "✅ Éxito"
        } else {
            "⚠️ Con errores"
        },
        periodos: result.periodos_procesados.clone(),
        errors: result.errors.clone(),
    }
}
