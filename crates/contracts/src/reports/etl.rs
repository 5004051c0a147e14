use serde::{Deserialize, Serialize};

/// Solicitud de procesamiento ETL por rango de fechas
///
/// POST `/api/etl/process-date-range`. Las fechas viajan como `YYYY-MM-DD`.
/// `fecha_inicio` es opcional en el wire: si se omite, el backend usa su
/// fecha de corte por defecto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,

    pub fecha_fin: String,

    /// Incluir diferencia de impuestos
    pub includes_tax_diff: bool,

    /// Eliminar datos existentes antes de insertar
    pub clear_existing: bool,
}

/// Resultado del procesamiento por rango. `success: false` con `errors`
/// poblado sigue siendo una respuesta 200: el backend terminó el recorrido
/// aunque algunos periodos fallaran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeResult {
    pub fecha_inicio: String,
    pub fecha_fin: String,

    /// Cantidad de periodos recorridos
    pub total_periodos: u32,

    /// Registros insertados en total
    pub total_rows: u64,

    pub success: bool,

    /// Periodos procesados en formato `AAAAMM`
    pub periodos_procesados: Vec<String>,

    /// Errores por periodo; ausente cuando todo salió bien
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_missing_fecha_inicio() {
        let request = DateRangeRequest {
            fecha_inicio: None,
            fecha_fin: "2024-03-31".to_string(),
            includes_tax_diff: false,
            clear_existing: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(!value.as_object().unwrap().contains_key("fecha_inicio"));
        assert_eq!(value["fecha_fin"], "2024-03-31");
    }

    #[test]
    fn test_result_defaults_errors_to_empty() {
        let body = r#"{
            "fecha_inicio": "2024-01-31",
            "fecha_fin": "2024-03-31",
            "total_periodos": 3,
            "total_rows": 1500,
            "success": true,
            "periodos_procesados": ["202401", "202402", "202403"]
        }"#;
        let result: DateRangeResult = serde_json::from_str(body).unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(result.periodos_procesados.len(), 3);
        assert_eq!(result.total_rows, 1500);
    }

    #[test]
    fn test_result_with_partial_failure() {
        let body = r#"{
            "fecha_inicio": "2024-01-31",
            "fecha_fin": "2024-02-29",
            "total_periodos": 2,
            "total_rows": 900,
            "success": false,
            "periodos_procesados": ["202401"],
            "errors": ["202402: sin datos en Siigo"]
        }"#;
        let result: DateRangeResult = serde_json::from_str(body).unwrap();
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
    }
}
