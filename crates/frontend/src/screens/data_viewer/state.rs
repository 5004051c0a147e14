use contracts::reports::powerbi::{BalanceReportRow, BalanceReportsPage, BalanceStats};

use crate::shared::format::{format_int_es, format_money_es, format_opt_money};
use crate::shared::text::{non_empty, truncate_preview};

/// Límite de registros por defecto de la consulta.
pub const DEFAULT_LIMIT: &str = "10";

/// Máximo de periodos mostrados como insignias en las estadísticas.
pub const MAX_PERIOD_BADGES: usize = 20;

pub const EMPTY_STATE_MESSAGE: &str =
    "No se encontraron registros con los filtros especificados.";

/// Filtros de la consulta de datos almacenados. Año y periodo son
/// opcionales; el límite siempre viaja.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilters {
    pub anio: String,
    pub periodo: String,
    pub limit: String,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            anio: String::new(),
            periodo: String::new(),
            limit: DEFAULT_LIMIT.to_string(),
        }
    }
}

/// Los filtros opcionales deben ser numéricos si vienen; el límite es
/// obligatorio y acotado igual que en el backend.
pub fn validate(filters: &QueryFilters) -> Result<(), String> {
    if let Some(anio) = non_empty(&filters.anio) {
        if anio.parse::<i32>().is_err() {
            return Err("El año debe ser un número".to_string());
        }
    }
    if let Some(periodo) = non_empty(&filters.periodo) {
        if periodo.parse::<i64>().is_err() {
            return Err("El periodo debe ser un número en formato AAAAMM".to_string());
        }
    }
    match filters.limit.trim().parse::<u32>() {
        Ok(limit) if (1..=10_000).contains(&limit) => Ok(()),
        _ => Err("El límite debe estar entre 1 y 10000".to_string()),
    }
}

/// Construye la query string de `/api/powerbi/balance-reports`. La clave
/// `año` lleva una letra no ASCII y debe viajar percent-encodificada.
pub fn build_query(filters: &QueryFilters) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(anio) = non_empty(&filters.anio) {
        params.push(("año", anio));
    }
    if let Some(periodo) = non_empty(&filters.periodo) {
        params.push(("periodo", periodo));
    }
    params.push(("limit", filters.limit.trim().to_string()));
    params
        .iter()
        .map(|(name, value)| {
            format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Fila lista para pintar: celdas ausentes en blanco, nombres largos
/// recortados a ancho de previsualización.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDisplay {
    pub id: i64,
    pub periodo: String,
    pub codigo_cuenta: String,
    pub nombre_cuenta: String,
    pub identificacion: String,
    pub nombre_tercero: String,
    pub saldo_inicial: String,
    pub movimiento: String,
    pub saldo_final: String,
    pub fecha: String,
}

/// Qué mostrar bajo los filtros: una página sin filas produce el estado
/// vacío explícito, nunca una tabla sin cuerpo.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryDisplay {
    Empty,
    Rows(Vec<RowDisplay>),
}

pub fn query_display(page: &BalanceReportsPage) -> QueryDisplay {
    if page.data.is_empty() {
        return QueryDisplay::Empty;
    }
    QueryDisplay::Rows(page.data.iter().map(row_display).collect())
}

fn row_display(row: &BalanceReportRow) -> RowDisplay {
    RowDisplay {
        id: row.id,
        periodo: row.periodo.map(|p| p.to_string()).unwrap_or_default(),
        codigo_cuenta: row
            .codigo_cuenta_contable
            .map(|c| c.to_string())
            .unwrap_or_default(),
        nombre_cuenta: truncate_preview(row.nombre_cuenta_contable.as_deref().unwrap_or(""), 30),
        identificacion: row.identificacion.clone().unwrap_or_default(),
        nombre_tercero: truncate_preview(row.nombre_tercero.as_deref().unwrap_or(""), 25),
        saldo_inicial: format_opt_money(row.saldo_inicial),
        movimiento: format_opt_money(row.movimiento),
        saldo_final: format_opt_money(row.saldo_final),
        fecha: row.fecha.clone().unwrap_or_default(),
    }
}

/// Tarjetas de estadísticas listas para pintar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsDisplay {
    pub total_records: String,
    pub total_saldo_final: String,
    pub years: String,
    pub period_count: usize,
    pub period_badges: Vec<String>,
    pub hidden_periods: usize,
}

pub fn stats_display(stats: &BalanceStats) -> StatsDisplay {
    let period_badges: Vec<String> = stats
        .periods
        .iter()
        .take(MAX_PERIOD_BADGES)
        .cloned()
        .collect();
    StatsDisplay {
        total_records: format_int_es(stats.total_records),
        total_saldo_final: format!("${}", format_money_es(stats.total_saldo_final)),
        years: stats
            .years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        period_count: stats.periods.len(),
        hidden_periods: stats.periods.len().saturating_sub(MAX_PERIOD_BADGES),
        period_badges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate(&QueryFilters::default()).is_ok());
    }

    #[test]
    fn test_validate_optional_filters_must_be_numeric() {
        let mut filters = QueryFilters::default();
        filters.anio = "dos mil".to_string();
        assert_eq!(validate(&filters).unwrap_err(), "El año debe ser un número");

        let mut filters = QueryFilters::default();
        filters.periodo = "2024-01".to_string();
        assert!(validate(&filters).is_err());
    }

    #[test]
    fn test_validate_limit_bounds() {
        let mut filters = QueryFilters::default();
        filters.limit = "0".to_string();
        assert!(validate(&filters).is_err());
        filters.limit = "10001".to_string();
        assert!(validate(&filters).is_err());
        filters.limit = "".to_string();
        assert!(validate(&filters).is_err());
        filters.limit = "10000".to_string();
        assert!(validate(&filters).is_ok());
    }

    #[test]
    fn test_build_query_omits_empty_filters() {
        let filters = QueryFilters::default();
        assert_eq!(build_query(&filters), "limit=10");
    }

    #[test]
    fn test_build_query_encodes_anio_key() {
        let filters = QueryFilters {
            anio: "2024".to_string(),
            periodo: " 202401 ".to_string(),
            limit: "100".to_string(),
        };
        assert_eq!(
            build_query(&filters),
            "a%C3%B1o=2024&periodo=202401&limit=100"
        );
    }

    #[test]
    fn test_query_display_empty_page_is_empty_state() {
        let page: BalanceReportsPage =
            serde_json::from_str(r#"{"total": 0, "data": [], "has_more": false}"#).unwrap();
        assert_eq!(query_display(&page), QueryDisplay::Empty);
    }

    #[test]
    fn test_query_display_formats_rows_without_panicking_on_gaps() {
        let page: BalanceReportsPage = serde_json::from_str(
            r#"{
                "total": 1,
                "data": [{
                    "id": 7,
                    "periodo": 202401,
                    "nombre_cuenta_contable": "CUENTAS POR COBRAR A TERCEROS NACIONALES",
                    "saldo_final": 1234.5
                }],
                "has_more": false
            }"#,
        )
        .unwrap();
        let rows = match query_display(&page) {
            QueryDisplay::Rows(rows) => rows,
            QueryDisplay::Empty => panic!("se esperaban filas"),
        };
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.periodo, "202401");
        assert_eq!(row.nombre_cuenta, "CUENTAS POR COBRAR A TERCEROS ...");
        // celdas ausentes quedan en blanco
        assert_eq!(row.saldo_inicial, "");
        assert_eq!(row.movimiento, "");
        assert_eq!(row.saldo_final, "1.234,50");
        assert_eq!(row.fecha, "");
    }

    #[test]
    fn test_stats_display_caps_period_badges() {
        let periods: Vec<String> = (1..=25).map(|i| format!("20240{:02}", i)).collect();
        let stats = BalanceStats {
            total_records: 5000,
            total_saldo_final: 123456.78,
            years: vec![2024, 2025],
            periods,
        };
        let display = stats_display(&stats);
        assert_eq!(display.total_records, "5.000");
        assert_eq!(display.total_saldo_final, "$123.456,78");
        assert_eq!(display.years, "2024, 2025");
        assert_eq!(display.period_count, 25);
        assert_eq!(display.period_badges.len(), MAX_PERIOD_BADGES);
        assert_eq!(display.hidden_periods, 5);
    }

    #[test]
    fn test_stats_display_few_periods_hides_nothing() {
        let stats = BalanceStats {
            total_records: 10,
            total_saldo_final: 0.0,
            years: vec![2024],
            periods: vec!["202401".to_string()],
        };
        let display = stats_display(&stats);
        assert_eq!(display.hidden_periods, 0);
        assert_eq!(display.period_badges.len(), 1);
    }
}
