use serde::{Deserialize, Serialize};

/// Estadísticas agregadas de los datos almacenados
///
/// GET `/api/powerbi/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceStats {
    pub total_records: u64,
    pub total_saldo_final: f64,
    pub years: Vec<i32>,

    /// Periodos disponibles, `AAAAMM`
    pub periods: Vec<String>,
}

/// Una fila del balance almacenado. Solo `id` está garantizado; todo lo
/// demás puede venir ausente o en `null` según lo que devolvió Siigo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceReportRow {
    pub id: i64,

    #[serde(default)]
    pub periodo: Option<i64>,
    #[serde(default)]
    pub codigo_cuenta_contable: Option<i64>,
    #[serde(default)]
    pub nombre_cuenta_contable: Option<String>,
    #[serde(default)]
    pub cod_relacional: Option<String>,
    #[serde(default)]
    pub identificacion: Option<String>,
    #[serde(default)]
    pub sucursal: Option<String>,
    #[serde(default)]
    pub nombre_tercero: Option<String>,
    #[serde(default)]
    pub saldo_inicial: Option<f64>,
    #[serde(default)]
    pub movimiento_debito: Option<f64>,
    #[serde(default)]
    pub movimiento_credito: Option<f64>,
    #[serde(default)]
    pub movimiento: Option<f64>,
    #[serde(default)]
    pub saldo_final: Option<f64>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default, rename = "año")]
    pub anio: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Página de resultados de la consulta almacenada
///
/// GET `/api/powerbi/balance-reports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReportsPage {
    pub total: u64,
    pub data: Vec<BalanceReportRow>,
    pub has_more: bool,

    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}
