use contracts::reports::powerbi::{BalanceReportsPage, BalanceStats};

use crate::shared::http::{ApiClient, ApiFailure, RequestTimeout};

/// Las estadísticas son una consulta corta: 10 segundos bastan.
const STATS_TIMEOUT: RequestTimeout = RequestTimeout::Millis(10_000);

pub async fn fetch_stats(client: &ApiClient) -> Result<BalanceStats, ApiFailure> {
    client.get_json("/api/powerbi/stats", STATS_TIMEOUT).await
}

/// `query` ya viene construida y percent-encodificada por la pantalla.
pub async fn fetch_balance_reports(
    client: &ApiClient,
    query: &str,
) -> Result<BalanceReportsPage, ApiFailure> {
    client
        .get_json(
            &format!("/api/powerbi/balance-reports?{}", query),
            RequestTimeout::Default,
        )
        .await
}
