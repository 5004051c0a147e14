use contracts::reports::balance::{BalanceReportRequest, BalanceReportResponse};

use crate::shared::http::{ApiClient, ApiFailure, RequestTimeout};

/// Pide el reporte de balance por terceros. Llamada de un solo periodo:
/// basta el timeout por defecto del navegador.
pub async fn request_report(
    client: &ApiClient,
    request: &BalanceReportRequest,
) -> Result<BalanceReportResponse, ApiFailure> {
    client
        .post_json(
            "/api/balance-report-by-thirdparty",
            request,
            RequestTimeout::Default,
        )
        .await
}
