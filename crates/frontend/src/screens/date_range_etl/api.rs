use contracts::reports::etl::{DateRangeRequest, DateRangeResult};

use crate::shared::http::{ApiClient, ApiFailure, RequestTimeout};

/// El backend recorre cada periodo del rango secuencialmente: se esperan
/// minutos, no segundos.
const ETL_TIMEOUT: RequestTimeout = RequestTimeout::Millis(600_000);

pub async fn process_date_range(
    client: &ApiClient,
    request: &DateRangeRequest,
) -> Result<DateRangeResult, ApiFailure> {
    client
        .post_json("/api/etl/process-date-range", request, ETL_TIMEOUT)
        .await
}
