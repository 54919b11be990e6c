use contracts::reference_report::{parse_dataset, DataLoadError, LoadRequest, ReportConfig, Row};
use gloo_net::http::Request;

/// Загрузить набор данных по запросу состояния отчета
pub async fn load_dataset(
    config: &ReportConfig,
    request: &LoadRequest,
) -> Result<Vec<Row>, DataLoadError> {
    let url = config.dataset_url(request.tab)?;
    fetch_rows(&url).await
}

/// Получить и разобрать статический JSON файл с массивом строк
pub async fn fetch_rows(url: &str) -> Result<Vec<Row>, DataLoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| DataLoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(DataLoadError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| DataLoadError::Request(e.to_string()))?;

    Ok(parse_dataset(&text)?)
}
