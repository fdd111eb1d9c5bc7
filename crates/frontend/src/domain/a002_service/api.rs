use contracts::domain::a002_service::CatalogDocument;
use contracts::usecases::u501_load_catalog::CatalogError;
use gloo_net::http::Request;

/// Fetch the JSON catalog of a category.
///
/// A non-OK status is an error just like a network failure; the body is
/// parsed only after a successful response.
pub async fn fetch_catalog(path: &str) -> Result<CatalogDocument, CatalogError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    Ok(serde_json::from_str(&body)?)
}
