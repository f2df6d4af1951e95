use contracts::domain::a001_product::{parse_catalog, Product};
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибки загрузки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Загрузить статический каталог (`catalog.json`)
pub async fn fetch_catalog(url: &str) -> Result<Vec<Product>, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    check_status(response.ok(), response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    decode_catalog(&body)
}

/// Не-2xx ответ считается ошибкой, даже если тело похоже на каталог
pub fn check_status(ok: bool, status: u16) -> Result<(), CatalogError> {
    if ok {
        Ok(())
    } else {
        Err(CatalogError::Status(status))
    }
}

/// Разобрать тело ответа в каталог
pub fn decode_catalog(body: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(parse_catalog(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CatalogError::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(
            CatalogError::Request("connection refused".into()).to_string(),
            "Request failed: connection refused"
        );

        let parse_err = parse_catalog("not json").unwrap_err();
        let err = CatalogError::from(parse_err);
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse catalog: "));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(true, 200).is_ok());
        assert!(matches!(check_status(false, 404), Err(CatalogError::Status(404))));
        assert!(matches!(check_status(false, 500), Err(CatalogError::Status(500))));
    }

    #[test]
    fn test_decode_catalog() {
        let catalog = decode_catalog(r#"[{"name":"Shirt"},{"name":"Cap"}]"#).unwrap();
        assert_eq!(catalog.len(), 2);

        assert!(matches!(
            decode_catalog("<html>Not Found</html>"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(decode_catalog(r#"{"name":"Shirt"}"#), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_bundled_sample_catalog() {
        let catalog = decode_catalog(include_str!("../../../public/data/catalog.json")).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].name, "Shirt");
        assert_eq!(catalog[2].name, "Asics Gel-Kayano 30");
        // Картинки в репозитории не лежат: все карточки на заглушке
        assert!(catalog.iter().all(|p| p.image.is_none()));
    }
}
