use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use trivia_core as trivia;

pub(crate) const DEFAULT_API_URL: &str = "https://jservice.io/api/";

/// Quiz service reached over HTTP with the browser's fetch.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpQuizSource {
    base_url: String,
}

impl HttpQuizSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    fn categories_url(&self, count: usize) -> String {
        format!("{}categories?count={}", self.base_url, count)
    }

    fn category_url(&self, id: trivia::CategoryId) -> String {
        format!("{}category?id={}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(url: &str) -> trivia::Result<T> {
        log::debug!("GET {}", url);
        let response = Request::get(url).send().await.map_err(network_error)?;
        check_status(&response)?;
        response.json::<T>().await.map_err(network_error)
    }
}

impl trivia::QuizSource for HttpQuizSource {
    async fn list_categories(&self, count: usize) -> trivia::Result<Vec<trivia::CategorySummary>> {
        Self::get_json(&self.categories_url(count)).await
    }

    async fn category(&self, id: trivia::CategoryId) -> trivia::Result<trivia::CategoryDetail> {
        Self::get_json(&self.category_url(id)).await
    }
}

fn network_error(err: gloo::net::Error) -> trivia::TriviaError {
    trivia::TriviaError::Network(err.to_string())
}

fn check_status(response: &Response) -> trivia::Result<()> {
    if response.ok() {
        Ok(())
    } else {
        log::debug!("Quiz service answered {}", response.status());
        Err(trivia::TriviaError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_match_service_endpoints() {
        let source = HttpQuizSource::new(DEFAULT_API_URL);

        assert_eq!(
            source.categories_url(trivia::CATEGORY_POOL_SIZE),
            "https://jservice.io/api/categories?count=100"
        );
        assert_eq!(
            source.category_url(11531),
            "https://jservice.io/api/category?id=11531"
        );
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let source = HttpQuizSource::new("http://localhost:3000/api");

        assert_eq!(source.category_url(1), "http://localhost:3000/api/category?id=1");
    }
}
