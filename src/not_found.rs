//! The fallback handler for unknown routes.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

/// A route handler that renders the 404 page.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Render the 404 page as a response.
pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Page not found.",
            "The page you are looking for does not exist.",
        ),
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use super::get_404_not_found;

    #[tokio::test]
    async fn renders_not_found_page() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let html = Html::parse_document(&String::from_utf8_lossy(&body));
        let header = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("No h1 found");

        assert_eq!(header.text().collect::<String>().trim(), "404");
    }
}
