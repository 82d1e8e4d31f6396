//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    viewer::{get_viewer_page, load_more_endpoint, select_employee_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_viewer_page))
        .route(endpoints::EMPLOYEE_FILTER, post(select_employee_endpoint))
        .route(endpoints::LOAD_MORE, post(load_more_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, endpoints,
        source::{MockTransactionSource, PageConfig},
    };

    use super::build_router;

    fn test_server() -> TestServer {
        let state = AppState::new(MockTransactionSource::with_seed_data(PageConfig {
            page_size: 5,
        }));

        TestServer::new(build_router(state))
    }

    fn hx_request_header() -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static("hx-request"),
            HeaderValue::from_static("true"),
        )
    }

    fn count_rows(html: &Html) -> usize {
        html.select(&Selector::parse("tr[data-transaction-row='true']").unwrap())
            .count()
    }

    fn has_view_more(html: &Html) -> bool {
        html.select(&Selector::parse("button[data-view-more='true']").unwrap())
            .next()
            .is_some()
    }

    #[tokio::test]
    async fn filtering_and_paging_through_the_viewer() {
        let server = test_server();
        let (header_name, header_value) = hx_request_header();

        // First visit: employees and the first page load together.
        let page = server.get(endpoints::ROOT).await;
        page.assert_status_ok();
        let html = Html::parse_document(&page.text());
        assert_eq!(count_rows(&html), 5);
        assert_eq!(
            html.select(&Selector::parse("select#employee-filter option").unwrap())
                .count(),
            5,
            "sentinel plus the four seed employees"
        );
        assert!(has_view_more(&html));

        // Scope to one employee: their full list, no pagination.
        let fragment = server
            .post(endpoints::EMPLOYEE_FILTER)
            .add_header(header_name.clone(), header_value.clone())
            .form(&[("employee_id", "emp-001")])
            .await;
        fragment.assert_status_ok();
        let html = Html::parse_fragment(&fragment.text());
        assert_eq!(count_rows(&html), 4, "Amara has four seed transactions");
        assert!(!has_view_more(&html));

        // Clear the filter: the cached first page comes back unchanged.
        let fragment = server
            .post(endpoints::EMPLOYEE_FILTER)
            .add_header(header_name.clone(), header_value.clone())
            .form(&[("employee_id", "")])
            .await;
        let html = Html::parse_fragment(&fragment.text());
        assert_eq!(count_rows(&html), 5);
        assert!(has_view_more(&html));

        // View More appends the second page.
        let fragment = server
            .post(endpoints::LOAD_MORE)
            .add_header(header_name, header_value)
            .await;
        let html = Html::parse_fragment(&fragment.text());
        assert_eq!(count_rows(&html), 10);
        assert!(has_view_more(&html), "one more page of 13 remains");
    }

    #[tokio::test]
    async fn unknown_routes_render_the_not_found_page() {
        let server = test_server();

        let response = server.get("/definitely-not-a-route").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }
}
