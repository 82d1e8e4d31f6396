//! Defines the endpoint that loads the next page of the all-transactions
//! feed.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::html;

use crate::{AppState, alert::Alert, app_state::SharedBrowser, endpoints, html::render};

use super::view::transaction_panel;

/// The state needed to load more transactions.
#[derive(Clone, Debug)]
pub struct LoadMoreState {
    /// The shared browser instance backing the viewer.
    pub browser: SharedBrowser,
}

impl FromRef<AppState> for LoadMoreState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            browser: state.browser.clone(),
        }
    }
}

/// A route handler that appends the next page of the feed to the viewer.
///
/// The browser treats a request with no page left (or while filtered) as a
/// no-op, so a stale View More click degrades to re-rendering the panel.
/// htmx requests get the refreshed transaction panel back; plain form posts
/// are redirected to the viewer page.
pub async fn load_more_endpoint(
    State(state): State<LoadMoreState>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let mut browser = state.browser.lock().await;

    if let Err(error) = browser.load_more().await {
        tracing::error!("could not load more transactions: {error}");

        if !is_htmx {
            return error.into_response();
        }

        // Re-render the untouched panel and report the failure out-of-band,
        // so the accumulated list stays on screen.
        let alert = Alert::error(
            "Could not load more transactions",
            "The data source failed to respond. The list shown is unchanged.",
        );
        return render(
            StatusCode::OK,
            html! {
                (transaction_panel(browser.transactions(), browser.can_load_more()))
                (alert.into_oob_markup())
            },
        );
    }

    if is_htmx {
        render(
            StatusCode::OK,
            transaction_panel(browser.transactions(), browser.can_load_more()),
        )
    } else {
        Redirect::to(endpoints::ROOT).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, response::Response};
    use axum_htmx::HxRequest;
    use scraper::{Html, Selector};

    use crate::{
        AppState,
        source::{MockTransactionSource, PageConfig},
        viewer::page::{ViewerPageState, get_viewer_page},
    };

    use super::{LoadMoreState, load_more_endpoint};

    async fn loaded_state() -> LoadMoreState {
        let state = AppState::new(MockTransactionSource::with_seed_data(PageConfig {
            page_size: 5,
        }));
        get_viewer_page(State(ViewerPageState {
            browser: state.browser.clone(),
        }))
        .await
        .unwrap();

        LoadMoreState {
            browser: state.browser,
        }
    }

    async fn parse_fragment(response: Response) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_fragment(&String::from_utf8_lossy(&body))
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
    async fn appends_the_next_page_to_the_panel() {
        let state = loaded_state().await;

        let response = load_more_endpoint(State(state), HxRequest(true)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_fragment(response).await;
        assert_eq!(count_rows(&html), 10);
        assert!(has_view_more(&html), "a third page remains");
    }

    #[tokio::test]
    async fn final_page_removes_the_view_more_button() {
        let state = loaded_state().await;

        load_more_endpoint(State(state.clone()), HxRequest(true)).await;
        let response = load_more_endpoint(State(state), HxRequest(true)).await;

        let html = parse_fragment(response).await;
        assert_eq!(count_rows(&html), 13, "all seed transactions are shown");
        assert!(!has_view_more(&html));
    }

    #[tokio::test]
    async fn load_more_after_exhaustion_is_harmless() {
        let state = loaded_state().await;

        load_more_endpoint(State(state.clone()), HxRequest(true)).await;
        load_more_endpoint(State(state.clone()), HxRequest(true)).await;
        let response = load_more_endpoint(State(state), HxRequest(true)).await;

        let html = parse_fragment(response).await;
        assert_eq!(count_rows(&html), 13, "no duplicate appends");
        assert!(!has_view_more(&html));
    }

    #[tokio::test]
    async fn load_more_before_the_page_was_visited_shows_an_empty_panel() {
        let state = LoadMoreState {
            browser: AppState::new(MockTransactionSource::with_seed_data(PageConfig {
                page_size: 5,
            }))
            .browser,
        };

        let response = load_more_endpoint(State(state), HxRequest(true)).await;

        let html = parse_fragment(response).await;
        assert_eq!(count_rows(&html), 0, "no cursor yet, so nothing to load");
    }

    #[tokio::test]
    async fn plain_form_posts_redirect_back_to_the_viewer() {
        let state = loaded_state().await;

        let response = load_more_endpoint(State(state), HxRequest(false)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get("location")
                .expect("Missing redirect location header"),
            "/"
        );
    }
}
