//! Defines the route handler for the transaction viewer page.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
};

use crate::{AppState, Error, app_state::SharedBrowser, html::render};

use super::view::{transaction_panel, viewer_page};

/// The state needed for the viewer page.
#[derive(Clone, Debug)]
pub struct ViewerPageState {
    /// The shared browser instance backing the viewer.
    pub browser: SharedBrowser,
}

impl FromRef<AppState> for ViewerPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            browser: state.browser.clone(),
        }
    }
}

/// Render the transaction viewer.
///
/// Runs the initial load first; that is a no-op once the employee list is
/// cached, so reloading the page never refetches or duplicates data.
pub async fn get_viewer_page(State(state): State<ViewerPageState>) -> Result<Response, Error> {
    let mut browser = state.browser.lock().await;

    browser
        .load_initial()
        .await
        .inspect_err(|error| tracing::error!("could not run the initial load: {error}"))?;

    let page = viewer_page(
        &browser.filter_options(),
        browser.employee_filter(),
        browser.employees_loaded(),
        transaction_panel(browser.transactions(), browser.can_load_more()),
    );

    Ok(render(StatusCode::OK, page))
}
