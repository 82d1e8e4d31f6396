//! Defines the endpoint that applies an employee filter selection.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::html;
use serde::Deserialize;

use crate::{
    AppState, alert::Alert, app_state::SharedBrowser, endpoints, html::render, model::EmployeeId,
};

use super::view::transaction_panel;

/// The state needed to apply a filter selection.
#[derive(Clone, Debug)]
pub struct EmployeeFilterState {
    /// The shared browser instance backing the viewer.
    pub browser: SharedBrowser,
}

impl FromRef<AppState> for EmployeeFilterState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            browser: state.browser.clone(),
        }
    }
}

/// The form data submitted by the filter control.
#[derive(Debug, Deserialize)]
pub struct EmployeeFilterForm {
    /// The selected employee ID; the empty string clears the filter.
    pub employee_id: EmployeeId,
}

/// A route handler that scopes the viewer to one employee's transactions, or
/// back to the paginated feed when the sentinel is submitted.
///
/// htmx requests get the refreshed transaction panel back; plain form posts
/// are redirected to the viewer page.
pub async fn select_employee_endpoint(
    State(state): State<EmployeeFilterState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<EmployeeFilterForm>,
) -> Response {
    let mut browser = state.browser.lock().await;

    if let Err(error) = browser.select_employee(&form.employee_id).await {
        tracing::error!(
            "could not apply the employee filter \"{}\": {error}",
            form.employee_id
        );

        if !is_htmx {
            return error.into_response();
        }

        // Re-render the untouched panel and report the failure out-of-band,
        // so the last-known-good list stays on screen.
        let alert = Alert::error(
            "Could not apply the employee filter",
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
