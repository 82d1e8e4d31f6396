//! Alert fragments for surfacing failures to the user.
//!
//! Alerts are swapped out-of-band into the `#alert-container` element of the
//! base layout, so an action that fails can report the failure without
//! touching the transaction panel it targeted.

use maud::{Markup, html};

/// An error alert shown near the bottom of the page.
///
/// Fetch failures are the only alert-worthy events in the viewer, so there
/// is no success variant.
#[derive(Debug, Clone)]
pub struct Alert {
    message: String,
    details: String,
}

impl Alert {
    /// Create an error alert with a short message and a longer explanation.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// The alert as a standalone markup block.
    pub fn into_markup(self) -> Markup {
        html! {
            div
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                    dark:bg-gray-800 dark:text-red-400 shadow"
                role="alert"
            {
                p class="font-medium" { (self.message) }
                p { (self.details) }
            }
        }
    }

    /// The alert wrapped for an out-of-band swap into the base layout's
    /// alert container.
    pub fn into_oob_markup(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="innerHTML"
            {
                (self.into_markup())
            }
        }
    }
}
