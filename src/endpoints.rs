//! The application route URIs.

/// The viewer page, the only full page the application serves.
pub const ROOT: &str = "/";
/// The endpoint that applies an employee filter selection.
pub const EMPLOYEE_FILTER: &str = "/viewer/filter";
/// The endpoint that loads the next page of the all-transactions feed.
pub const LOAD_MORE: &str = "/viewer/more";

// These tests are here so that we know when we call `Uri::from_static` it
// will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::EMPLOYEE_FILTER);
        assert_endpoint_is_valid_uri(endpoints::LOAD_MORE);
    }
}
