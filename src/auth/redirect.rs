//! Where to send a user after they log in.
//!
//! When the auth guard turns a request away, it remembers the page the user
//! was trying to reach in the `redirect_url` query parameter of the log-in
//! page. Only local paths that are not themselves auth pages are accepted.

use axum::{extract::Request, http::Uri};

use crate::endpoints;

/// Pages that make no sense to return to once logged in.
const AUTH_PAGES: [&str; 2] = [endpoints::LOG_IN_VIEW, endpoints::REGISTER_VIEW];

fn is_local_page(path_and_query: &str) -> bool {
    if !path_and_query.starts_with('/') || path_and_query.starts_with("//") {
        return false;
    }

    let path = path_and_query
        .split_once('?')
        .map_or(path_and_query, |(path, _)| path);

    !AUTH_PAGES.contains(&path)
}

/// Reduce `raw_url` to a path and query on this site.
///
/// Returns `None` for absolute URLs, protocol relative URLs and auth pages.
pub fn normalize_redirect_url(raw_url: &str) -> Option<String> {
    let uri = raw_url.parse::<Uri>().ok()?;

    if uri.scheme().is_some() || uri.authority().is_some() {
        return None;
    }

    let path_and_query = uri.path_and_query()?.as_str();

    is_local_page(path_and_query).then(|| path_and_query.to_owned())
}

/// The page the user was on when the request was made.
///
/// htmx requests go to the API routes, so for those the page comes from the
/// `HX-Current-URL` header, which holds a full URL.
fn current_page(request: &Request) -> Option<String> {
    if !request.uri().path().starts_with("/api") {
        return normalize_redirect_url(request.uri().path_and_query()?.as_str());
    }

    let headers = request.headers();
    let is_hx_request = headers
        .get("hx-request")
        .and_then(|header| header.to_str().ok())
        .is_some_and(|header| header.eq_ignore_ascii_case("true"));

    if !is_hx_request {
        tracing::warn!("API request {} was not made by htmx.", request.uri());
        return None;
    }

    let current_url = headers
        .get("hx-current-url")
        .and_then(|header| header.to_str().ok())?
        .parse::<Uri>()
        .ok()?;

    let path_and_query = current_url.path_and_query()?.as_str();
    is_local_page(path_and_query).then(|| path_and_query.to_owned())
}

/// The log-in page URL that returns the user to the page of `request`.
///
/// Falls back to returning the user to the dashboard.
pub fn build_log_in_redirect_url(request: &Request) -> String {
    let target = current_page(request).unwrap_or_else(|| {
        tracing::debug!(
            "No page to return to for {}, using the dashboard.",
            request.uri()
        );
        endpoints::DASHBOARD_VIEW.to_owned()
    });

    match serde_urlencoded::to_string([("redirect_url", &target)]) {
        Ok(query) => format!("{}?{}", endpoints::LOG_IN_VIEW, query),
        Err(error) => {
            tracing::error!("Could not encode redirect URL {target}: {error}");
            endpoints::LOG_IN_VIEW.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, extract::Request};

    use crate::endpoints;

    use super::{build_log_in_redirect_url, normalize_redirect_url};

    #[test]
    fn accepts_local_paths() {
        assert_eq!(
            normalize_redirect_url("/bill-payment?category=data").as_deref(),
            Some("/bill-payment?category=data")
        );
    }

    #[test]
    fn rejects_other_sites_and_auth_pages() {
        for url in [
            "https://example.com/dashboard",
            "//example.com",
            "dashboard",
            endpoints::LOG_IN_VIEW,
            endpoints::REGISTER_VIEW,
        ] {
            assert_eq!(normalize_redirect_url(url), None, "want {url} rejected");
        }
    }

    #[test]
    fn page_request_returns_to_same_page() {
        let request = Request::get("/cards").body(Body::empty()).unwrap();

        let url = build_log_in_redirect_url(&request);

        assert_eq!(url, "/log_in?redirect_url=%2Fcards");
    }

    #[test]
    fn htmx_request_returns_to_current_page() {
        let request = Request::post("/api/transfer/confirm")
            .header("HX-Request", "true")
            .header("HX-Current-URL", "http://localhost:3000/transfer")
            .body(Body::empty())
            .unwrap();

        let url = build_log_in_redirect_url(&request);

        assert_eq!(url, "/log_in?redirect_url=%2Ftransfer");
    }

    #[test]
    fn plain_api_request_returns_to_dashboard() {
        let request = Request::post("/api/cards").body(Body::empty()).unwrap();

        let url = build_log_in_redirect_url(&request);

        assert_eq!(url, "/log_in?redirect_url=%2Fdashboard");
    }
}
