use axum::{body::Body, http::StatusCode, response::Response};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(get_header(response, "content-type"), content_type);
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    response
        .headers()
        .get(header_name)
        .unwrap_or_else(|| panic!("Headers missing {header_name}"))
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(get_header(response, "hx-redirect"), endpoint);
}

/// Check that `response` is a 500 alert fragment rather than a full page.
pub(crate) async fn assert_alert_response(response: Response<Body>) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_content_type(&response, "text/html; charset=utf-8");

    let html = super::parse_html_fragment(response).await;
    super::assert_valid_html(&html);

    let alert = scraper::Selector::parse("[role=alert]").unwrap();
    assert!(
        html.select(&alert).next().is_some(),
        "want an element with role=\"alert\", got {}",
        html.html()
    );
    let title = scraper::Selector::parse("title").unwrap();
    assert!(
        html.select(&title).next().is_none(),
        "want an alert fragment, got a full page"
    );
}
