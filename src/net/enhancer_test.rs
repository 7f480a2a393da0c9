use super::*;

use futures::executor::block_on;

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(ENHANCE_ENDPOINT, "/api/resumeenhancer/enhance/");
    assert_eq!(
        enhanced_download_endpoint(12),
        "/api/resumeenhancer/download/12/"
    );
}

#[test]
fn download_degrades_to_transport_failure_outside_the_browser() {
    let result = block_on(download(12));
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
