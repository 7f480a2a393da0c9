use super::*;

use futures::executor::block_on;

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(PROFILE_ENDPOINT, "/api/auth/user/");
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login/");
    assert_eq!(REGISTRATION_ENDPOINT, "/api/auth/registration/");
}

#[test]
fn http_api_degrades_to_transport_failure_outside_the_browser() {
    let api = HttpAuthApi;
    let result = block_on(api.fetch_profile());
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
