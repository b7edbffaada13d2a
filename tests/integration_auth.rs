mod common;

use chatkit::{ChatkitError, InstanceConfig, Payload, verify_token};
use common::{
    MockTransport, TEST_KEY, TEST_LOCATOR, client_with, generate_user_id, test_client, test_config,
};

#[test]
fn test_authenticate_returns_user_token() {
    let chatkit = test_client();
    let user_id = generate_user_id();

    let response = chatkit.authenticate(&user_id).unwrap();

    assert_eq!(response.status(), 200);
    assert!(response.is_success());

    let payload = response.payload().and_then(Payload::as_object).unwrap();
    assert_eq!(payload["token_type"], "access_token");
    assert_eq!(payload["user_id"], user_id.as_str());
    assert_eq!(payload["expires_in"], 3600);

    let token = payload["access_token"].as_str().unwrap();
    let claims = verify_token(token, &test_config()).unwrap();
    assert_eq!(claims.sub.as_deref(), Some(user_id.as_str()));
    assert_eq!(claims.su, None);
    assert_eq!(claims.iss, "api_keys/test-key");
    assert_eq!(claims.instance, "test-instance");
}

#[test]
fn test_authenticate_never_touches_transport() {
    let chatkit = test_client();

    chatkit.authenticate("alice").unwrap();

    assert_eq!(chatkit.transport().request_count(), 0);
}

#[test]
fn test_authenticate_expires_in_follows_default_lifetime() {
    let config = InstanceConfig::resolve(TEST_LOCATOR, TEST_KEY, None).unwrap();
    let chatkit = chatkit::ChatKit::with_transport(config, MockTransport::default());

    let response = chatkit.authenticate("alice").unwrap();

    let payload = response.payload().and_then(Payload::as_object).unwrap();
    assert_eq!(payload["expires_in"], 86_400);
}

#[test]
fn test_authenticate_requires_user_id() {
    let chatkit = client_with(MockTransport::default());

    let err = chatkit.authenticate("").unwrap_err();

    assert!(matches!(err, ChatkitError::Validation { ref field } if field == "user_id"));
}

#[test]
fn test_authenticate_envelope_json_shape() {
    let chatkit = test_client();

    let json = chatkit.authenticate("alice").unwrap().to_json();

    assert_eq!(json["status"], 200);
    assert_eq!(json["message"], "");
    assert!(json["payload"]["access_token"].is_string());
    assert!(json.get("error").is_none());
}
