//! HTTP-level tests for the reqwest transport adapter.
//!
//! Each test runs against a local mockito server.

use mockito::{Matcher, Server};
use serde_json::json;

use traxionpay_client::{GatewayConfig, HttpTransport};
use traxionpay_types::{GatewayRequest, Transport, TransportError};

fn transport_for(server: &Server) -> HttpTransport {
    HttpTransport::new(&GatewayConfig::new(server.url())).unwrap()
}

#[tokio::test]
async fn test_get_array_is_wrapped_under_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/banks/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[1,2,3]")
        .create_async()
        .await;

    let response = transport_for(&server)
        .send(GatewayRequest::get("/banks/"))
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), json!({ "data": [1, 2, 3] }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_object_passes_through() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/payout/bank-account/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":"1234"}"#)
        .create_async()
        .await;

    let response = transport_for(&server)
        .send(GatewayRequest::get("/payout/bank-account/"))
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), json!({ "code": "1234" }));
}

#[tokio::test]
async fn test_authorization_header_is_attached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/payout/bank-account/")
        .match_header("authorization", "Basic c2VjcmV0")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let response = transport_for(&server)
        .send(GatewayRequest::get("/payout/bank-account/").with_authorization("Basic c2VjcmV0"))
        .await
        .unwrap();

    assert_eq!(response.data().map(Vec::len), Some(0));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_authorization_header_unless_given() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/banks/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    transport_for(&server)
        .send(GatewayRequest::get("/banks/"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_form_post_returns_location_without_following() {
    let mut server = Server::new_async().await;
    let location = format!("{}/payme/?data=xyz", server.url());
    let form = server
        .mock("POST", "/payform-link")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::UrlEncoded("form_data".into(), "eyJhIjoxfQ==".into()))
        .with_status(302)
        .with_header("location", &location)
        .create_async()
        .await;
    let payment_page = server
        .mock("GET", Matcher::Regex("^/payme/".into()))
        .expect(0)
        .create_async()
        .await;

    let response = transport_for(&server)
        .send(
            GatewayRequest::post("/payform-link")
                .with_form(vec![("form_data".into(), "eyJhIjoxfQ==".into())]),
        )
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), json!({ "url": location }));
    form.assert_async().await;
    payment_page.assert_async().await;
}

#[tokio::test]
async fn test_form_post_without_location_fails() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/payform-link")
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;

    let result = transport_for(&server)
        .send(GatewayRequest::post("/payform-link").with_form(vec![("form_data".into(), "x".into())]))
        .await;

    assert_eq!(result, Err(TransportError::MissingLocation { status: 200 }));
}

#[tokio::test]
async fn test_json_post_sends_body_and_decodes_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/payout/bank-payout/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "OTP": "1234", "amount": 150.0, "bank_account": 433 })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":99,"status":"pending"}"#)
        .create_async()
        .await;

    let response = transport_for(&server)
        .send(
            GatewayRequest::post("/payout/bank-payout/")
                .with_json(r#"{"OTP":"1234","amount":150.0,"bank_account":433}"#),
        )
        .await
        .unwrap();

    assert_eq!(response.get("status"), Some(&json!("pending")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_body_is_passed_through() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/payout/bank-account/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Invalid token."}"#)
        .create_async()
        .await;

    let response = transport_for(&server)
        .send(GatewayRequest::get("/payout/bank-account/"))
        .await
        .unwrap();

    assert_eq!(response.get("detail"), Some(&json!("Invalid token.")));
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/banks/")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let result = transport_for(&server)
        .send(GatewayRequest::get("/banks/"))
        .await;

    assert!(matches!(result, Err(TransportError::Decode(_))));
}

#[tokio::test]
async fn test_scalar_json_body_is_rejected() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/banks/")
        .with_status(200)
        .with_body("\"ok\"")
        .create_async()
        .await;

    let result = transport_for(&server)
        .send(GatewayRequest::get("/banks/"))
        .await;

    assert!(matches!(result, Err(TransportError::UnexpectedBody(_))));
}

#[tokio::test]
async fn test_unreachable_gateway_is_an_http_error() {
    let transport = HttpTransport::new(&GatewayConfig::new("http://127.0.0.1:1")).unwrap();

    let result = transport.send(GatewayRequest::get("/banks/")).await;

    assert!(matches!(result, Err(TransportError::Http(_))));
}
