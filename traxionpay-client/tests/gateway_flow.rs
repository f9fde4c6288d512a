//! End-to-end facade tests against a mocked gateway.

use mockito::{Matcher, Server};
use serde_json::json;

use traxionpay_client::{ClientError, GatewayConfig, OrEmpty, TraxionPay};
use traxionpay_types::{BankLinkRequest, CashInParams, CashInRequest, CashOutRequest};

const API_KEY: &str = "7)5dmcfy^dp*9bdrcfcm$k-n=p7b!x(t)_f^i8mxl@v_+rno*x";
const SECRET_KEY: &str = "cxl+hwc%97h6+4#lx1au*ut=ml+=!fx85w94iuf*06=rf383xs";
const AUTH_HEADER: &str =
    "Basic Y3hsK2h3YyU5N2g2KzQjbHgxYXUqdXQ9bWwrPSFmeDg1dzk0aXVmKjA2PXJmMzgzeHM=";

fn client_for(server: &Server) -> TraxionPay {
    TraxionPay::with_config(API_KEY, SECRET_KEY, GatewayConfig::new(server.url())).unwrap()
}

#[tokio::test]
async fn test_cash_in_returns_payment_page_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/payform-link")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Regex("^form_data=[A-Za-z0-9%]+$".into()))
        .with_status(302)
        .with_header("location", "https://dev.traxionpay.com/payme/?data=xyz")
        .create_async()
        .await;

    let cash_in = CashInRequest::new(CashInParams {
        merchant_id: 6328,
        merchant_ref_no: "ABC123DEF456".into(),
        merchant_additional_data: r#"{"payment_code":"ABC123DEF456"}"#.into(),
        amount: 1500.0,
        description: "My test payment".into(),
        status_notification_url: "https://devapi.traxionpay.com/callback/".into(),
        success_page_url: "https://devapi.traxionpay.com/callback".into(),
        failure_page_url: "https://devapi.traxionpay.com/callback".into(),
        cancel_page_url: "https://devapi.traxionpay.com/callback".into(),
        pending_page_url: "https://devapi.traxionpay.com/callback".into(),
        payment_method: None,
        currency: None,
    });

    let response = client_for(&server).cash_in(&cash_in, None).await.unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "url": "https://dev.traxionpay.com/payme/?data=xyz" })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_payout_flow() {
    let mut server = Server::new_async().await;
    let accounts = server
        .mock("GET", "/payout/bank-account/")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(r#"[{"id":433,"bank_name":"BDO","account_number":"123412341234"}]"#)
        .create_async()
        .await;
    let otp = server
        .mock("POST", "/payout/bank-payout/get-otp/")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(r#"{"code":"908172"}"#)
        .create_async()
        .await;
    let payout = server
        .mock("POST", "/payout/bank-payout/")
        .match_header("authorization", AUTH_HEADER)
        .match_body(Matcher::Json(json!({
            "OTP": "908172",
            "amount": 150.0,
            "bank_account": 433,
        })))
        .with_status(201)
        .with_body(r#"{"id":1,"status":"pending"}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    let listed = client.fetch_bank_accounts().await.unwrap();
    let account_id = listed.data().unwrap()[0]["id"].as_i64().unwrap();

    let code = client.fetch_otp().await.unwrap();
    let code = code.get("code").and_then(|c| c.as_str()).unwrap().to_string();

    let result = client
        .cash_out(&CashOutRequest::new(code, 150.0, account_id))
        .await
        .unwrap();

    assert_eq!(result.get("status"), Some(&json!("pending")));
    accounts.assert_async().await;
    otp.assert_async().await;
    payout.assert_async().await;
}

#[tokio::test]
async fn test_link_bank_account() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/payout/bank-account/")
        .match_header("authorization", AUTH_HEADER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "bank": "161414",
            "account_type": "checkings",
            "account_number": "123412341234",
            "account_name": "John Doe",
        })))
        .with_status(201)
        .with_body(r#"{"id":7,"bank_name":"BDO","account_number":"123412341234"}"#)
        .create_async()
        .await;

    let account = BankLinkRequest::new("161414", "checkings", "John Doe", "123412341234").unwrap();
    let response = client_for(&server).link_bank_account(&account).await.unwrap();

    assert!(response.contains_key("id"));
    assert!(response.contains_key("bank_name"));
    assert!(response.contains_key("account_number"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_banks_without_auth() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/banks/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"[{"id":1,"name":"BDO"},{"id":2,"name":"BPI"}]"#)
        .create_async()
        .await;

    let banks = client_for(&server).fetch_banks().await.unwrap();

    assert_eq!(banks.data().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_failed_call_is_distinguishable_from_empty_response() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/payout/bank-payout/get-otp/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = client_for(&server);

    let strict = client.fetch_otp().await;
    assert!(matches!(strict, Err(ClientError::Transport(_))));

    let lenient = client.fetch_otp().await.or_empty().unwrap();
    assert!(lenient.is_empty());
}
