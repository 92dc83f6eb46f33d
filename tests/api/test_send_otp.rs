use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};
use crate::helpers::spawn_app;

#[tokio::test]
async fn test_send_otp_returns_200_when_the_provider_accepts() {
    let app = spawn_app().await;

    Mock::given(path("/v3/mail/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_otp(json!({
        "recipient": "a@b.com",
        "otp": "482913"
    })).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_send_otp_forwards_the_rendered_message_to_the_provider() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_send_otp(json!({
        "recipient": "a@b.com",
        "otp": "482913"
    })).await;

    // The mock server keeps what it received, so the exact outbound payload
    // can be asserted on
    let requests = app.email_server.received_requests().await.unwrap();
    let outbound: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(outbound["subject"], "Your OTP Code");
    assert_eq!(outbound["personalizations"][0]["to"][0]["email"], "a@b.com");
    assert_eq!(outbound["content"][0]["value"], "Your one-time password is: 482913");
    // The code lands in the HTML part unescaped
    assert_eq!(outbound["content"][1]["value"], "<strong>Your OTP code is: 482913</strong>");
}

#[tokio::test]
async fn test_send_otp_surfaces_the_structured_provider_error() {
    let app = spawn_app().await;

    let provider_error = json!({
        "errors": [{ "message": "Maximum credits exceeded", "field": null }]
    });

    Mock::given(path("/v3/mail/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(provider_error.clone()))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_otp(json!({
        "recipient": "a@b.com",
        "otp": "482913"
    })).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["success"], json!(false));
    // The provider's error body comes back verbatim
    assert_eq!(body["error"], provider_error);
}

#[tokio::test]
async fn test_send_otp_falls_back_to_the_error_message_string() {
    let app = spawn_app().await;

    // No structured body this time, just text
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_send_otp(json!({
        "recipient": "a@b.com",
        "otp": "482913"
    })).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("upstream exploded"));
}

#[tokio::test]
async fn test_send_otp_is_only_routed_as_post() {
    let app = spawn_app().await;

    // No mock mounted: nothing should ever reach the provider
    let client = reqwest::Client::new();

    let response = client.get(&format!("{}/send-otp", &app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(404, response.status().as_u16());

    let response = client.post(&format!("{}/send-otps", &app.address))
        .json(&json!({ "recipient": "a@b.com", "otp": "482913" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn test_concurrent_send_otp_requests_are_independent() {
    let app = spawn_app().await;

    Mock::given(path("/v3/mail/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Fire both requests at once, each must produce its own outbound message
    let (first, second) = tokio::join!(
        app.post_send_otp(json!({ "recipient": "a@b.com", "otp": "111111" })),
        app.post_send_otp(json!({ "recipient": "c@d.com", "otp": "222222" }))
    );

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());

    let requests = app.email_server.received_requests().await.unwrap();
    let mut codes: Vec<String> = requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["content"][0]["value"].as_str().unwrap().to_owned()
        })
        .collect();
    codes.sort();

    assert_eq!(codes, vec![
        "Your one-time password is: 111111".to_owned(),
        "Your one-time password is: 222222".to_owned(),
    ]);
}
