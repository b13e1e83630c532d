//! End-to-end tests for the form endpoints

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use formrelay::config::Mailboxes;
use formrelay::state::AppState;
use formrelay::testing::RecordingEmailSender;
use serde_json::{json, Value};

fn mailboxes() -> Mailboxes {
    Mailboxes {
        sender: "\"Acme\" <relay@acme.test>".to_string(),
        account: "relay@acme.test".to_string(),
        admin: "admin@acme.test".to_string(),
        support: "support@acme.test".to_string(),
        app_name: "Acme".to_string(),
    }
}

fn server(sender: &RecordingEmailSender) -> TestServer {
    let state = AppState::new(Arc::new(sender.clone()), mailboxes());
    TestServer::new(formrelay::router(state)).unwrap()
}

#[tokio::test]
async fn test_missing_fields_rejected_without_sending() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let cases = [
        (
            "/api/send-email",
            json!({ "name": "Ada", "email": "ada@example.com", "message": "Hi" }),
            "Name, email, message, and inquiryType are required.",
        ),
        (
            "/api/send-contact-email",
            json!({ "name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hi", "activeTab": "general" }),
            "Missing required fields: name, email, subject, enquiryType, message, and activeTab are required.",
        ),
        (
            "/api/request-demo",
            json!({ "name": "Ada", "email": "ada@example.com", "sector": "" }),
            "All fields are required.",
        ),
        (
            "/api/send-welcome-email",
            json!({ "userName": "Ada" }),
            "User name and email are required for welcome email.",
        ),
        ("/api/subscribe", json!({ "name": "Ada" }), "Email is required to subscribe."),
    ];

    for (path, body, message) in cases {
        let response = server.post(path).json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.json::<Value>(), json!({ "message": message }), "{path}");
    }

    assert_eq!(sender.attempt_count(), 0);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/request-demo")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body:"));
    assert_eq!(sender.attempt_count(), 0);
}

#[tokio::test]
async fn test_legacy_contact_routes_to_admin() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/send-email")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello",
            "inquiryType": "general",
            "subject": "Pricing"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Email sent successfully!" })
    );

    let email = sender.last_sent().unwrap();
    assert_eq!(email.to, vec!["admin@acme.test"]);
    assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
    assert_eq!(email.from.as_deref(), Some("\"Acme\" <relay@acme.test>"));
    assert_eq!(
        email.subject.as_deref(),
        Some("New Contact Form Submission - General")
    );
    assert!(email
        .html
        .unwrap()
        .contains("<p><strong>Subject:</strong> Pricing</p>"));
}

#[tokio::test]
async fn test_non_string_values_are_interpolated() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/send-email")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello",
            "inquiryType": "general",
            "phone": 5551234,
            "company": true
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let html = sender.last_sent().unwrap().html.unwrap();
    assert!(html.contains("<p><strong>Phone:</strong> 5551234</p>"));
    assert!(html.contains("<p><strong>Company:</strong> true</p>"));
}

#[tokio::test]
async fn test_falsy_required_value_is_missing() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/request-demo")
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "sector": false }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "All fields are required." })
    );
    assert_eq!(sender.attempt_count(), 0);
}

#[tokio::test]
async fn test_contact_business_tab() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/send-contact-email")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Partnering",
            "enquiryType": "Reseller",
            "message": "Let's talk",
            "activeTab": "business"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["message"],
        "Email sent successfully! We will get back to you shortly."
    );

    let email = sender.sent_to("admin@acme.test").unwrap();
    assert_eq!(
        email.subject.as_deref(),
        Some("New Business Inquiry: \"Partnering\" from Ada")
    );
    assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn test_demo_request() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/request-demo")
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "sector": "Automotive" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["message"],
        "Demo request sent successfully!"
    );

    let email = sender.last_sent().unwrap();
    assert_eq!(email.to, vec!["admin@acme.test"]);
    assert_eq!(email.from.as_deref(), Some("relay@acme.test"));
    assert_eq!(
        email.subject.as_deref(),
        Some("New Demo Request from Ada - Manufacturing Solution")
    );
}

#[tokio::test]
async fn test_welcome_goes_to_user() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/send-welcome-email")
        .json(&json!({ "userName": "Ada", "userEmail": "ada@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["message"],
        "Welcome email sent successfully to ada@example.com!"
    );

    let email = sender.last_sent().unwrap();
    assert_eq!(email.to, vec!["ada@example.com"]);
    assert_eq!(email.reply_to.as_deref(), Some("support@acme.test"));
    assert_eq!(email.subject.as_deref(), Some("Welcome to Acme, Ada!"));
    assert!(!sender.was_sent_to("admin@acme.test"));
}

#[tokio::test]
async fn test_subscribe_sends_notification_and_welcome() {
    let sender = RecordingEmailSender::new();
    let server = server(&sender);

    let response = server
        .post("/api/subscribe")
        .json(&json!({ "email": "a@b.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(sender.sent_count(), 2);

    let notification = sender.sent_to("admin@acme.test").unwrap();
    assert_eq!(
        notification.subject.as_deref(),
        Some("New Newsletter Subscriber: a@b.com")
    );
    assert_eq!(notification.reply_to.as_deref(), Some("a@b.com"));

    let welcome = sender.sent_to("a@b.com").unwrap();
    assert_eq!(
        welcome.subject.as_deref(),
        Some("Welcome to the Acme Newsletter!")
    );
    assert_eq!(welcome.reply_to.as_deref(), Some("support@acme.test"));
}

#[tokio::test]
async fn test_subscribe_fails_when_either_send_fails() {
    for failing in ["admin@acme.test", "a@b.com"] {
        let sender = RecordingEmailSender::new().failing_for(failing);
        let server = server(&sender);

        let response = server
            .post("/api/subscribe")
            .json(&json!({ "email": "a@b.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["message"], "Failed to process subscription.");
        assert_eq!(body["error"], format!("Mailbox unavailable: {failing}"));
        // both sends are attempted even though one fails
        assert_eq!(sender.attempt_count(), 2);
        assert_eq!(sender.sent_count(), 1);
    }
}

#[tokio::test]
async fn test_delivery_failure_reports_error() {
    let sender = RecordingEmailSender::new().failing_for("admin@acme.test");
    let server = server(&sender);

    let response = server
        .post("/api/request-demo")
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "sector": "Automotive" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "message": "Failed to send demo request.",
            "error": "Mailbox unavailable: admin@acme.test"
        })
    );
}

#[tokio::test]
async fn test_health() {
    let server = server(&RecordingEmailSender::new());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "ok");
}
