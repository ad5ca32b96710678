//! Resend adapter against a stubbed email API.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tapzilla::adapters::notification::{ResendConfig, ResendNotifier};
use tapzilla::domain::chatbot::LeadDetails;
use tapzilla::domain::foundation::{CompanyId, ConversationId, Timestamp};
use tapzilla::domain::lead::Lead;
use tapzilla::ports::{LeadNotification, NotificationError, Notifier};

const FROM: &str = "Tapzilla <leads@tapzilla.com>";

fn notifier(server: &MockServer) -> ResendNotifier {
    ResendNotifier::new(ResendConfig::new("re_test", FROM).with_base_url(server.uri())).unwrap()
}

fn notification() -> LeadNotification {
    let details = LeadDetails {
        first_name: Some("Mike".into()),
        phone: Some("5559876543".into()),
        service: Some("Roof repair".into()),
        ..Default::default()
    };
    LeadNotification {
        to: "owner@roofco.com".into(),
        company_name: "Summit Roofing".into(),
        lead: Lead::capture(CompanyId::new(), None, ConversationId::new(), details, 1000, Timestamp::now())
            .unwrap(),
        dashboard_url: "https://tapzilla.com/dashboard/leads".into(),
    }
}

#[tokio::test]
async fn lead_email_goes_to_the_company() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test"))
        .and(body_partial_json(json!({
            "from": FROM,
            "to": ["owner@roofco.com"],
            "subject": "New lead: Mike (Roof repair)"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email_1" })))
        .expect(1)
        .mount(&server)
        .await;

    notifier(&server).notify_lead_captured(&notification()).await.unwrap();
}

#[tokio::test]
async fn reset_email_carries_the_link() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_partial_json(json!({
            "to": ["pat@example.com"],
            "subject": "Reset your Tapzilla password"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email_2" })))
        .expect(1)
        .mount(&server)
        .await;

    notifier(&server)
        .send_password_reset("pat@example.com", "https://tapzilla.com/reset-password?token=abc")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["text"]
        .as_str()
        .unwrap()
        .contains("https://tapzilla.com/reset-password?token=abc"));
}

#[tokio::test]
async fn rejection_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid from address"))
        .mount(&server)
        .await;

    let err = notifier(&server).notify_lead_captured(&notification()).await.unwrap_err();
    match err {
        NotificationError::Rejected(detail) => {
            assert!(detail.starts_with("422"));
            assert!(detail.contains("invalid from address"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}
