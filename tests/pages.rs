use axum::{
    body::Body,
    http::{
        Request, StatusCode,
        header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE},
    },
};

mod common;

use common::{body_string, get, header, send};

#[tokio::test]
async fn test_root_redirects_to_negotiated_locale() {
    let (app, _) = common::recording_app();
    let response = send(
        app,
        Request::builder()
            .uri("/")
            .header(ACCEPT_LANGUAGE, "fr-CA,fr;q=0.9,en;q=0.8")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, "location"), Some("/fr"));

    let (app, _) = common::recording_app();
    let response = get(app, "/").await;

    assert_eq!(header(&response, "location"), Some("/en"));
}

#[tokio::test]
async fn test_every_page_renders_in_every_locale() {
    for locale in ["en", "fr"] {
        for path in ["", "/services", "/portfolio", "/about", "/contact", "/legal", "/privacy"] {
            let (app, _) = common::recording_app();
            let uri = format!("/{locale}{path}");
            let response = get(app, &uri).await;

            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let html = body_string(response).await;
            assert!(html.contains(&format!("<html lang=\"{locale}\"")), "{uri}");
            assert!(
                html.contains(&format!("rel=\"canonical\" href=\"https://corweb.com/{locale}{path}\"")),
                "{uri}"
            );
        }
    }
}

#[tokio::test]
async fn test_page_metadata_is_localized() {
    let (app, _) = common::recording_app();
    let html = body_string(get(app, "/fr/services").await).await;

    assert!(html.contains("<title>Services | Corweb</title>"));
    assert!(html.contains("content=\"fr_FR\""));
    assert!(html.contains("hreflang=\"en\" href=\"https://corweb.com/en/services\""));
    assert!(html.contains("hreflang=\"x-default\" href=\"https://corweb.com/en/services\""));
    assert!(html.contains("Applications Web"));
    assert!(html.contains("\"@type\":\"ItemList\""));
    assert!(html.contains("\"@type\":\"BreadcrumbList\""));

    let (app, _) = common::recording_app();
    let html = body_string(get(app, "/en").await).await;

    assert!(html.contains("<title>Corweb</title>"));
    assert!(html.contains("\"@type\":\"Organization\""));
    assert!(!html.contains("\"@type\":\"BreadcrumbList\""));
}

#[tokio::test]
async fn test_language_switcher_keeps_current_path() {
    let (app, _) = common::recording_app();
    let html = body_string(get(app, "/en/about").await).await;

    assert!(html.contains("href=\"/fr/about\""));
    assert!(html.contains("href=\"/en/about\" aria-current=\"page\""));
}

#[tokio::test]
async fn test_unprefixed_page_redirects() {
    let (app, _) = common::recording_app();
    let response = get(app, "/about?ref=nav").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, "location"), Some("/en/about?ref=nav"));
}

#[tokio::test]
async fn test_unknown_pages_are_localized_not_found() {
    for uri in ["/de", "/de/about", "/en/pricing", "/fr/about/team"] {
        let (app, _) = common::recording_app();
        let response = get(app, uri).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let (app, _) = common::recording_app();
    let html = body_string(get(app, "/fr/pricing").await).await;

    assert!(html.contains("Page introuvable"));
    assert!(html.contains("content=\"noindex\""));
}

#[tokio::test]
async fn test_consent_banner_and_theme() {
    let (app, _) = common::recording_app();
    let html = body_string(get(app, "/en").await).await;

    assert!(html.contains("class=\"dark\""));
    assert!(html.contains("action=\"/preferences/consent\""));

    let (app, _) = common::recording_app();
    let response = send(
        app,
        Request::builder()
            .uri("/en")
            .header(COOKIE, "corweb-cookie-consent=declined; corweb-theme=light")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let html = body_string(response).await;

    assert!(html.contains("class=\"light\""));
    assert!(!html.contains("action=\"/preferences/consent\""));
}

fn contact_post(locale: &str, form: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/{locale}/contact"))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_contact_form_success_hides_inputs() {
    let (app, transport) = common::recording_app();
    let response = send(
        app,
        contact_post(
            "en",
            &[
                ("name", "Ada Lovelace"),
                ("email", "ada@example.com"),
                ("company", ""),
                ("message", "We need a new marketing site."),
            ],
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Message sent!"));
    assert!(!html.contains("<textarea"));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "ada@example.com");
    assert_eq!(sent[0].subject, "New Contact: Ada Lovelace");
}

#[tokio::test]
async fn test_contact_form_shows_field_errors() {
    let (app, transport) = common::recording_app();
    let response = send(
        app,
        contact_post("en", &[("name", "A"), ("email", "nope"), ("message", "short")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Name is required"));
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains("Message is required"));
    assert!(html.contains("value=\"nope\""));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_contact_form_keeps_inputs_on_failure() {
    let transport = std::sync::Arc::new(common::FailingTransport::default());
    let app = common::app(transport.clone());
    let response = send(
        app,
        contact_post(
            "fr",
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("message", "We need a new marketing site."),
            ],
        ),
    )
    .await;

    let html = body_string(response).await;
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("value=\"ada@example.com\""));
    assert!(!html.contains("domain not verified"));
    assert_eq!(transport.attempts(), 1);
}

#[tokio::test]
async fn test_static_assets() {
    let (app, _) = common::recording_app();
    let response = get(app, "/static/css/site.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").is_some_and(|v| v.starts_with("text/css")));

    let (app, _) = common::recording_app();
    let response = get(app, "/static/missing.js").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (app, _) = common::recording_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"status\":\"ok\""));
}

const ADA: [(&str, &str); 4] = [
    ("token", "01JCONTACTFORMTOKEN0000001"),
    ("name", "Ada Lovelace"),
    ("email", "ada@example.com"),
    ("message", "We need a new marketing site."),
];

#[tokio::test]
async fn test_contact_form_carries_a_token() {
    let (app, _) = common::recording_app();
    let html = body_string(get(app, "/en/contact").await).await;

    assert!(html.contains("type=\"hidden\" name=\"token\" value=\""));
    assert!(html.contains("onsubmit="));
}

#[tokio::test]
async fn test_repeated_contact_post_is_sent_once() {
    let transport = std::sync::Arc::new(common::RecordingTransport::default());
    let state = common::state(transport.clone());

    let first = send(corweb::router(state.clone()), contact_post("en", &ADA)).await;
    assert!(body_string(first).await.contains("Message sent!"));

    let second = send(corweb::router(state), contact_post("en", &ADA)).await;

    assert_eq!(second.status(), StatusCode::OK);
    assert!(body_string(second).await.contains("Message sent!"));
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn test_contact_post_while_in_flight_renders_disabled_submit() {
    let transport = std::sync::Arc::new(common::RecordingTransport::default());
    let state = common::state(transport.clone());
    state.form_tokens.claim(ADA[0].1);

    let response = send(corweb::router(state), contact_post("en", &ADA)).await;
    let html = body_string(response).await;

    assert!(html.contains("<button type=\"submit\" disabled>Sending...</button>"));
    assert!(html.contains(&format!("value=\"{}\"", ADA[0].1)));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_failed_contact_post_can_be_retried() {
    let transport = std::sync::Arc::new(common::FailingTransport::default());
    let state = common::state(transport.clone());

    send(corweb::router(state.clone()), contact_post("en", &ADA)).await;
    send(corweb::router(state), contact_post("en", &ADA)).await;

    assert_eq!(transport.attempts(), 2);
}
