use std::time::Duration;

use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{App, test, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use inspire_talks::models::config::AccessKeys;
use inspire_talks::relay::Web3FormsRelay;
use inspire_talks::repository::CatalogRepository;
use inspire_talks::routes::configure;
use serde_json::Value;
use tera::Tera;

/// Builds the application with the embedded catalog and a relay endpoint
/// nothing listens on.
macro_rules! test_app {
    () => {{
        let repo = CatalogRepository::embedded().expect("embedded catalog is valid");
        let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
            .expect("templates parse");
        let relay = Web3FormsRelay::new("http://127.0.0.1:9/submit", Duration::from_secs(2))
            .expect("relay client");
        let store = CookieMessageStore::builder(Key::generate()).build();

        test::init_service(
            App::new()
                .wrap(FlashMessagesFramework::builder(store).build())
                .app_data(web::Data::new(repo))
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(relay))
                .app_data(web::Data::new(AccessKeys::default()))
                .configure(configure),
        )
        .await
    }};
}

async fn body_text(response: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[actix_web::test]
async fn home_page_lists_story_of_the_week_and_categories() {
    let app = test_app!();

    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Ratan Tata"));
    assert!(body.contains("/category/sports-icons"));
}

#[actix_web::test]
async fn pages_render_for_known_entities() {
    let app = test_app!();

    for uri in [
        "/about",
        "/contact",
        "/host-event",
        "/youth-spotlight",
        "/category/entrepreneurs",
        "/personality/apj-abdul-kalam",
    ] {
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[actix_web::test]
async fn youth_spotlight_embeds_drive_videos_and_previews_articles() {
    let app = test_app!();

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/youth-spotlight").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(body.matches("<iframe").count(), 1);
    assert!(body.contains("Read more"));
    assert!(body.contains("Show less"));
}

#[actix_web::test]
async fn unknown_entities_render_not_found() {
    let app = test_app!();

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/category/astronauts").to_request())
            .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Category not found"));

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/personality/nobody").to_request())
            .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Personality not found"));

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/no/such/page").to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn api_serves_catalog_json() {
    let app = test_app!();

    let categories: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/categories").to_request(),
    )
    .await;
    assert_eq!(categories.as_array().map(Vec::len), Some(9));
    assert_eq!(categories[0]["slug"], "entrepreneurs");

    let featured: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/personalities/featured").to_request(),
    )
    .await;
    let featured = featured.as_array().expect("array");
    assert!(!featured.is_empty());
    assert!(featured.iter().all(|p| p["featured"] == true));

    let missing: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/categories/astronauts/personalities")
            .to_request(),
    )
    .await;
    assert_eq!(missing, serde_json::json!([]));

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/personalities/nobody").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/categories/astronauts").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn honeypot_submission_redirects_without_relaying() {
    let app = test_app!();

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contact")
            .set_form([
                ("name", "Bot"),
                ("email", "bot@example.com"),
                ("message", "Buy now"),
                ("website", "http://spam.example"),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/contact");
}

#[actix_web::test]
async fn invalid_youth_story_is_rendered_again() {
    let app = test_app!();
    let article = vec!["word"; 301].join(" ");

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/youth-spotlight")
            .set_form([
                ("name", "Kavya Nair"),
                ("college", "IIT Madras"),
                ("city", "Chennai"),
                ("category", "Innovation"),
                ("article", article.as_str()),
                ("consent", "yes"),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Article must be 300 words or less (currently 301 words)"));
    assert!(body.contains("Please fix the errors in the form"));
    assert!(body.contains("Kavya Nair"));
}

#[actix_web::test]
async fn unreachable_relay_keeps_the_form() {
    let app = test_app!();

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_form([("name", "Asha Rao"), ("email", "asha@example.com")])
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Network error. Please try again."));
    assert!(body.contains("asha@example.com"));
}
