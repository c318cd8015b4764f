use std::time::{Duration, SystemTime};

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use car_doctor_backend::auth::claims::IdentityPayload;
use car_doctor_backend::auth::jwt::mint_access_token;
use car_doctor_backend::error::AppError;
use car_doctor_backend::extractors::identity::Identity;
use car_doctor_backend::middleware::token_gate::TokenGate;
use car_doctor_backend::routes;
use car_doctor_backend::state::app_state::AppState;
use car_doctor_backend::state::security_config::SecurityConfig;
use serde::Serialize;
use serde_json::{json, Value};

fn test_security() -> SecurityConfig {
    SecurityConfig::new("test_secret_key_for_gate_tests_only".as_bytes())
}

fn mint_token(email: &str, security: &SecurityConfig, now: SystemTime) -> String {
    let payload = IdentityPayload {
        email: email.to_string(),
        extra: serde_json::Map::new(),
    };
    mint_access_token(payload, now, security).expect("mint token")
}

#[derive(Serialize)]
struct WhoamiResponse {
    email: String,
}

async fn whoami(identity: Identity) -> Result<web::Json<WhoamiResponse>, AppError> {
    Ok(web::Json(WhoamiResponse {
        email: identity.email().to_string(),
    }))
}

/// The real route table plus a gated echo endpoint, running against a state
/// without a database so only the gate and ownership paths are exercised.
async fn build_app(
    security: SecurityConfig,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let state = AppState::without_db(security);
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(
                web::resource("/whoami")
                    .wrap(TokenGate)
                    .route(web::get().to(whoami)),
            )
            .configure(routes::configure),
    )
    .await
}

/// Middleware rejections surface as service errors; handler rejections as
/// error responses. Either way the status is what the client sees.
async fn send<S>(app: &S, req: Request) -> StatusCode
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    match app.call(req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    }
}

#[actix_web::test]
async fn test_missing_cookie_is_401() {
    let app = build_app(test_security()).await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    assert_eq!(send(&app, req).await, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_empty_cookie_is_401() {
    let app = build_app(test_security()).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", ""))
        .to_request();
    assert_eq!(send(&app, req).await, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_tampered_token_is_401() {
    let security = test_security();
    let token = mint_token("u@test.com", &security, SystemTime::now());
    let app = build_app(security).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", format!("{token}x")))
        .to_request();
    assert_eq!(send(&app, req).await, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_expired_token_is_401() {
    let security = test_security();
    // Minted two hours ago, well past the one-hour TTL
    let token = mint_token(
        "u@test.com",
        &security,
        SystemTime::now() - Duration::from_secs(2 * 60 * 60),
    );
    let app = build_app(security).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", token))
        .to_request();
    assert_eq!(send(&app, req).await, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_401() {
    let other = SecurityConfig::new("a-completely-different-secret".as_bytes());
    let token = mint_token("u@test.com", &other, SystemTime::now());
    let app = build_app(test_security()).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", token))
        .to_request();
    assert_eq!(send(&app, req).await, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_valid_cookie_reaches_handler_with_claims() {
    let security = test_security();
    let token = mint_token("u@test.com", &security, SystemTime::now());
    let app = build_app(security).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], json!("u@test.com"));
}

#[actix_web::test]
async fn test_issue_token_sets_httponly_cookie() {
    let app = build_app(test_security()).await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "u@test.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    {
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "token")
            .expect("token cookie set on response");
        assert_eq!(cookie.http_only(), Some(true));
        assert!(!cookie.value().is_empty());
    }

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
}

#[actix_web::test]
async fn test_issued_cookie_round_trips_through_gate() {
    let app = build_app(test_security()).await;

    // Issue
    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "round@trip.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let token = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .expect("token cookie set on response")
        .value()
        .to_string();

    // Present the issued cookie back to a gated endpoint
    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new("token", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], json!("round@trip.com"));
}
