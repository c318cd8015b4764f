use actix_web::{web, App, HttpServer};
use car_doctor_backend::config::db::mongo_uri;
use car_doctor_backend::infra::db::connect_db;
use car_doctor_backend::middleware::cors::cors_middleware;
use car_doctor_backend::middleware::request_log::RequestLog;
use car_doctor_backend::routes;
use car_doctor_backend::state::app_state::AppState;
use car_doctor_backend::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Pick up a local .env when present; real deployments set the
    // environment directly.
    dotenvy::dotenv().ok();

    telemetry::init_tracing();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Car Doctor backend on http://{}:{}", host, port);

    // No default for the signing secret
    let secret = match std::env::var("TOKEN_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            eprintln!("❌ TOKEN_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(secret.as_bytes());

    let uri = match mongo_uri() {
        Ok(uri) => uri,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let db = match connect_db(&uri).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to MongoDB: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    let app_state = AppState::new(db, security_config);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestLog)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
