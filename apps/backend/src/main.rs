use actix_web::{web, App, HttpServer};
use scorebook::config::store::StoreConfig;
use scorebook::infra::state::build_state;
use scorebook::middleware::cors::cors_middleware;
use scorebook::middleware::request_trace::RequestTrace;
use scorebook::middleware::structured_logger::StructuredLogger;
use scorebook::middleware::trace_span::TraceSpan;
use scorebook::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let store_config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid store configuration: {e}");
            std::process::exit(1);
        }
    };
    let backend = store_config.backend;
    let layout = store_config.layout;

    let app_state = match build_state().with_store_config(store_config).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        %host,
        port,
        backend = ?backend,
        layout = layout.as_str(),
        "Starting scorebook backend"
    );

    let data = web::Data::new(app_state);

    // The last wrap is outermost: CORS, RequestTrace, StructuredLogger, TraceSpan.
    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
