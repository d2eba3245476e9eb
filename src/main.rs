use std::process::exit;
use std::sync::Arc;
use actix_web::{web, App, HttpResponse, HttpServer};
use clap::Parser;
use log::info;
use serde_json::{json, Map, Value};
use tokio::runtime::Builder;
use service_common::cache::structs::redis_client::RedisClient;
use service_common::cache::traits::redis_cache::RedisCache;
use service_common::config::structs::configuration::Configuration;
use service_common::logging::{setup_logging, setup_sentry};
use service_common::logs::structs::logger::Logger;
use service_common::middleware::structs::request_id_middleware::RequestIdMiddleware;
use service_common::structs::Cli;
use service_common::{log_error, log_info};

type Caches = Vec<Arc<RedisClient>>;

async fn health(caches: web::Data<Caches>, logger: web::ReqData<Logger>) -> HttpResponse
{
    let status: Map<String, Value> = caches
        .iter()
        .map(|cache| (cache.name().to_string(), json!(cache.is_ready())))
        .collect();
    logger.debug("health probe");
    HttpResponse::Ok().json(json!({ "status": "ok", "caches": status }))
}

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            eprintln!("[BOOT] {}", error.message());
            exit(101)
        }
    };

    let level = setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard = setup_sentry(&config);

    let logger = Logger::global(Some(&config.log_prefix));
    logger.set_level_filter(level);

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let mut caches: Caches = Vec::new();
            for cache_config in &config.cache {
                let cache = Arc::new(RedisClient::new(cache_config.clone()));
                match cache.init_client().await {
                    Ok(_) => log_info!(logger, "[BOOT] Cache {} ready", cache.name()),
                    Err(error) => log_error!(logger, "[BOOT] Cache {} unavailable: {}", cache.name(), error)
                }
                caches.push(cache);
            }

            if !config.http_server.enabled {
                log_info!(logger, "[BOOT] HTTP server disabled, exiting...");
                return Ok(());
            }

            let caches = web::Data::new(caches);
            let request_logger = logger.clone();
            let mut server = HttpServer::new(move || {
                App::new()
                    .app_data(caches.clone())
                    .wrap(RequestIdMiddleware::new(request_logger.clone()))
                    .wrap(sentry_actix::Sentry::new())
                    .route("/health", web::get().to(health))
            });
            if let Some(threads) = config.http_server.threads {
                server = server.workers(threads as usize);
            }

            log_info!(logger, "[BOOT] Starting HTTP server on {}", config.http_server.bind_address);
            server.bind(config.http_server.bind_address.as_str())?
                .run()
                .await?;

            log_info!(logger, "[BOOT] HTTP server stopped.");
            Ok::<(), std::io::Error>(())
        })
}
