use actix_web::{web, App, HttpServer};

use backend::api;
use backend::db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // The connection descriptor is the one required piece of configuration;
    // without it the process must not start serving.
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            log::error!("DATABASE_URL environment variable is not set");
            std::process::exit(1);
        }
    };
    let pool = db::init_pool(&database_url);

    log::info!("Starting BTC price export backend at http://0.0.0.0:5001");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(api::config)
    })
    .bind(("0.0.0.0", 5001))?
    .run()
    .await
}
