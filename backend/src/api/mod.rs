use actix_web::web;

pub mod prices;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(prices::get_prices_csv)
        .service(prices::get_prices_json);
}
