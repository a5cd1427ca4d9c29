use actix_web::{web, HttpResponse};

pub mod items;

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the Stockroom API")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .configure(crate::health::configure_routes)
        .configure(items::configure_routes);
}
