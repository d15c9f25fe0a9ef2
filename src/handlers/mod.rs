pub mod health_handler;
pub mod quiz_handler;
pub mod search_handler;

pub use health_handler::health_check;
pub use quiz_handler::create_quiz;
pub use search_handler::{search, search_trending};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_quiz)
        .service(search)
        .service(search_trending)
        .service(health_check);
}
