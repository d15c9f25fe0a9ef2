use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health_check")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.quiz_service.health_check().await)
}
