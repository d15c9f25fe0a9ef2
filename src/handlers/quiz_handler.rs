use actix_web::{post, web, HttpRequest, HttpResponse};
use log::info;

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::QuizRequest,
};

#[post("/quiz")]
async fn create_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    info!(
        "[{}] Quiz requested (topic: {:?}, text sections: {})",
        get_request_id(&req).unwrap_or_default(),
        request.topic,
        request.text.as_ref().map_or(0, Vec::len)
    );
    let response = state.quiz_service.quiz(request).await?;
    Ok(HttpResponse::Ok().json(response))
}
