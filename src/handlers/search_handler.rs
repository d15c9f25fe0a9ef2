use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{SearchParams, TrendingParams},
};

#[get("/search")]
async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.search_service.search(&query.query).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/search_trending")]
async fn search_trending(
    state: web::Data<AppState>,
    query: web::Query<TrendingParams>,
) -> Result<HttpResponse, AppError> {
    let max = query.max.unwrap_or(state.config.trending_default_max);
    let response = state.search_service.search_trending(max).await?;
    Ok(HttpResponse::Ok().json(response))
}
