use actix_web::HttpResponse;

/// Liveness probe, responds 200 with an empty body
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
