use actix_web::{HttpResponse, Responder, get, post, web};
use parla_translate::Translator;
use parla_translate::wire::{
    SERVICE_UNAVAILABLE, TranslateFailure, TranslateRequest, TranslateResponse,
};

use crate::state::AppState;

/// Simple health check route
#[get("/health")]
pub async fn health() -> impl Responder {
    "OK"
}

/// One outbound provider call per request. Every failure collapses into the
/// same 500 body so no provider or configuration detail leaks to clients.
#[post("/translate")]
pub async fn translate(
    app: web::Data<AppState>,
    body: web::Json<TranslateRequest>,
) -> impl Responder {
    let request = body.into_inner();
    tracing::debug!(
        "translate request ({} -> {}, {} chars)",
        request.input_lang,
        request.target_lang,
        request.text.len()
    );

    match app
        .translator
        .translate(&request.text, &request.input_lang, &request.target_lang)
        .await
    {
        Ok(translated_text) => HttpResponse::Ok().json(TranslateResponse { translated_text }),
        Err(err) => {
            tracing::error!("translation failed: {err}");
            HttpResponse::InternalServerError().json(TranslateFailure {
                error: SERVICE_UNAVAILABLE.to_string(),
            })
        }
    }
}
