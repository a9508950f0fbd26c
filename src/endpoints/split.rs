use actix_web::{
    post,
    web::{self, Json},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_state::AppState;
use crate::utils::split_text::{grapheme_len, split_text_into_chunks};

#[derive(Deserialize)]
pub struct SplitRequest {
    pub input: String,
    pub max_length: Option<i64>,
}

/// One chunk as rendered by the frontend: 1-based position, the text
/// itself and its length in graphemes.
#[derive(Serialize)]
pub struct ChunkView {
    pub index: usize,
    pub text: String,
    pub length: usize,
}

#[derive(Serialize)]
pub struct SplitResponse {
    pub chunks: Vec<ChunkView>,
    pub count: usize,
}

#[post("/split")]
pub async fn split_text(
    state: web::Data<AppState>,
    payload: Json<SplitRequest>,
) -> impl Responder {
    info!("POST /split endpoint called");

    // 1) Resolve the chunk size, falling back to the configured default
    let max_length = payload
        .max_length
        .unwrap_or(state.default_max_length as i64);

    // Non-positive sizes are a no-op, not an error
    if max_length <= 0 {
        info!("Non-positive max_length {}, returning no chunks", max_length);
        return HttpResponse::Ok().json(SplitResponse {
            chunks: Vec::new(),
            count: 0,
        });
    }

    // 2) Split the text at word boundaries
    let chunks = split_text_into_chunks(&payload.input, max_length as usize);
    info!("Number of chunks created: {}", chunks.len());

    // 3) Attach display position and character count to each chunk
    let chunks: Vec<ChunkView> = chunks
        .into_iter()
        .enumerate()
        .map(|(i, text)| ChunkView {
            index: i + 1,
            length: grapheme_len(&text),
            text,
        })
        .collect();

    let count = chunks.len();
    HttpResponse::Ok().json(SplitResponse { chunks, count })
}
