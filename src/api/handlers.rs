use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::FilmSummary;
use crate::error::LookupError;
use crate::lookup::FilmService;

use super::models::{ChatReply, FilmRequest, MessageRequest};

pub const HELP_TEXT: &str = "This bot looks up films.\nEnter the title of your film:\n";
pub const FAILURE_TEXT: &str = "Sorry, I could not find that film.";

pub async fn film_handler(
    State(service): State<Arc<FilmService>>,
    Json(request): Json<FilmRequest>,
) -> Result<Json<FilmSummary>, (StatusCode, String)> {
    let start = Instant::now();

    let summary = service
        .film_info(&request.title)
        .await
        .map_err(|e| (status_for(&e), format!("Lookup error: {}", e)))?;

    log::info!(
        "film lookup for {:?} took {} ms",
        request.title,
        start.elapsed().as_millis()
    );
    Ok(Json(summary))
}

/// Routes a chat message: help commands get the help text, anything else is
/// treated as a film title.
pub async fn message_handler(
    State(service): State<Arc<FilmService>>,
    Json(request): Json<MessageRequest>,
) -> Json<ChatReply> {
    if is_help_command(&request.text) {
        return Json(ChatReply::Text {
            text: HELP_TEXT.to_string(),
        });
    }

    match service.film_info(&request.text).await {
        Ok(summary) => Json(ChatReply::Photo {
            caption: summary.caption(),
            photo: summary.poster_ref,
        }),
        Err(e) => {
            log::error!("film lookup for {:?} failed: {:#}", request.text, e);
            Json(ChatReply::Text {
                text: FAILURE_TEXT.to_string(),
            })
        }
    }
}

fn is_help_command(text: &str) -> bool {
    // "/help@SomeBot" is how group chats address a command to one bot.
    let command = text.split_whitespace().next().unwrap_or_default();
    let command = command.split('@').next().unwrap_or_default();
    ["/help", "/start"]
        .iter()
        .any(|known| command.eq_ignore_ascii_case(known))
}

fn status_for(err: &LookupError) -> StatusCode {
    match err {
        LookupError::NoResults { .. } => StatusCode::NOT_FOUND,
        LookupError::Transport { .. }
        | LookupError::Auth { .. }
        | LookupError::MalformedResponse(_)
        | LookupError::Parse(_) => StatusCode::BAD_GATEWAY,
    }
}

#[test]
fn test_is_help_command() {
    assert!(is_help_command("/help"));
    assert!(is_help_command("/start"));
    assert!(is_help_command("/start@film_bot"));
    assert!(is_help_command("/help me"));
    assert!(is_help_command("/START"));
    assert!(is_help_command("/Help@film_bot"));
    assert!(!is_help_command("Inception"));
    assert!(!is_help_command("/helpme"));
    assert!(!is_help_command(""));
}
