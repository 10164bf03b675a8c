use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use time::Duration;
use tracing::info;

use crate::{
    error::AppError,
    pages,
    state::State as AppState,
    store::Choice,
};

/// Client-held marker asserting prior participation. Opaque and
/// server-unverified: clearing it defeats the duplicate check, an accepted
/// limitation of the design.
pub const VOTED_COOKIE: &str = "voted";

const MARKER_LIFETIME: Duration = Duration::hours(24);

#[derive(Deserialize)]
struct VoteForm {
    choice: Option<String>,
}

pub async fn index_handler() -> Redirect {
    Redirect::to("/vote")
}

pub async fn vote_page_handler() -> Html<&'static str> {
    Html(pages::VOTE_PAGE)
}

pub async fn submit_vote_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, AppError> {
    // The body is taken raw so the duplicate check can run before any of it
    // is parsed: a client that already voted learns nothing about whether
    // its payload was valid.
    if jar.get(VOTED_COOKIE).is_some() {
        return Ok(Html(pages::ALREADY_VOTED_PAGE).into_response());
    }

    let form: VoteForm =
        serde_urlencoded::from_bytes(&body).map_err(|_| AppError::InvalidChoice)?;
    let choice = form
        .choice
        .as_deref()
        .and_then(Choice::parse)
        .ok_or(AppError::InvalidChoice)?;

    let tally = state.store.record_vote(choice)?;
    info!(
        "vote recorded for {choice}: jjajangmyeon={}, jjamppong={}",
        tally.jjajangmyeon, tally.jjamppong
    );

    let marker = Cookie::build((VOTED_COOKIE, "true"))
        .path("/")
        .max_age(MARKER_LIFETIME)
        .build();

    Ok((jar.add(marker), Redirect::to("/result")).into_response())
}

pub async fn result_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::result_page(&state.store.load()))
}
