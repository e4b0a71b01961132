use crate::models::NewPlayer;
use crate::state::AppState;
use crate::ui::{
    render_missing_player_page, render_player_page, render_roster_page,
    ROSTER_UNAVAILABLE_NOTICE,
};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use tracing::error;

/// List view: fetch the whole roster fresh and render form + cards. A failed
/// fetch renders the defined unavailable state instead of a partial page.
pub async fn roster(State(state): State<AppState>) -> Html<String> {
    match state.client.fetch_all_players().await {
        Ok(players) => Html(render_roster_page(&players, None)),
        Err(err) => {
            error!("failed to fetch roster: {err}");
            Html(render_roster_page(&[], Some(ROSTER_UNAVAILABLE_NOTICE)))
        }
    }
}

pub async fn player_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Html<String> {
    match state.client.fetch_single_player(id).await {
        Ok(detail) => Html(render_player_page(&detail)),
        Err(err) => {
            error!("failed to fetch player #{id}: {err}");
            Html(render_missing_player_page(id))
        }
    }
}

/// Create, then redirect to the list so it is re-fetched and re-rendered.
/// The form fields go to the remote API verbatim.
pub async fn create_player(
    State(state): State<AppState>,
    Form(fields): Form<NewPlayer>,
) -> Redirect {
    if let Err(err) = state.client.add_new_player(&fields).await {
        error!("failed to create player: {err}");
    }
    Redirect::to("/")
}

/// Delete, then redirect to the list. No optimistic removal: the re-fetched
/// roster is the source of truth either way.
pub async fn delete_player(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    if let Err(err) = state.client.remove_player(id).await {
        error!("failed to remove player #{id}: {err}");
    }
    Redirect::to("/")
}
