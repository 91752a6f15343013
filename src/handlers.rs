use crate::errors::AppError;
use crate::models::{BoardResponse, CompleteRequest, FilterForm, MethodFilter};
use crate::state::AppState;
use crate::sync::{self, BoardView};
use crate::ui::render_board;
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut view = state.view.lock().await;
    sync::refresh(state.store.as_ref(), &mut view).await;
    Html(render_board(&view))
}

pub async fn set_filter(
    State(state): State<AppState>,
    Form(form): Form<FilterForm>,
) -> Result<Redirect, AppError> {
    let filter: MethodFilter = form
        .method
        .parse()
        .map_err(|_| AppError::bad_request("method must be 'all', 'Clicks' or 'Length'"))?;

    let mut view = state.view.lock().await;
    view.filter = filter;
    sync::refresh(state.store.as_ref(), &mut view).await;
    Ok(Redirect::to("/"))
}

pub async fn complete(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let mut view = state.view.lock().await;
    sync::mark_completed(state.store.as_ref(), &mut view, id).await;
    Redirect::to("/")
}

pub async fn toggle_tomorrow(State(state): State<AppState>) -> Redirect {
    let mut view = state.view.lock().await;
    view.show_tomorrow = !view.show_tomorrow;
    Redirect::to("/")
}

pub async fn get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let mut view = state.view.lock().await;
    sync::refresh(state.store.as_ref(), &mut view).await;
    Json(to_response(&view))
}

pub async fn api_complete(
    State(state): State<AppState>,
    Json(payload): Json<CompleteRequest>,
) -> Json<BoardResponse> {
    let mut view = state.view.lock().await;
    sync::mark_completed(state.store.as_ref(), &mut view, payload.id).await;
    Json(to_response(&view))
}

fn to_response(view: &BoardView) -> BoardResponse {
    BoardResponse {
        filter: view.filter,
        patient: view.patient.clone(),
        pending: view.pending.clone(),
        completed: view.completed.clone(),
        tomorrow: view.tomorrow.clone(),
        show_tomorrow: view.show_tomorrow,
        notices: view.notices.clone(),
    }
}
