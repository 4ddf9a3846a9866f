//! HTML page handlers: index, submission form, view, raw, delete.

use crate::error::HttpError;
use crate::models::paste::CreatePasteRequest;
use crate::render;
use crate::AppState;
use axum::{
    extract::{Form, Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use quickpaste_core::AppError;
use serde::Deserialize;

/// Query parameters accepted by the index page.
#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub page: Option<i64>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn requested_page(page: Option<i64>) -> usize {
    // Negative or absent page numbers collapse to 0; the store clamps the
    // rest of the range.
    usize::try_from(page.unwrap_or(1)).unwrap_or(0)
}

/// Render the paginated index page.
///
/// # Errors
/// `500` when the store cannot be read.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, HttpError> {
    let page = requested_page(query.page);
    let (pastes, total_pages) = state.store.list(page, state.config.page_size)?;
    let page = page.clamp(1, total_pages);
    Ok(Html(render::index_page(
        &pastes,
        page,
        total_pages,
        query.message.as_deref(),
        query.kind.as_deref(),
    )))
}

/// Handle the HTML submission form.
///
/// Validation failures surface as a flash banner on the index page rather
/// than an error status; only storage faults escape as HTTP errors.
pub async fn create_paste(
    State(state): State<AppState>,
    Form(form): Form<CreatePasteRequest>,
) -> Result<Redirect, HttpError> {
    match state
        .store
        .create(&form.content, form.title.as_deref(), form.language.as_deref())
    {
        Ok(paste) => Ok(render::flash_redirect(
            &format!("Paste created successfully! ID: {}", paste.id),
            "success",
        )),
        Err(AppError::Validation(err)) => Ok(render::flash_redirect(&err.to_string(), "error")),
        Err(err) => Err(err.into()),
    }
}

/// Render a single paste.
///
/// # Errors
/// `404` when the id resolves no record.
pub async fn view_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, HttpError> {
    let paste = state.store.get(&id)?.ok_or(AppError::NotFound)?;
    Ok(Html(render::view_page(&paste)))
}

/// Serve the raw paste body as plain text.
///
/// # Errors
/// `404` when the id resolves no record.
pub async fn raw_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    let paste = state.store.get(&id)?.ok_or(AppError::NotFound)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        paste.content,
    )
        .into_response())
}

/// Delete by id and bounce back to the index with a flash message.
///
/// An unknown id redirects with an error banner instead of a 404, keeping
/// the page flow intact.
pub async fn delete_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, HttpError> {
    if state.store.delete(&id)? {
        Ok(render::flash_redirect(
            "Paste deleted successfully!",
            "success",
        ))
    } else {
        Ok(render::flash_redirect("Paste not found!", "error"))
    }
}
