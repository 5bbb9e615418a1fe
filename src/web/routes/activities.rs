use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{field, info, Span};

use crate::{
    store::Catalog,
    web::{
        types::{EmailQuery, MessageResponse, ValidEmail},
        WebResult,
    },
    AppState,
};

#[tracing::instrument(name = "Listing activities", skip(app_state))]
pub async fn list(State(app_state): State<AppState>) -> Json<Catalog> {
    Json(app_state.store.list().await)
}

#[tracing::instrument(
    name = "Signing up a student",
    skip_all,
    fields(activity = field::Empty, email = field::Empty)
)]
pub async fn signup(
    State(app_state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> WebResult<Json<MessageResponse>> {
    let activity_name = parse_activity_name(path)?;
    let email = parse_email(query)?;

    app_state
        .store
        .signup(&activity_name, email.as_ref())
        .await?;
    info!("SUCCESS!");

    Ok(Json(MessageResponse::new(format!(
        "Signed up {} for {activity_name}",
        email.as_ref()
    ))))
}

#[tracing::instrument(
    name = "Unregistering a student",
    skip_all,
    fields(activity = field::Empty, email = field::Empty)
)]
pub async fn unregister(
    State(app_state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> WebResult<Json<MessageResponse>> {
    let activity_name = parse_activity_name(path)?;
    let email = parse_email(query)?;

    app_state
        .store
        .unregister(&activity_name, email.as_ref())
        .await?;
    info!("SUCCESS!");

    Ok(Json(MessageResponse::new(format!(
        "Unregistered {} from {activity_name}",
        email.as_ref()
    ))))
}

/// Unwraps the percent-decoded activity name and records it on the current span.
fn parse_activity_name(path: Result<Path<String>, PathRejection>) -> WebResult<String> {
    let Path(activity_name) = path?;
    Span::current().record("activity", activity_name.as_str());

    Ok(activity_name)
}

/// Validates the `?email=` query and records it on the current span.
fn parse_email(query: Result<Query<EmailQuery>, QueryRejection>) -> WebResult<ValidEmail> {
    let Query(EmailQuery { email }) = query?;
    Span::current().record("email", email.as_str());

    Ok(ValidEmail::parse(email)?)
}
