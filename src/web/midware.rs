use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::web::{log, Error, REQUEST_ID_HEADER};

/// Turns a `web::Error` stashed in the response extensions into the JSON body the client sees:
/// `{"detail": "...", "req_id": "..."}`. Every response gets logged on the way out.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    // The request id was already propagated to the response headers, see `web::serve`.
    let req_id = resp
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let web_error = resp.extensions().get::<Arc<Error>>().map(Arc::as_ref);
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let client_error_body = json!({
            "detail": cl_err.to_string(),
            "req_id": req_id,
        });

        let mut err_resp = (*status, Json(client_error_body)).into_response();
        if let Ok(header) = HeaderValue::from_str(&req_id) {
            err_resp.headers_mut().insert(REQUEST_ID_HEADER, header);
        }
        err_resp
    });

    let status_code = client_status_and_error
        .as_ref()
        .map(|(sc, _)| *sc)
        .unwrap_or(resp.status());
    log::log_request(
        &req_id,
        &req_method,
        &uri,
        status_code,
        web_error,
        client_status_and_error.as_ref().map(|(_, ce)| ce),
    );

    err_resp.unwrap_or(resp)
}
