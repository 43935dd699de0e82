use axum::{http::StatusCode, response::{IntoResponse, Response}};

#[macro_export]
macro_rules! include_res {
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub fn sorry(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("Couldn't find {what} id."),
    )
        .into_response()
}
