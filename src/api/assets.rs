//! Stylesheet and page script, compiled into the binary

use axum::{http::header, response::IntoResponse};

const STYLESHEET: &str = include_str!("../../assets/css/style.css");
const SCRIPT: &str = include_str!("../../assets/js/dashboard.js");

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT)
}
