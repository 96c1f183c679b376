use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use rust_embed::RustEmbed;

/// Trunk build output of the `ui` crate
#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = uri.path().trim_start_matches('/');

        let path = if path.is_empty() { "index.html" } else { path };

        match Asset::get(path) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref().to_string())], content.data).into_response()
            }
            None => {
                // Single page: every unknown path gets the shell
                if let Some(content) = Asset::get("index.html") {
                    ([(header::CONTENT_TYPE, "text/html; charset=utf-8".to_string())], content.data)
                        .into_response()
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        "UI assets not built; run `trunk build` in ui/",
                    )
                        .into_response()
                }
            }
        }
    }
}
