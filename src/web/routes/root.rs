use axum::response::Redirect;

pub const INDEX_PATH: &str = "/static/index.html";

/// `GET /` sends browsers to the static front-end with a 307.
pub async fn index_redirect() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}
