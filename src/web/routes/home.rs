use anyhow::Context as _;
use axum::{extract::State, response::Html};
use chrono::{Datelike, Utc};
use tera::Context;

use crate::{
    web::{data::HomePage, WebResult},
    AppState,
};

pub async fn home(State(app_state): State<AppState>) -> WebResult<Html<String>> {
    let page = HomePage::new(&app_state.site, Utc::now().year());

    let ctx = Context::from_serialize(&page).context("failed to build the home page context")?;
    let body = app_state
        .templ_mgr
        .render_html("home.html", &ctx)
        .context("tera failed to render 'html/home.html' template")?;

    Ok(Html(body))
}
