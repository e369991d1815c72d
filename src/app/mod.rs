use crate::prelude::*;

mod home;

pub struct AppState {
    pub config: Config,
    pub api: Api,
}

pub fn build(config: Config) -> Result<axum::Router<()>> {
    let state = Arc::new(AppState {
        api: Api::new(&config.api).context("building api client")?,
        config,
    });

    // Register business logic routes
    let r = AppRouter::new(&state);
    let r = home::add_routes(r);
    let (r, state) = r.finish();

    // Register app-wide routes
    let r = r.nest_service("/static", tower_http::services::ServeDir::new("frontend/static"));
    // For non-HTML pages without a <link rel="icon">, this is where the browser looks
    let r = r.route("/favicon.ico", get(|| async { Redirect::to("/static/favicon.svg") }));
    let r = r.fallback(|| async { AppError::NotFound });

    // Register middleware
    let r = crate::utils::tracing::add_middleware(r);
    let r = r.with_state(state);

    Ok(r)
}
