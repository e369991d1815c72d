mod api;
mod app;
mod prelude;
mod utils;
mod views;

use anyhow::Context as _;
use axum_server::tls_rustls::RustlsConfig;
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};
use utils::config::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_filter = tracing_subscriber::filter::Targets::default()
        .with_target("h2", LevelFilter::OFF)
        .with_target("hyper_util", LevelFilter::INFO)
        .with_target("rustls", LevelFilter::OFF)
        .with_default(Level::DEBUG);

    tracing_subscriber::fmt()
        .pretty()
        .with_target(true)
        .with_line_number(true)
        .with_max_level(Level::DEBUG)
        .finish()
        .with(log_filter)
        .try_init()?;

    // Load the config, if one was given
    let file = std::env::args().nth(1);
    let config = Config::resolve(file.as_deref()).await?;
    views::dates::set_format(views::dates::DateFormat::from(&config.app));
    tracing::info!("Using events API at {}", &config.api.base_url);

    let app = app::build(config.clone())?.into_make_service();
    tracing::info!("Live at {}", &config.app.url);

    match config.tls {
        Some(tls) => {
            // reqwest pulls in ring as well, so the server's provider has to be picked explicitly
            let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
            let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                .await
                .with_context(|| format!("loading tls cert={} key={}", tls.cert.display(), tls.key.display()))?;
            axum_server::bind_rustls(config.net.http_addr, rustls).serve(app).await?;
        }
        None => {
            axum_server::bind(config.net.http_addr).serve(app).await?;
        }
    }

    Ok(())
}
