use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{
    filter::FilterFn,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod checks;
mod config;
mod http;

use config::read_config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/albums/config.toml")]
    config: String,

    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let max_level = args.log_level;

    // hyper and h2 are far too chatty at debug
    let crate_filter = FilterFn::new(move |metadata| {
        metadata.level() <= &max_level
            && !metadata.target().starts_with("h2")
            && !metadata.target().starts_with("hyper")
    })
    .with_max_level_hint(max_level);

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(crate_filter))
        .init();

    info!("albums server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("performing doc_root sanity checks");

    checks::doc_root_has_index(&config.http).context("doc_root check failed")?;

    info!("startup complete!");

    http::svc::serve_http(config).await
}
