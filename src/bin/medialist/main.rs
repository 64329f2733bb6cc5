use anyhow::Context as _;
use medialist::{Config, Listing};

const CONFIG_LOCATION: &str = "medialist.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "medialist=debug");
    }

    let opts = alto_logger::Options::default()
        .with_time(alto_logger::options::TimeConfig::date_time_format("%c"));
    alto_logger::init(alto_logger::TermLogger::new(opts)?).expect("init logger");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG_LOCATION.to_string());

    let config = if std::path::Path::new(&path).exists() {
        Config::load(&path).await?
    } else {
        log::info!("no config at '{}', using the defaults", path);
        Config::default()
    };

    let listing = Listing::new(&config, config.token());
    if !listing.has_token() {
        log::warn!(
            "{} is not set. every request will fail until it is",
            config.repository.token_env
        );
    }

    let addr: std::net::SocketAddr = config
        .web
        .listen_address
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.web.listen_address))?;

    let routes = medialist::http::routes(listing, &config.web.route);
    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        let _ = tokio::signal::ctrl_c().await;
        log::info!("shutting down");
    });

    log::info!(
        "serving {}/{} at http://{}/{}",
        config.repository.owner,
        config.repository.repo,
        addr,
        config.web.route.trim_matches('/')
    );
    server.await;

    Ok(())
}
