use jubilee::api;
use jubilee::logger::*;
use jubilee::server::*;
use jubilee::settings::*;
use std::sync::Arc;
use tokio::signal;
use warp::Filter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_filter(&project_settings.log.filter)?;

    let address: std::net::SocketAddr = project_settings.http.address.parse()?;

    let server = Arc::new(Server::try_new(&project_settings).await?);

    let api = api::v1::routes(server.clone()).recover(api::v1::recover_error);

    warp::serve(api)
        .bind_with_graceful_shutdown(address, async {
            signal::ctrl_c().await.expect("Could not register SIGINT");
        })
        .1
        .await;

    let shutdown_timeout = std::time::Duration::from_secs(10);
    match tokio::time::timeout(shutdown_timeout, server.shutdown()).await {
        Ok(_) => tracing::info!("server shutdown successfully"),
        Err(_) => tracing::error!("server shutdown timed out"),
    }

    Ok(())
}
