use std::{process, sync::Arc, time::Duration};

use pdr_portal::{
    application::{
        article::ArticleService, chrome::ChromeService, engagement::RandomViewCounter,
        engagement::ReadingRegistry, error::AppError, listing::ListingService,
    },
    config,
    domain::posts::PostCatalog,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tokio::{signal, sync::oneshot};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

fn build_http_state(settings: &config::Settings) -> HttpState {
    let catalog = PostCatalog::builtin();
    let views = Arc::new(RandomViewCounter::from_seed(
        settings.engagement.view_count_seed,
    ));

    HttpState {
        articles: Arc::new(ArticleService::new(catalog, views, &settings.site)),
        listing: Arc::new(ListingService::new(catalog)),
        chrome: Arc::new(ChromeService::new(settings.site.clone())),
        reading: ReadingRegistry::new(),
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let state = build_http_state(&settings);
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "pdr_portal::serve",
        addr = %settings.server.addr,
        public_url = %settings.site.public_url,
        posts = PostCatalog::builtin().all().len(),
        "listening"
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, router.into_make_service()).with_graceful_shutdown(
        async move {
            let _ = shutdown_rx.await;
        },
    );
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => return join_result(result),
        _ = shutdown_signal() => {
            info!(target = "pdr_portal::serve", "shutdown signal received");
        }
    }

    let _ = shutdown_tx.send(());
    drain(server, settings.server.graceful_shutdown).await
}

async fn drain(
    server: tokio::task::JoinHandle<std::io::Result<()>>,
    grace: Duration,
) -> Result<(), AppError> {
    let abort = server.abort_handle();
    match tokio::time::timeout(grace, server).await {
        Ok(result) => join_result(result),
        Err(_) => {
            warn!(
                target = "pdr_portal::serve",
                grace_seconds = grace.as_secs(),
                "graceful shutdown timed out; aborting open connections"
            );
            abort.abort();
            Ok(())
        }
    }
}

fn join_result(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(AppError::from(InfraError::from(err))),
        Err(err) => Err(AppError::unexpected(format!("server task failed: {err}"))),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(target = "pdr_portal::serve", error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(target = "pdr_portal::serve", error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
