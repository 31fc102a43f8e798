use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use folio_api::auth::identity_toolkit::IdentityToolkitProvider;
use folio_api::auth::memory::MemoryAuthProvider;
use folio_api::auth::provider::AuthProvider;
use folio_api::auth::session::AuthSession;
use folio_api::config::{BackendKind, DevAdmin, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::config::FirebaseConfig;
use folio_db::firestore::FirestoreStore;
use folio_db::memory::MemoryStore;
use folio_db::DocumentStore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Store and auth provider for the selected backend, plus the background
/// tasks that keep them in step.
struct Backend {
    store: Arc<dyn DocumentStore>,
    provider: Arc<dyn AuthProvider>,
    tasks: Vec<JoinHandle<()>>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=debug,folio_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend = ?config.backend,
        "Loaded server configuration",
    );

    // --- Backend ---
    let cancel = CancellationToken::new();
    let backend = match config.backend {
        BackendKind::Firebase => firebase_backend(&cancel),
        BackendKind::Memory => memory_backend().await,
    };

    // --- Auth session ---
    let auth = AuthSession::start(backend.provider);
    auth.ready().await;
    tracing::info!("Auth session ready");

    // --- App state + router ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let state = AppState::new(config.clone(), backend.store, Arc::clone(&auth));
    let app = build_app_router(state, &config);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    cancel.cancel();
    for task in backend.tasks {
        let _ = tokio::time::timeout(Duration::from_secs(5), task).await;
    }
    tracing::info!("Backend tasks stopped");

    auth.shutdown().await;
    tracing::info!("Graceful shutdown complete");
}

/// Firestore + Identity Toolkit. Spawns the token refresh loop and a task
/// that hands each new id token to the store.
fn firebase_backend(cancel: &CancellationToken) -> Backend {
    let firebase = FirebaseConfig::from_env();
    tracing::info!(project_id = %firebase.project_id, "Using Firebase backend");

    let store = Arc::new(FirestoreStore::new(&firebase));
    let provider = Arc::new(IdentityToolkitProvider::new(&firebase));

    let refresh = tokio::spawn(Arc::clone(&provider).run_token_refresh(cancel.clone()));

    let forwarder = tokio::spawn({
        let store = Arc::clone(&store);
        let mut sessions = provider.subscribe();
        let cancel = cancel.clone();
        async move {
            loop {
                let token = sessions
                    .borrow_and_update()
                    .as_ref()
                    .map(|s| s.id_token.clone());
                store.set_id_token(token).await;

                tokio::select! {
                    () = cancel.cancelled() => break,
                    changed = sessions.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("Id token forwarder stopped");
        }
    });

    Backend {
        store,
        provider,
        tasks: vec![refresh, forwarder],
    }
}

/// In-process store and auth provider with one seeded admin account.
async fn memory_backend() -> Backend {
    let admin = DevAdmin::from_env();
    let provider = Arc::new(MemoryAuthProvider::new());
    provider.add_account(&admin.email, &admin.password).await;
    tracing::warn!(email = %admin.email, "Using in-memory backend; data is not persisted");

    Backend {
        store: Arc::new(MemoryStore::new()),
        provider,
        tasks: Vec::new(),
    }
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
