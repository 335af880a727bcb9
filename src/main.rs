use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use protrack_api_rust::database::seed;
use protrack_api_rust::middleware::{catch_panic_middleware, jwt_auth_middleware};
use protrack_api_rust::services::queue_listener;
use protrack_api_rust::{config, database, handlers};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting ProTrack API in {:?} mode", config.environment);

    // Schema bootstrap and demo seed. A dead database does not stop the
    // server; /health reports it as degraded instead.
    if let Err(e) = seed::initialize().await {
        tracing::error!("Database initialization failed: {}", e);
    }

    queue_listener::spawn();

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("PROTRACK_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 ProTrack API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let config = config::config();

    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected API behind bearer auth
        .merge(api_routes())
        // Uploaded profile pictures
        .nest_service("/uploads", ServeDir::new(&config.uploads.directory))
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer());

    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    // Outermost layer: any panic below becomes the fixed 500 response
    app.layer(axum::middleware::from_fn(catch_panic_middleware))
}

fn auth_public_routes() -> Router {
    use axum::routing::post;
    use handlers::public::auth;

    Router::new().route("/api/auth/login", post(auth::login))
}

fn api_routes() -> Router {
    use axum::routing::{delete, post, put};
    use handlers::protected::{profile, projects, tasks, users};

    Router::new()
        // Own profile
        .route(
            "/api/user/profile",
            get(profile::profile_get).put(profile::profile_put),
        )
        // User administration
        .route("/api/user/employees", get(users::employees_get))
        .route(
            "/api/user/employees/:user_id",
            put(users::employee_put).delete(users::employee_delete),
        )
        .route("/api/user/create", post(users::user_post))
        // Projects and membership
        .route(
            "/api/project",
            get(projects::project_get).post(projects::project_post),
        )
        .route(
            "/api/project/:project_id",
            put(projects::project_put).delete(projects::project_delete),
        )
        .route(
            "/api/project/:project_id/add-member/:user_id",
            post(projects::member_post),
        )
        .route(
            "/api/project/:project_id/remove-member/:user_id",
            delete(projects::member_delete),
        )
        // Tasks
        .route("/api/task", post(tasks::task_post))
        .route(
            "/api/task/project/:project_id",
            get(tasks::project_tasks_get),
        )
        .route("/api/task/:task_id/complete", put(tasks::task_complete_put))
        .route(
            "/api/task/:task_id",
            put(tasks::task_put).delete(tasks::task_delete),
        )
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}

fn cors_layer() -> CorsLayer {
    let security = &config::config().security;

    if !security.enable_cors {
        return CorsLayer::new();
    }

    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "ProTrack API",
            "version": version,
            "description": "Project and task management API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "login": "/api/auth/login (public - token acquisition)",
                "profile": "/api/user/profile (protected)",
                "users": "/api/user/employees[/:user_id], /api/user/create (protected - admin)",
                "projects": "/api/project[/:project_id] (protected)",
                "members": "/api/project/:project_id/add-member/:user_id and remove-member (protected - admin)",
                "tasks": "/api/task, /api/task/project/:project_id, /api/task/:task_id (protected)",
                "uploads": "/uploads/:file (public - profile pictures)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "healthy",
                    "timestamp": now,
                    "database": "connected"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
