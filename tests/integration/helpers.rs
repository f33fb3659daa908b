//! Shared test helpers for integration tests.

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Duration, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower::ServiceExt;
use uuid::Uuid;

use tablehub_core::config::app::ServerConfig;
use tablehub_core::config::auth::AuthConfig;
use tablehub_core::config::logging::LoggingConfig;
use tablehub_core::config::session::SessionConfig;
use tablehub_core::config::{AppConfig, DatabaseConfig};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Held for the lifetime of the test so database cleanup in one test
    /// cannot race another.
    _guard: OwnedMutexGuard<()>,
}

fn suite_lock() -> Arc<Mutex<()>> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    Arc::clone(LOCK.get_or_init(|| Arc::new(Mutex::new(()))))
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        let Ok(database_url) = std::env::var("TABLEHUB_TEST_DATABASE_URL") else {
            eprintln!("TABLEHUB_TEST_DATABASE_URL not set; skipping integration test");
            return None;
        };

        let guard = suite_lock().lock_owned().await;

        let breach_api_url = spawn_breach_stub().await;

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: database_url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig {
                pin_salt: "integration-pepper".to_string(),
                // Lighter Argon2 profile than production so the suite stays
                // fast.
                argon2_memory_cost_kib: 1024,
                argon2_time_cost: 1,
                breach_api_url,
                ..AuthConfig::default()
            },
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db_pool = tablehub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        tablehub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let owner_repo = Arc::new(tablehub_database::repositories::owner::OwnerRepository::new(
            db_pool.clone(),
        ));
        let employee_repo = Arc::new(
            tablehub_database::repositories::employee::EmployeeRepository::new(db_pool.clone()),
        );
        let session_repo = Arc::new(
            tablehub_database::repositories::session::SessionRepository::new(db_pool.clone()),
        );
        let invite_repo = Arc::new(
            tablehub_database::repositories::invite::InviteRepository::new(db_pool.clone()),
        );
        let table_repo = Arc::new(tablehub_database::repositories::table::TableRepository::new(
            db_pool.clone(),
        ));
        let provisioner = Arc::new(tablehub_database::provision::AccountProvisioner::new(
            db_pool.clone(),
        ));

        let hasher = Arc::new(tablehub_auth::password::hasher::CredentialHasher::new(
            &config.auth,
        ));
        let strength = Arc::new(
            tablehub_auth::password::strength::PasswordStrengthChecker::new(&config.auth)
                .expect("Failed to build strength checker"),
        );
        let invite_gate = Arc::new(tablehub_auth::invite::InviteGate::new(Arc::clone(
            &invite_repo,
        )));
        let session_validator = Arc::new(tablehub_auth::session::validator::SessionValidator::new(
            Arc::clone(&session_repo),
            Arc::clone(&owner_repo),
            Arc::clone(&employee_repo),
            config.session.ttl(),
        ));

        let auth_service = Arc::new(tablehub_service::auth::AuthService::new(
            Arc::clone(&owner_repo),
            Arc::clone(&employee_repo),
            Arc::clone(&session_repo),
            Arc::clone(&provisioner),
            Arc::clone(&invite_gate),
            Arc::clone(&hasher),
            Arc::clone(&strength),
            config.session.ttl(),
        ));
        let account_service = Arc::new(tablehub_service::account::AccountService::new(
            Arc::clone(&employee_repo),
            Arc::clone(&hasher),
        ));
        let table_service = Arc::new(tablehub_service::table::TableService::new(Arc::clone(
            &table_repo,
        )));

        let app_state = tablehub_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            session_validator,
            auth_service,
            account_service,
            table_service,
        };

        let router = tablehub_api::router::build_router(app_state);

        Some(Self {
            router,
            db_pool,
            config,
            _guard: guard,
        })
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        // Order respects foreign keys (invite_codes.used_by -> owners).
        let tables = [
            "sessions",
            "invite_codes",
            "dining_tables",
            "employees",
            "owners",
            "restaurants",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Seed an invite code expiring `expires_in` from now.
    pub async fn seed_invite(&self, code: &str, expires_in: Duration) {
        let repo =
            tablehub_database::repositories::invite::InviteRepository::new(self.db_pool.clone());
        repo.create(code, Utc::now() + expires_in)
            .await
            .expect("Failed to seed invite");
    }

    /// Create a restaurant and owner directly, bypassing signup.
    pub async fn create_owner(&self, email: &str) -> Uuid {
        let restaurant_id: Uuid =
            sqlx::query_scalar("INSERT INTO restaurants DEFAULT VALUES RETURNING id")
                .fetch_one(&self.db_pool)
                .await
                .expect("Failed to create restaurant");

        sqlx::query_scalar(
            "INSERT INTO owners (restaurant_id, email, password_hash) \
             VALUES ($1, $2, 'unusable') RETURNING id",
        )
        .bind(restaurant_id)
        .bind(email)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create owner")
    }

    /// Insert a session row directly with the given expiry.
    pub async fn insert_session(&self, principal_id: Uuid, expires_at: DateTime<Utc>) {
        sqlx::query(
            "INSERT INTO sessions (principal_id, principal_kind, hashed_token, expires_at) \
             VALUES ($1, 'owner', $2, $3)",
        )
        .bind(principal_id)
        .bind(Uuid::new_v4().to_string())
        .bind(expires_at)
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert session");
    }

    /// Look up an owner id by email.
    pub async fn owner_id_by_email(&self, email: &str) -> Option<Uuid> {
        sqlx::query_scalar("SELECT id FROM owners WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await
            .expect("Failed to query owner")
    }

    /// The consumer recorded on an invite code, if any.
    pub async fn invite_used_by(&self, code: &str) -> Option<Uuid> {
        sqlx::query_scalar("SELECT used_by FROM invite_codes WHERE code = $1")
            .bind(code)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to query invite")
    }

    /// Number of session rows for a principal.
    pub async fn session_count(&self, principal_id: Uuid) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE principal_id = $1")
            .bind(principal_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count sessions")
    }

    /// Sign up an owner through the HTTP surface.
    pub async fn signup(&self, email: &str, password: &str, invite_code: &str) -> TestResponse {
        self.request(
            "POST",
            "/auth/signup",
            Some(serde_json::json!({
                "email": email,
                "password": password,
                "inviteCode": invite_code,
            })),
            None,
        )
        .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        session_token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = session_token {
            req = req.header(
                "Cookie",
                format!("{}={}", self.config.session.cookie_name, token),
            );
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header, if present
    pub set_cookie: Option<String>,
}

impl TestResponse {
    /// The raw session token carried in the response cookie.
    pub fn session_token(&self) -> Option<String> {
        let cookie = self.set_cookie.as_deref()?;
        let value = cookie.strip_prefix("sessionToken=")?;
        let token = value.split(';').next()?.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

/// Stand-in for the breach-range API: serves a fixed range body that never
/// matches a real password's suffix, so in-bounds passwords check as strong.
async fn spawn_breach_stub() -> String {
    let router = Router::new().route(
        "/{prefix}",
        axum::routing::get(|| async { "0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n" }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind breach stub");
    let addr = listener.local_addr().expect("Failed to read stub address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{}", addr)
}
