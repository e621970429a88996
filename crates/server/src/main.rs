// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::unused_async)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use knows_booking_api::{
    AdvanceOutcome, AdvanceResponse, ApiError, ApiResult, AvailabilityResponse, CatalogResponse,
    ConfirmationDocumentResponse, EnterDetailsRequest, FollowUp, OpenWizardResult,
    SelectDateRequest, SelectPackageRequest, SelectTimeSlotRequest, ToggleAddOnRequest,
    TracingNotifier, WizardStateResponse, advance_wizard, cancel_wizard, check_availability,
    confirmation_document, enter_details, get_catalog, open_wizard, select_date, select_package,
    select_time_slot, step_back, toggle_add_on,
};
use knows_booking_audit::Cause;
use knows_booking_domain::Catalog;
use knows_booking_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{error, info};

mod session;

use session::SessionRegistry;

/// Knows Booking Server - HTTP server for the Knows Studios booking funnel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The catalog is immutable reference data; persistence and the session
/// registry sit behind mutexes for safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The studio's published offering.
    catalog: Arc<Catalog>,
    /// The persistence layer for drafts and audit events.
    persistence: Arc<Mutex<Persistence>>,
    /// The live wizard sessions.
    sessions: Arc<Mutex<SessionRegistry>>,
}

/// Atomic counter for generating request-scoped cause IDs.
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Builds the audit cause for one HTTP request.
fn request_cause(description: &str) -> Cause {
    let id: u64 = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    Cause::new(format!("req_{id}"), description.to_string())
}

/// API request to select a package.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SelectPackageApiRequest {
    /// The package id (e.g. "full-day").
    package_id: String,
}

/// API request to select a booking date.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SelectDateApiRequest {
    /// The calendar date to book (ISO 8601).
    date: NaiveDate,
}

/// API request to select a time slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SelectTimeSlotApiRequest {
    /// The slot label (e.g. "10:00 AM").
    time_slot: String,
}

/// API request to toggle an add-on.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ToggleAddOnApiRequest {
    /// The add-on id (e.g. "premium-lighting").
    add_on_id: String,
}

/// API request to replace the contact fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct EnterDetailsApiRequest {
    /// The client's name.
    name: String,
    /// The client's email address.
    email: String,
    /// The client's phone number.
    phone: String,
    /// Free-text description of the planned shoot.
    #[serde(default)]
    project_notes: String,
}

/// Query parameters for the availability check.
#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    /// The candidate date (ISO 8601).
    date: NaiveDate,
}

/// API response for opening a wizard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenWizardApiResponse {
    /// The session token to use on subsequent requests.
    session_token: String,
    /// Whether a saved draft was rehydrated into this session.
    resumed_draft: bool,
    /// The initial wizard state.
    state: WizardStateResponse,
}

/// API response for closing a wizard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CloseSessionApiResponse {
    /// Success indicator.
    closed: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// The error returned when a session token does not resolve.
fn session_not_found(token: &str) -> HttpError {
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: format!("No wizard session for token '{token}'"),
    }
}

/// Schedules the post-completion external redirect on the runtime.
///
/// The returned handle lets the session abort the redirect if the visitor
/// closes out before the delay elapses.
fn schedule_follow_up(follow_up: &FollowUp) -> AbortHandle {
    let url: String = follow_up.url.clone();
    let delay: std::time::Duration = follow_up.delay;
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        info!(url = %url, "Opening external booking platform");
    });
    task.abort_handle()
}

/// Handler for GET `/api/catalog` endpoint.
///
/// Returns the studio's packages, add-ons, and time slots.
async fn handle_get_catalog(AxumState(app_state): AxumState<AppState>) -> Json<CatalogResponse> {
    info!("Handling get_catalog request");

    Json(get_catalog(&app_state.catalog))
}

/// Handler for GET `/api/availability` endpoint.
///
/// Checks whether a candidate date can be booked.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<AvailabilityResponse> {
    info!(date = %query.date, "Handling check_availability request");

    Json(check_availability(
        &app_state.catalog,
        query.date,
        Utc::now().date_naive(),
    ))
}

/// Handler for POST `/api/wizard` endpoint.
///
/// Opens a wizard session, rehydrating a fresh saved draft when one exists.
async fn handle_open_wizard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<OpenWizardApiResponse>, HttpError> {
    info!("Handling open_wizard request");

    let mut persistence = app_state.persistence.lock().await;
    let opened: OpenWizardResult = open_wizard(&mut persistence, &app_state.catalog, Utc::now())?;
    drop(persistence);

    let state: WizardStateResponse =
        WizardStateResponse::from_state(&app_state.catalog, &opened.state);

    let mut sessions = app_state.sessions.lock().await;
    let token: String = sessions.create(opened.state);
    drop(sessions);

    info!(
        token = %token,
        resumed_draft = opened.resumed_draft,
        "Wizard session opened"
    );

    Ok(Json(OpenWizardApiResponse {
        session_token: token,
        resumed_draft: opened.resumed_draft,
        state,
    }))
}

/// Handler for GET `/api/wizard/{token}` endpoint.
///
/// Returns the session's current wizard state.
async fn handle_get_wizard(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    let sessions = app_state.sessions.lock().await;
    let session = sessions
        .get(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let response: WizardStateResponse =
        WizardStateResponse::from_state(&app_state.catalog, &session.state);
    drop(sessions);

    Ok(Json(response))
}

/// Handler for DELETE `/api/wizard/{token}` endpoint.
///
/// Closes the session, aborting any pending follow-up redirect.
async fn handle_close_session(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<CloseSessionApiResponse>, HttpError> {
    info!(token = %token, "Handling close_session request");

    let mut sessions = app_state.sessions.lock().await;
    let closed: bool = sessions.close(&token);
    drop(sessions);

    if closed {
        Ok(Json(CloseSessionApiResponse { closed: true }))
    } else {
        Err(session_not_found(&token))
    }
}

/// Handler for POST `/api/wizard/{token}/package` endpoint.
async fn handle_select_package(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
    Json(req): Json<SelectPackageApiRequest>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    info!(
        token = %token,
        package_id = %req.package_id,
        "Handling select_package request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<WizardStateResponse> = select_package(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        SelectPackageRequest {
            package_id: req.package_id,
        },
        &token,
        request_cause("Select package"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = result.new_state;
    drop(sessions);

    Ok(Json(result.response))
}

/// Handler for POST `/api/wizard/{token}/date` endpoint.
async fn handle_select_date(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
    Json(req): Json<SelectDateApiRequest>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    info!(token = %token, date = %req.date, "Handling select_date request");

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<WizardStateResponse> = select_date(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        SelectDateRequest { date: req.date },
        &token,
        request_cause("Select date"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = result.new_state;
    drop(sessions);

    Ok(Json(result.response))
}

/// Handler for POST `/api/wizard/{token}/time-slot` endpoint.
async fn handle_select_time_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
    Json(req): Json<SelectTimeSlotApiRequest>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    info!(
        token = %token,
        time_slot = %req.time_slot,
        "Handling select_time_slot request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<WizardStateResponse> = select_time_slot(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        SelectTimeSlotRequest {
            time_slot: req.time_slot,
        },
        &token,
        request_cause("Select time slot"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = result.new_state;
    drop(sessions);

    Ok(Json(result.response))
}

/// Handler for POST `/api/wizard/{token}/add-on` endpoint.
async fn handle_toggle_add_on(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
    Json(req): Json<ToggleAddOnApiRequest>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    info!(
        token = %token,
        add_on_id = %req.add_on_id,
        "Handling toggle_add_on request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<WizardStateResponse> = toggle_add_on(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        ToggleAddOnRequest {
            add_on_id: req.add_on_id,
        },
        &token,
        request_cause("Toggle add-on"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = result.new_state;
    drop(sessions);

    Ok(Json(result.response))
}

/// Handler for POST `/api/wizard/{token}/details` endpoint.
async fn handle_enter_details(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
    Json(req): Json<EnterDetailsApiRequest>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    info!(token = %token, "Handling enter_details request");

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<WizardStateResponse> = enter_details(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        EnterDetailsRequest {
            name: req.name,
            email: req.email,
            phone: req.phone,
            project_notes: req.project_notes,
        },
        &token,
        request_cause("Enter contact details"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = result.new_state;
    drop(sessions);

    Ok(Json(result.response))
}

/// Handler for POST `/api/wizard/{token}/continue` endpoint.
///
/// Advances the wizard one step. The advance that completes the booking
/// additionally schedules the external follow-up redirect and retains the
/// booking record for the confirmation document.
async fn handle_advance(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<AdvanceResponse>, HttpError> {
    info!(token = %token, "Handling advance request");

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let outcome: AdvanceOutcome = advance_wizard(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        &token,
        request_cause("Continue pressed"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = outcome.new_state;
    if let Some(record) = outcome.booking {
        let follow_up: FollowUp = FollowUp::external_booking();
        session.cancel_follow_up();
        session.follow_up = Some(schedule_follow_up(&follow_up));
        session.booking = Some(record);
    }
    drop(sessions);

    Ok(Json(outcome.response))
}

/// Handler for POST `/api/wizard/{token}/back` endpoint.
async fn handle_step_back(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    info!(token = %token, "Handling step_back request");

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<WizardStateResponse> = step_back(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        &token,
        request_cause("Back pressed"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = result.new_state;
    drop(sessions);

    Ok(Json(result.response))
}

/// Handler for POST `/api/wizard/{token}/cancel` endpoint.
///
/// Resets the session to defaults, discards the saved draft, and aborts a
/// pending follow-up redirect if the visitor backed out of a completed
/// confirmation.
async fn handle_cancel(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<WizardStateResponse>, HttpError> {
    info!(token = %token, "Handling cancel request");

    let mut sessions = app_state.sessions.lock().await;
    let session = sessions
        .get_mut(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<WizardStateResponse> = cancel_wizard(
        &mut persistence,
        &app_state.catalog,
        &session.state,
        &token,
        request_cause("Wizard cancelled"),
        &TracingNotifier,
        Utc::now(),
    )?;
    drop(persistence);

    session.state = result.new_state;
    session.cancel_follow_up();
    session.booking = None;
    drop(sessions);

    Ok(Json(result.response))
}

/// Handler for GET `/api/wizard/{token}/confirmation` endpoint.
///
/// Returns the plain-text confirmation document as a download.
async fn handle_confirmation_document(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Response, HttpError> {
    info!(token = %token, "Handling confirmation_document request");

    let sessions = app_state.sessions.lock().await;
    let session = sessions
        .get(&token)
        .ok_or_else(|| session_not_found(&token))?;

    let record = session.booking.as_ref().ok_or_else(|| HttpError {
        status: StatusCode::NOT_FOUND,
        message: format!("No completed booking for token '{token}'"),
    })?;

    let doc: ConfirmationDocumentResponse = confirmation_document(record);
    drop(sessions);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                String::from("text/plain; charset=utf-8"),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", doc.filename),
            ),
        ],
        doc.content,
    )
        .into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/catalog", get(handle_get_catalog))
        .route("/api/availability", get(handle_check_availability))
        .route("/api/wizard", post(handle_open_wizard))
        .route("/api/wizard/{token}", get(handle_get_wizard))
        .route("/api/wizard/{token}", delete(handle_close_session))
        .route("/api/wizard/{token}/package", post(handle_select_package))
        .route("/api/wizard/{token}/date", post(handle_select_date))
        .route(
            "/api/wizard/{token}/time-slot",
            post(handle_select_time_slot),
        )
        .route("/api/wizard/{token}/add-on", post(handle_toggle_add_on))
        .route("/api/wizard/{token}/details", post(handle_enter_details))
        .route("/api/wizard/{token}/continue", post(handle_advance))
        .route("/api/wizard/{token}/back", post(handle_step_back))
        .route("/api/wizard/{token}/cancel", post(handle_cancel))
        .route(
            "/api/wizard/{token}/confirmation",
            get(handle_confirmation_document),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Knows Booking Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        catalog: Arc::new(Catalog::standard()),
        persistence: Arc::new(Mutex::new(persistence)),
        sessions: Arc::new(Mutex::new(SessionRegistry::new())),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            catalog: Arc::new(Catalog::standard()),
            persistence: Arc::new(Mutex::new(persistence)),
            sessions: Arc::new(Mutex::new(SessionRegistry::new())),
        }
    }

    /// Sends a GET request and returns the raw response.
    async fn get_request(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Sends a POST request with a JSON body and returns the raw response.
    async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Sends a bodyless POST request and returns the raw response.
    async fn post_empty(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Decodes a JSON response body.
    async fn body_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Opens a wizard session and returns its token.
    async fn open_session(app: &Router) -> String {
        let response = post_empty(app, "/api/wizard").await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let opened: OpenWizardApiResponse = body_json(response).await;
        opened.session_token
    }

    /// Walks a session to the details step with a valid schedule.
    async fn walk_to_details(app: &Router, token: &str) {
        let response = post_empty(app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = post_json(
            app,
            &format!("/api/wizard/{token}/date"),
            &serde_json::json!({ "date": "2099-06-15" }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = post_json(
            app,
            &format!("/api/wizard/{token}/time-slot"),
            &serde_json::json!({ "time_slot": "10:00 AM" }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = post_empty(app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = post_empty(app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_catalog_endpoint_lists_offering() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(&app, "/api/catalog").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let catalog: CatalogResponse = body_json(response).await;
        assert_eq!(catalog.packages.len(), 4);
        assert_eq!(catalog.add_ons.len(), 5);
        assert_eq!(catalog.default_package, "full-day");
    }

    #[tokio::test]
    async fn test_availability_endpoint_rejects_past_dates() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(&app, "/api/availability?date=1999-01-01").await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let past: AvailabilityResponse = body_json(response).await;
        assert!(!past.available);

        let response = get_request(&app, "/api/availability?date=2099-06-15").await;
        let future: AvailabilityResponse = body_json(response).await;
        assert!(future.available);
    }

    #[tokio::test]
    async fn test_open_wizard_starts_on_package_step_with_default() {
        let app: Router = build_router(create_test_app_state());

        let response = post_empty(&app, "/api/wizard").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let opened: OpenWizardApiResponse = body_json(response).await;
        assert!(!opened.resumed_draft);
        assert_eq!(opened.state.current_step, "SelectPackage");
        assert_eq!(opened.state.selected_package, "full-day");
        assert_eq!(opened.state.quote.total, 450);
    }

    #[tokio::test]
    async fn test_unknown_session_token_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = get_request(&app, "/api/wizard/wizard_0_0").await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);

        let error: ErrorResponse = body_json(response).await;
        assert!(error.error);
    }

    #[tokio::test]
    async fn test_select_unknown_package_returns_not_found() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        let response = post_json(
            &app,
            &format!("/api/wizard/{token}/package"),
            &serde_json::json!({ "package_id": "moon-studio" }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_continue_without_schedule_is_blocked() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        let response = post_empty(&app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = post_empty(&app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        // The blocked transition must not have moved the wizard.
        let response = get_request(&app, &format!("/api/wizard/{token}")).await;
        let state: WizardStateResponse = body_json(response).await;
        assert_eq!(state.current_step, "SelectDateTime");
    }

    #[tokio::test]
    async fn test_full_booking_flow_produces_confirmation() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        let response = post_empty(&app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        post_json(
            &app,
            &format!("/api/wizard/{token}/date"),
            &serde_json::json!({ "date": "2099-06-15" }),
        )
        .await;
        post_json(
            &app,
            &format!("/api/wizard/{token}/time-slot"),
            &serde_json::json!({ "time_slot": "10:00 AM" }),
        )
        .await;
        post_empty(&app, &format!("/api/wizard/{token}/continue")).await;

        post_json(
            &app,
            &format!("/api/wizard/{token}/add-on"),
            &serde_json::json!({ "add_on_id": "premium-lighting" }),
        )
        .await;
        post_json(
            &app,
            &format!("/api/wizard/{token}/add-on"),
            &serde_json::json!({ "add_on_id": "studio-assistant" }),
        )
        .await;
        post_empty(&app, &format!("/api/wizard/{token}/continue")).await;

        post_json(
            &app,
            &format!("/api/wizard/{token}/details"),
            &serde_json::json!({
                "name": "Ava Reyes",
                "email": "ava@example.com",
                "phone": "555-0142",
                "project_notes": "Lookbook shoot"
            }),
        )
        .await;

        let response = post_empty(&app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let advance: AdvanceResponse = body_json(response).await;
        assert_eq!(advance.state.current_step, "Completed");

        let confirmation = advance.confirmation.expect("completion carries confirmation");
        assert_eq!(confirmation.total, 625);
        assert_eq!(confirmation.deposit, 188);
        assert!(confirmation.confirmation_number.starts_with("KS-"));
        assert_eq!(confirmation.follow_up.delay_seconds, 5);
    }

    #[tokio::test]
    async fn test_confirmation_document_download() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        walk_to_details(&app, &token).await;
        post_json(
            &app,
            &format!("/api/wizard/{token}/details"),
            &serde_json::json!({
                "name": "Ava Reyes",
                "email": "ava@example.com",
                "phone": "555-0142"
            }),
        )
        .await;
        let response = post_empty(&app, &format!("/api/wizard/{token}/continue")).await;
        let advance: AdvanceResponse = body_json(response).await;
        let confirmation_number: String = advance
            .confirmation
            .expect("completion carries confirmation")
            .confirmation_number;

        let response = get_request(&app, &format!("/api/wizard/{token}/confirmation")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let disposition: String = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("KNOWS-STUDIOS-Confirmation-"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let content: String = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(content.contains(&confirmation_number));
        assert!(content.contains("Ava Reyes"));
    }

    #[tokio::test]
    async fn test_confirmation_document_requires_completed_booking() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        let response = get_request(&app, &format!("/api/wizard/{token}/confirmation")).await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cancel_resets_session_to_defaults() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        walk_to_details(&app, &token).await;

        let response = post_empty(&app, &format!("/api/wizard/{token}/cancel")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let state: WizardStateResponse = body_json(response).await;
        assert_eq!(state.current_step, "SelectPackage");
        assert_eq!(state.selected_date, None);
        assert!(state.selected_add_ons.is_empty());
    }

    #[tokio::test]
    async fn test_back_retains_entered_data() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        let response = post_empty(&app, &format!("/api/wizard/{token}/continue")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        post_json(
            &app,
            &format!("/api/wizard/{token}/date"),
            &serde_json::json!({ "date": "2099-06-15" }),
        )
        .await;

        let response = post_empty(&app, &format!("/api/wizard/{token}/back")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let state: WizardStateResponse = body_json(response).await;
        assert_eq!(state.current_step, "SelectPackage");
        assert_eq!(state.selected_date.map(|d| d.to_string()).as_deref(), Some("2099-06-15"));
    }

    #[tokio::test]
    async fn test_new_session_resumes_saved_draft() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        post_empty(&app, &format!("/api/wizard/{token}/continue")).await;
        post_json(
            &app,
            &format!("/api/wizard/{token}/date"),
            &serde_json::json!({ "date": "2099-06-15" }),
        )
        .await;

        let response = post_empty(&app, "/api/wizard").await;
        let opened: OpenWizardApiResponse = body_json(response).await;

        assert!(opened.resumed_draft);
        assert_eq!(opened.state.current_step, "SelectDateTime");
        assert_eq!(
            opened.state.selected_date.map(|d| d.to_string()).as_deref(),
            Some("2099-06-15")
        );
    }

    #[tokio::test]
    async fn test_close_session_then_token_is_gone() {
        let app: Router = build_router(create_test_app_state());
        let token: String = open_session(&app).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/wizard/{token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let closed: CloseSessionApiResponse = body_json(response).await;
        assert!(closed.closed);

        let response = get_request(&app, &format!("/api/wizard/{token}")).await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_completion_schedules_abortable_follow_up() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let token: String = open_session(&app).await;

        walk_to_details(&app, &token).await;
        post_json(
            &app,
            &format!("/api/wizard/{token}/details"),
            &serde_json::json!({
                "name": "Ava Reyes",
                "email": "ava@example.com",
                "phone": "555-0142"
            }),
        )
        .await;
        post_empty(&app, &format!("/api/wizard/{token}/continue")).await;

        // The session holds the pending follow-up without waiting for it.
        let sessions = app_state.sessions.lock().await;
        let session = sessions.get(&token).expect("session exists");
        assert!(session.follow_up.is_some());
        assert!(session.booking.is_some());
        drop(sessions);

        // Closing the session aborts the redirect before the delay elapses.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/wizard/{token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
    }
}
