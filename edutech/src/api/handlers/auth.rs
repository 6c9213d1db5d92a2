//! Signup and login handlers.
//!
//! Login is stateless: a successful check returns the user's display name and
//! nothing else - no token, cookie, or server-side session is created.

use axum::{Json, extract::State};

use crate::{
    AppState,
    api::handlers::required_field,
    api::models::{
        Ack,
        auth::{LoginRequest, LoginResponse, SignupRequest},
    },
    auth::password,
    db::{handlers::{Repository, Users}, models::users::UserCreateDBRequest},
    errors::Error,
};

const DEFAULT_DISPLAY_NAME: &str = "New User";

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/signup/",
    request_body = SignupRequest,
    tag = "auth",
    responses(
        (status = 200, description = "Signup acknowledgment (check the success flag)", body = Ack),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn signup(State(state): State<AppState>, Json(request): Json<SignupRequest>) -> Result<Json<Ack>, Error> {
    let email = required_field(request.email, "Email and password required")?;
    let password = required_field(request.password, "Email and password required")?;
    let name = request.name.unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut users = Users::new(&mut conn);

    // Check if a user with this email already exists. Deliberately a
    // read-then-write (the unique index is only the backstop), which admits a
    // race under concurrent signups.
    if users.get_user_by_email(&email).await?.is_some() {
        return Err(Error::DuplicateEmail);
    }

    // Hash the password on a blocking thread to avoid blocking async runtime
    let password_hash = tokio::task::spawn_blocking(move || password::hash_string(&password))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password hashing task: {e}"),
        })??;

    users
        .create(&UserCreateDBRequest {
            name,
            email,
            password_hash,
        })
        .await?;

    Ok(Json(Ack::ok("Account created successfully!")))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/login/",
    request_body = LoginRequest,
    tag = "auth",
    responses(
        (status = 200, description = "Login acknowledgment (check the success flag)", body = LoginResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, Error> {
    let email = required_field(request.email, "Email and password required")?;
    let password = required_field(request.password, "Email and password required")?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut users = Users::new(&mut conn);

    // Find user by email; absent user and wrong password are indistinguishable
    let user = users.get_user_by_email(&email).await?.ok_or(Error::InvalidCredentials)?;

    // Verify password on a blocking thread to avoid blocking async runtime
    let hash = user.password_hash.clone();
    let is_valid = tokio::task::spawn_blocking(move || password::verify_string(&password, &hash))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password verification task: {e}"),
        })??;

    if !is_valid {
        return Err(Error::InvalidCredentials);
    }

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful!".to_string(),
        user: Some(user.name),
    }))
}
