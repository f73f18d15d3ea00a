//! Sign-up, log-in, and log-out handlers.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use database::{user, DatabaseError, NewUser};
use wellness_core::{auth as password, UserType};

use crate::error::{AppError, Result};
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Login/signup page template, shown to unauthenticated visitors.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Inline warning (bad credentials, duplicate email, missing fields).
    pub warning: Option<String>,
    /// Inline success notice (account created).
    pub notice: Option<String>,
}

impl LoginTemplate {
    pub fn empty() -> Self {
        Self {
            warning: None,
            notice: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            warning: Some(message.into()),
            notice: None,
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            warning: None,
            notice: Some(message.into()),
        }
    }
}

/// Sign-up form fields.
#[derive(Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub age: i64,
    pub user_type: String,
}

/// Log-in form fields.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Create an account.
///
/// A duplicate email surfaces as an inline warning and leaves the existing
/// record untouched.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<LoginTemplate> {
    let email = form.email.trim().to_string();
    let name = form.name.trim().to_string();

    if email.is_empty() || name.is_empty() || form.password.is_empty() {
        return Ok(LoginTemplate::warning("Fill all fields to sign up."));
    }
    if !(10..=100).contains(&form.age) {
        return Ok(LoginTemplate::warning("Age must be between 10 and 100."));
    }

    let password_hash = password::hash_password(&form.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let new_user = NewUser {
        id: Uuid::new_v4().to_string(),
        email: email.clone(),
        name,
        password_hash,
        age: form.age,
        user_type: UserType::parse(&form.user_type).as_str().to_string(),
    };

    match user::create_user(state.db.pool(), &new_user).await {
        Ok(()) => {
            info!(email = %email, "Account created");
            Ok(LoginTemplate::notice("Account created successfully!"))
        }
        Err(DatabaseError::AlreadyExists { .. }) => {
            Ok(LoginTemplate::warning("User already exists!"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Log in and start a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let record = match user::get_user_by_email(state.db.pool(), form.email.trim()).await {
        Ok(record) => record,
        Err(DatabaseError::NotFound { .. }) => {
            return Ok(LoginTemplate::warning("Invalid credentials.").into_response());
        }
        Err(err) => return Err(err.into()),
    };

    if !password::verify_password(&form.password, &record.password_hash) {
        return Ok(LoginTemplate::warning("Invalid credentials.").into_response());
    }

    let token = state.sessions.create(&record).await;
    info!(email = %record.email, "Login");

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true);
    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}

/// Log out and tear down the session.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(cookie.value()).await;
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/")).into_response()
}
