use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;

use pathforge_api::{ApiKeyResponse, SetApiKeyRequest, API_KEY_COOKIE};

use crate::error::ApiErr;

// ---------------------------------------------------------------------------
// Cookie options
// ---------------------------------------------------------------------------

/// Attributes applied to a cookie when it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: &'static str,
    pub max_age_seconds: i64,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
}

/// Options for the API key cookie: site-wide, 30 days, never visible to
/// page scripts, HTTPS only, first-party only.
pub const CREDENTIAL_COOKIE: CookieOptions = CookieOptions {
    path: "/",
    max_age_seconds: 30 * 24 * 60 * 60,
    http_only: true,
    secure: true,
    same_site: SameSite::Strict,
};

impl CookieOptions {
    pub fn build(&self, name: &'static str, value: impl Into<String>) -> Cookie<'static> {
        Cookie::build((name, value.into()))
            .path(self.path)
            .max_age(Duration::seconds(self.max_age_seconds))
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site)
            .build()
    }

    /// A cookie that makes the browser drop `name` at this cookie's path.
    pub fn removal(&self, name: &'static str) -> Cookie<'static> {
        let mut cookie = self.build(name, "");
        cookie.make_removal();
        cookie
    }
}

/// The stored API key, if the browser sent a non-empty one.
pub fn api_key_from(jar: &CookieJar) -> Option<String> {
    jar.get(API_KEY_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// POST /api/set-cookie — store the caller's API key.
pub async fn set_api_key(
    jar: CookieJar,
    req: Result<Json<SetApiKeyRequest>, JsonRejection>,
) -> Result<(CookieJar, StatusCode), ApiErr> {
    let Json(req) = req?;
    tracing::info!("storing API key cookie");
    Ok((
        jar.add(CREDENTIAL_COOKIE.build(API_KEY_COOKIE, req.api_key)),
        StatusCode::OK,
    ))
}

/// GET /api/get-cookie — echo the stored API key back to the page.
pub async fn get_api_key(jar: CookieJar) -> Json<ApiKeyResponse> {
    Json(ApiKeyResponse {
        api_key: api_key_from(&jar),
    })
}

/// DELETE /api/delete-cookie — forget the stored API key.
pub async fn delete_api_key(jar: CookieJar) -> (CookieJar, StatusCode) {
    tracing::info!("removing API key cookie");
    (
        jar.add(CREDENTIAL_COOKIE.removal(API_KEY_COOKIE)),
        StatusCode::OK,
    )
}
