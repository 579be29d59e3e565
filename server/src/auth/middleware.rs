//! Authentication middleware
//!
//! One middleware guards the whole router. Public storefront routes pass
//! through untouched; `/api/auth/me` requires a valid token; every
//! `/api/admin/*` route additionally requires the admin flag. On success a
//! [`CurrentUser`] is injected into request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Paths that require a valid token at all.
fn needs_auth(path: &str) -> bool {
    path.starts_with("/api/admin/") || path == "/api/auth/me"
}

/// Auth gate for the API router.
///
/// # Errors
///
/// | Condition | Status |
/// |-----------|--------|
/// | missing Authorization header | 401 |
/// | expired token | 401 |
/// | invalid token | 401 |
/// | non-admin on `/api/admin/*` | 403 |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight passes through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !needs_auth(path) {
        return Ok(next.run(req).await);
    }

    let is_admin_route = path.starts_with("/api/admin/");

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::InvalidToken)?,
        None => {
            tracing::warn!(uri = %req.uri(), "request without credentials");
            return Err(AppError::Unauthorized);
        }
    };

    let claims = match jwt_service.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(uri = %req.uri(), error = %e, "auth failed");
            return Err(match e {
                crate::auth::JwtError::ExpiredToken => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            });
        }
    };

    let user = CurrentUser::from(claims);

    if is_admin_route && !user.is_admin {
        tracing::warn!(
            user_id = %user.id,
            username = %user.username,
            uri = %req.uri(),
            "admin route denied"
        );
        return Err(AppError::forbidden("Admin access required"));
    }

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_and_me_routes_need_auth() {
        assert!(needs_auth("/api/admin/orders"));
        assert!(needs_auth("/api/admin/analytics"));
        assert!(needs_auth("/api/auth/me"));
        assert!(!needs_auth("/api/menu"));
        assert!(!needs_auth("/api/orders"));
        assert!(!needs_auth("/health"));
    }
}
