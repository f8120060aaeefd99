//! Client-side token persistence. The backend issues a JWT at signup and
//! login; the pages keep it in a cookie and attach it as a bearer token on
//! every collaborator call. An `Authorization: Bearer` header is honored
//! as an alternative source for non-browser callers.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header::Header;
use actix_web::HttpRequest;
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};

const TOKEN_COOKIE: &str = "alicetant_token";

pub fn token_cookie(req: &HttpRequest, token: &str) -> Cookie<'static> {
    let mut builder = Cookie::build(TOKEN_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(7));
    if req.connection_info().scheme() == "https" {
        builder = builder.secure(true);
    }
    builder.finish()
}

pub fn clear_token_cookie(req: &HttpRequest) -> Cookie<'static> {
    let mut builder = Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(0));
    if req.connection_info().scheme() == "https" {
        builder = builder.secure(true);
    }
    builder.finish()
}

/// Token for the current request: cookie first, `Authorization: Bearer`
/// header as fallback. `None` means the visitor is not signed in.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(TOKEN_COOKIE) {
        let value = cookie.value().trim().to_string();
        if !value.is_empty() {
            return Some(value);
        }
    }
    Authorization::<Bearer>::parse(req)
        .ok()
        .map(|auth| auth.into_scheme().token().to_string())
}
