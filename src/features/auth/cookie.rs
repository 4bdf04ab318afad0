use axum::http::{
    header::{InvalidHeaderValue, AUTHORIZATION, COOKIE},
    HeaderMap, HeaderValue,
};

use crate::shared::constants::{ADMIN_TOKEN_COOKIE, ADMIN_TOKEN_TTL_SECS};

/// Build the `HttpOnly` admin session cookie
pub fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{ADMIN_TOKEN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={ADMIN_TOKEN_TTL_SECS}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub fn clear_session_cookie(secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie =
        format!("{ADMIN_TOKEN_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Value of the `admin-token` cookie, if any
pub fn extract_cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == ADMIN_TOKEN_COOKIE)
        .map(|(_, val)| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_map(name: axum::http::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("abc", false).unwrap();
        assert_eq!(
            cookie.to_str().unwrap(),
            "admin-token=abc; Path=/; HttpOnly; SameSite=Strict; Max-Age=86400"
        );

        let secure = session_cookie("abc", true).unwrap();
        assert!(secure.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cookie = clear_session_cookie(false).unwrap();
        assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
    }

    #[test]
    fn cookie_token_found_among_others() {
        let headers = header_map(COOKIE, "theme=dark; admin-token=tok.en.sig ; lang=en");
        assert_eq!(extract_cookie_token(&headers).as_deref(), Some("tok.en.sig"));
    }

    #[test]
    fn missing_or_empty_cookie_is_none() {
        assert_eq!(extract_cookie_token(&header_map(COOKIE, "theme=dark")), None);
        assert_eq!(extract_cookie_token(&header_map(COOKIE, "admin-token=")), None);
        assert_eq!(extract_cookie_token(&HeaderMap::new()), None);
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = header_map(AUTHORIZATION, "Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
        assert_eq!(
            extract_bearer_token(&header_map(AUTHORIZATION, "Basic xyz")),
            None
        );
    }
}
