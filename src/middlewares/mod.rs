use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error, HttpMessage, HttpRequest,
};

use crate::{
    api::error,
    constants::SESSION_COOKIE,
    modules::auth::{model::SessionUser, service::AuthService},
};

/// Session token from the `token` cookie, or from an `Authorization: Bearer` header.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

pub fn is_authenticated(req: &HttpRequest) -> bool {
    let Some(token) = session_token(req) else {
        return false;
    };
    req.app_data::<web::Data<AuthService>>().is_some_and(|auth| auth.is_valid_token(&token))
}

pub async fn authentication<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error>
where
    B: MessageBody + 'static,
{
    if !is_authenticated(req.request()) {
        return Err(error::Error::unauthorized("Not logged in").into());
    }

    let auth = req
        .app_data::<web::Data<AuthService>>()
        .cloned()
        .ok_or(error::Error::InternalServer)?;
    let user = auth.restore_session();
    req.extensions_mut().insert(user);

    next.call(req).await
}

pub fn get_session_user(req: &HttpRequest) -> Result<SessionUser, error::Error> {
    let extensions = req.extensions();

    let user = extensions
        .get::<SessionUser>()
        .ok_or_else(|| error::Error::unauthorized("Unauthorized"))?
        .clone();

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store::Store, ENV};
    use actix_web::{cookie::Cookie, test::TestRequest};
    use std::sync::Arc;

    fn auth_data() -> web::Data<AuthService> {
        web::Data::new(AuthService::with_dependencies(Arc::new(Store::default())))
    }

    #[test]
    fn test_token_from_cookie_or_header() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "from-cookie"))
            .insert_header((header::AUTHORIZATION, "Bearer from-header"))
            .to_http_request();
        assert_eq!(session_token(&req).as_deref(), Some("from-cookie"));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer from-header"))
            .to_http_request();
        assert_eq!(session_token(&req).as_deref(), Some("from-header"));

        let req = TestRequest::default().to_http_request();
        assert!(session_token(&req).is_none());
    }

    #[test]
    fn test_only_configured_token_authenticates() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, ENV.session_token.as_str()))
            .app_data(auth_data())
            .to_http_request();
        assert!(is_authenticated(&req));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer forged"))
            .app_data(auth_data())
            .to_http_request();
        assert!(!is_authenticated(&req));
    }
}
