//! Fail-open authentication middleware.
//!
//! Runs once per request, before routing:
//! 1. reads the `Authorization` header, if any
//! 2. verifies the bearer token against the server secret
//! 3. on success, attaches the decoded [`Principal`] to request extensions
//!
//! It never rejects a request. A missing or unverifiable token simply leaves
//! the request anonymous; the guards composed by each handler decide whether
//! anonymity is acceptable for that route.
//!
//! Handlers read the principal back via
//! `req.extensions().get::<Principal>()`.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use summify_auth::{authenticate, TokenCodec};

/// Authentication middleware factory.
pub struct AuthenticateJwt {
    codec: Arc<TokenCodec>,
}

impl AuthenticateJwt {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthenticateJwt
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateJwtService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateJwtService {
            service: Rc::new(service),
            codec: self.codec.clone(),
        }))
    }
}

/// Per-request middleware service instance.
pub struct AuthenticateJwtService<S> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateJwtService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let codec = self.codec.clone();

        Box::pin(async move {
            let header = req
                .headers()
                .get("Authorization")
                .and_then(|value| value.to_str().ok());

            if let Some(principal) = authenticate(&codec, header) {
                req.extensions_mut().insert(principal);
            }

            service.call(req).await
        })
    }
}
