pub mod login;
pub mod profile;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::identity_from;
use crate::config::AppConfig;
use crate::identity::IdentityProvider;
use crate::models::auth::requests::LoginRequest;

pub struct AuthService {
    identity: Option<Arc<dyn IdentityProvider>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { identity: None }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub(crate) fn get_identity(&self, request: &HttpRequest) -> Arc<dyn IdentityProvider> {
        match &self.identity {
            Some(identity) => identity.clone(),
            None => identity_from(request),
        }
    }

    pub async fn login(
        &self,
        request: &HttpRequest,
        login_request: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_me(request).await
    }
}
