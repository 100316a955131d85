//! Signed-in session as forwarded by the identity provider.
//!
//! The dashboard never interprets the session beyond "present or not"; it is
//! serialized as-is for the debug panel.

use serde::Serialize;
use url::form_urlencoded;

use crate::config::AuthConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: SessionUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Sign-in and sign-out are delegated; this only knows where to send the browser.
#[derive(Debug, Clone)]
pub struct IdentityProvider {
    name: String,
    signin_url: String,
    signout_url: String,
}

impl IdentityProvider {
    pub fn new(name: impl Into<String>, signin_url: impl Into<String>, signout_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signin_url: signin_url.into(),
            signout_url: signout_url.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.provider, &config.signin_url, &config.signout_url)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where to send the browser to start a sign-in, returning to `return_to` afterwards.
    pub fn sign_in_location(&self, return_to: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("provider", &self.name)
            .append_pair("rd", return_to)
            .finish();

        append_query(&self.signin_url, &query)
    }

    pub fn sign_out_location(&self) -> String {
        self.signout_url.clone()
    }
}

fn append_query(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}
