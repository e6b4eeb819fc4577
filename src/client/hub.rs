use log::{error, info};
use reqwest::{
    header::{AUTHORIZATION, COOKIE},
    StatusCode,
};
use serde::Deserialize;

use super::{auth_header, ApiClient};
use crate::error::{Error, Result};

/// Hub-issued access tokens start with this; anything else is a session
/// cookie value.
pub const HUB_TOKEN_PREFIX: &str = "hf_";

const WHOAMI_PATH: &str = "/api/whoami-v2";

/// An organization the user belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Org {
    pub name: String,
    #[serde(rename = "roleInOrg", default)]
    pub role: Option<String>,
}

/// The hub's answer to `whoami-v2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Identity {
    pub name: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub orgs: Vec<Org>,
    /// Whatever else the hub sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiClient {
    /// Looks up who owns `token` on the hub.
    ///
    /// Hub tokens are sent as a bearer header, anything else as the `token`
    /// cookie.
    ///
    /// # Errors
    /// `HubUnreachable` on timeout or connection failure, `Unauthenticated`
    /// on 401, `HttpStatus` on other non-2xx answers, `UpstreamShape` if the
    /// body is not an identity.
    pub fn user_authentication(&self, token: &str) -> Result<Identity> {
        info!("Authenticating user...");
        let url = format!("{}{WHOAMI_PATH}", self.config.hub_api());

        let request = self.http.get(&url).timeout(self.config.hub_timeout());
        let request = if token.starts_with(HUB_TOKEN_PREFIX) {
            request.header(AUTHORIZATION, auth_header(token, "Bearer"))
        } else {
            request.header(COOKIE, format!("token={token}"))
        };

        let unreachable = |e: reqwest::Error| {
            if e.is_timeout() || e.is_connect() {
                error!("Failed to request whoami-v2 - {e:?}");
                Error::HubUnreachable(e)
            } else {
                Error::Transport(e)
            }
        };

        let (status, body) = self.runtime.block_on(async {
            let response = request.send().await.map_err(unreachable)?;
            let status = response.status();
            let body = response.text().await.map_err(unreachable)?;
            Ok::<_, Error>((status, body))
        })?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthenticated);
        }
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_unknown_fields() {
        let identity: Identity = serde_json::from_str(
            r#"{
                "type": "user",
                "name": "alice",
                "fullname": "Alice",
                "orgs": [{"name": "acme", "roleInOrg": "admin"}],
                "isPro": false
            }"#,
        )
        .unwrap();

        assert_eq!(identity.name, "alice");
        assert_eq!(identity.kind.as_deref(), Some("user"));
        assert_eq!(identity.orgs[0].role.as_deref(), Some("admin"));
        assert_eq!(identity.extra["isPro"], serde_json::json!(false));
        assert!(identity.email.is_none());
    }
}
