//! Security schemes and requirements.

use crate::Extensions;
use crate::compose::composed;
use crate::model::parameter::ParameterLocation;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityType {
    #[serde(rename = "apiKey")]
    ApiKey,
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecuritySchemeObject {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub security_type: Option<SecurityType>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scheme: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bearer_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<OAuthFlows>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub open_id_connect_url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityScheme {
    pub object: SecuritySchemeObject,
    pub extensions: Extensions,
}

composed!(SecurityScheme { object, extensions });

impl SecurityScheme {
    fn of(object: SecuritySchemeObject) -> Self {
        Self {
            object,
            extensions: Extensions::default(),
        }
    }

    pub fn api_key(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self::of(SecuritySchemeObject {
            security_type: Some(SecurityType::ApiKey),
            name: name.into(),
            location: Some(location),
            ..SecuritySchemeObject::default()
        })
    }

    /// An HTTP auth scheme. A bearer format forces the scheme to `bearer`.
    pub fn http(scheme: &str, bearer_format: &str) -> Self {
        let scheme = if bearer_format.is_empty() { scheme } else { "bearer" };
        Self::of(SecuritySchemeObject {
            security_type: Some(SecurityType::Http),
            scheme: scheme.to_string(),
            bearer_format: bearer_format.to_string(),
            ..SecuritySchemeObject::default()
        })
    }

    pub fn oauth2(flows: OAuthFlowsObject) -> Self {
        Self::of(SecuritySchemeObject {
            security_type: Some(SecurityType::OAuth2),
            flows: Some(OAuthFlows {
                object: flows,
                extensions: Extensions::default(),
            }),
            ..SecuritySchemeObject::default()
        })
    }

    pub fn open_id_connect(url: impl Into<String>) -> Self {
        Self::of(SecuritySchemeObject {
            security_type: Some(SecurityType::OpenIdConnect),
            open_id_connect_url: url.into(),
            ..SecuritySchemeObject::default()
        })
    }

    pub fn is_oauth2(&self) -> bool {
        self.object.security_type == Some(SecurityType::OAuth2)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlowsObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthFlows {
    pub object: OAuthFlowsObject,
    pub extensions: Extensions,
}

composed!(OAuthFlows { object, extensions });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlowObject {
    pub authorization_url: String,
    pub token_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub refresh_url: String,
    pub scopes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthFlow {
    pub object: OAuthFlowObject,
    pub extensions: Extensions,
}

composed!(OAuthFlow { object, extensions });

impl OAuthFlow {
    pub fn new<I, K, V>(
        authorization_url: &str,
        token_url: &str,
        refresh_url: &str,
        scopes: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            object: OAuthFlowObject {
                authorization_url: authorization_url.to_string(),
                token_url: token_url.to_string(),
                refresh_url: refresh_url.to_string(),
                scopes: scopes.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            },
            extensions: Extensions::default(),
        }
    }
}

/// Scheme names mapped to the scopes an operation needs. Non-OAuth2
/// schemes carry an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement(pub BTreeMap<String, Vec<String>>);

impl SecurityRequirement {
    pub fn new(scheme: impl Into<String>, scopes: Vec<String>) -> Self {
        Self(BTreeMap::from([(scheme.into(), scopes)]))
    }
}
