use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone)]
pub struct ApiKeyCredentials {
    pub username: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct AuthPayload {
    #[serde(rename = "RAX-KSKEY:apiKeyCredentials")]
    pub api_key_credentials: ApiKeyCredentials,
}

#[derive(Debug, Serialize, Clone)]
pub struct AuthRequest {
    pub auth: AuthPayload,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Token {
    pub id: String,
    pub expires: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogEndpoint {
    pub region: Option<String>,
    #[serde(rename = "publicURL")]
    pub public_url: String,
    #[serde(rename = "internalURL")]
    pub internal_url: Option<String>,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogService {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub endpoints: Vec<CatalogEndpoint>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    pub token: Token,
    pub service_catalog: Vec<CatalogService>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthResponse {
    pub access: Access,
}
