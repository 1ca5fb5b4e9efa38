pub mod types;

use crate::api::identity::types::Access;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use types::{Flavor, FlavorsResponse, Image, ImagesResponse, Link, Server, ServersResponse};

/// Catalog name of the compute service the listing calls go through.
pub const COMPUTE_SERVICE: &str = "cloudServersOpenStack";

/// A geographical deployment of the compute API. Callers hold any
/// implementer and stay agnostic of which region backs it.
///
/// The listing calls drain the full collection: pages are followed through
/// `rel == "next"` links until none remains, concatenated in server order.
/// On any failure the whole call errors; no partial sequence is returned.
///
/// An instance belongs to one logical caller. `use_client` takes `&mut self`,
/// so a transport swap cannot race the listing calls; the new client applies
/// to calls issued after it returns.
#[allow(async_fn_in_trait)]
pub trait Region {
    async fn images(&self) -> Result<Vec<Image>>;
    async fn flavors(&self) -> Result<Vec<Flavor>>;
    async fn servers(&self) -> Result<Vec<Server>>;
    fn use_client(&mut self, client: Client);
    fn endpoint_by_name(&self, name: &str) -> Result<String>;
}

/// `Region` implementation resolved from an identity service catalog.
#[derive(Clone, Debug)]
pub struct CloudRegion {
    name: String,
    client: Client,
    token: String,
    endpoints: HashMap<String, String>,
}

impl CloudRegion {
    /// Builds the region view of `access`: for each catalog service, the
    /// endpoint scoped to `name` wins; a region-less endpoint is the
    /// fallback. Services with no endpoint for this region are left out,
    /// so `endpoint_by_name` reports them as unknown.
    pub fn from_access(name: &str, access: &Access) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        let mut endpoints = HashMap::new();
        for service in &access.service_catalog {
            let scoped = service
                .endpoints
                .iter()
                .find(|e| e.region.as_deref().is_some_and(|r| r.eq_ignore_ascii_case(name)));
            let fallback = service.endpoints.iter().find(|e| e.region.is_none());
            if let Some(endpoint) = scoped.or(fallback) {
                endpoints.insert(service.name.clone(), endpoint.public_url.clone());
            }
        }

        Ok(Self {
            name: name.to_string(),
            client,
            token: access.token.id.clone(),
            endpoints,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("X-Auth-Token", &self.token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status: {} - {}", status, text);
        }

        let parsed = response.json::<T>().await.context("Failed to parse JSON")?;
        Ok(parsed)
    }
}

fn next_link(links: &Option<Vec<Link>>) -> Option<String> {
    links
        .as_ref()?
        .iter()
        .find(|link| link.rel == "next")
        .map(|link| link.href.clone())
}

impl Region for CloudRegion {
    async fn images(&self) -> Result<Vec<Image>> {
        let mut url = format!("{}/images/detail", self.endpoint_by_name(COMPUTE_SERVICE)?);

        let mut images = Vec::new();
        loop {
            let page: ImagesResponse = self.get_json(&url).await?;
            images.extend(page.images);
            match next_link(&page.images_links) {
                Some(next) => url = next,
                None => break,
            }
        }
        Ok(images)
    }

    async fn flavors(&self) -> Result<Vec<Flavor>> {
        let mut url = format!("{}/flavors/detail", self.endpoint_by_name(COMPUTE_SERVICE)?);

        let mut flavors = Vec::new();
        loop {
            let page: FlavorsResponse = self.get_json(&url).await?;
            flavors.extend(page.flavors);
            match next_link(&page.flavors_links) {
                Some(next) => url = next,
                None => break,
            }
        }
        Ok(flavors)
    }

    async fn servers(&self) -> Result<Vec<Server>> {
        let mut url = format!("{}/servers/detail", self.endpoint_by_name(COMPUTE_SERVICE)?);

        let mut servers = Vec::new();
        loop {
            let page: ServersResponse = self.get_json(&url).await?;
            servers.extend(page.servers);
            match next_link(&page.servers_links) {
                Some(next) => url = next,
                None => break,
            }
        }
        Ok(servers)
    }

    fn use_client(&mut self, client: Client) {
        self.client = client;
    }

    fn endpoint_by_name(&self, name: &str) -> Result<String> {
        match self.endpoints.get(name) {
            Some(url) => Ok(url.clone()),
            None => anyhow::bail!("No endpoint named {} in region {}", name, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::identity::types::{CatalogEndpoint, CatalogService, Token};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn access_with_compute(url: &str) -> Access {
        Access {
            token: Token {
                id: "tok-1".to_string(),
                expires: None,
            },
            service_catalog: vec![
                CatalogService {
                    name: COMPUTE_SERVICE.to_string(),
                    service_type: "compute".to_string(),
                    endpoints: vec![CatalogEndpoint {
                        region: Some("ORD".to_string()),
                        public_url: url.to_string(),
                        internal_url: None,
                        tenant_id: Some("12345".to_string()),
                    }],
                },
                CatalogService {
                    name: "cloudMonitoring".to_string(),
                    service_type: "rax:monitor".to_string(),
                    endpoints: vec![CatalogEndpoint {
                        region: None,
                        public_url: "https://monitoring.example.com/v1.0/12345".to_string(),
                        internal_url: None,
                        tenant_id: None,
                    }],
                },
            ],
        }
    }

    #[tokio::test]
    async fn endpoint_by_name_rejects_unknown_service() -> Result<()> {
        let region = CloudRegion::from_access("ORD", &access_with_compute("https://x"))?;

        let resolved = region.endpoint_by_name("cloudMonitoring")?;
        assert_eq!(resolved, "https://monitoring.example.com/v1.0/12345");

        let err = region.endpoint_by_name("unknown-service").unwrap_err();
        assert!(err.to_string().contains("unknown-service"));
        Ok(())
    }

    #[tokio::test]
    async fn region_scoped_endpoint_wins_over_region_less() -> Result<()> {
        let mut access = access_with_compute("https://ord.servers.example.com/v2/12345");
        access.service_catalog[0].endpoints.push(CatalogEndpoint {
            region: None,
            public_url: "https://anywhere.servers.example.com/v2/12345".to_string(),
            internal_url: None,
            tenant_id: None,
        });

        let region = CloudRegion::from_access("ord", &access)?;
        assert_eq!(
            region.endpoint_by_name(COMPUTE_SERVICE)?,
            "https://ord.servers.example.com/v2/12345"
        );
        Ok(())
    }

    #[tokio::test]
    async fn images_error_on_http_500() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/detail"))
            .respond_with(ResponseTemplate::new(500).set_body_string("compute is down"))
            .mount(&server)
            .await;

        let region = CloudRegion::from_access("ORD", &access_with_compute(&server.uri()))?;
        let err = region.images().await.unwrap_err();
        assert!(err.to_string().contains("500"));
        Ok(())
    }

    #[tokio::test]
    async fn servers_drains_next_links_in_order() -> Result<()> {
        let server = MockServer::start().await;

        let srv = |id: &str| {
            serde_json::json!({
                "id": id, "name": id, "status": "ACTIVE",
                "tenant_id": "12345", "user_id": null,
                "created": null, "updated": null, "hostId": null,
                "accessIPv4": null, "accessIPv6": null, "progress": null,
                "image": null, "flavor": null, "key_name": null
            })
        };

        let page_one = serde_json::json!({
            "servers": [srv("srv-1"), srv("srv-2")],
            "servers_links": [
                {"href": format!("{}/servers/detail?marker=srv-2", server.uri()), "rel": "next"}
            ]
        });
        let page_two = serde_json::json!({
            "servers": [srv("srv-3")],
            "servers_links": null
        });

        Mock::given(method("GET"))
            .and(path("/servers/detail"))
            .and(query_param("marker", "srv-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_two))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/servers/detail"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_one))
            .mount(&server)
            .await;

        let region = CloudRegion::from_access("ORD", &access_with_compute(&server.uri()))?;
        let servers = region.servers().await?;

        let ids: Vec<&str> = servers.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["srv-1", "srv-2", "srv-3"]);
        Ok(())
    }

    #[tokio::test]
    async fn use_client_applies_to_subsequent_calls() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flavors/detail"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "flavors": [{"id": "2", "name": "512MB", "ram": 512, "disk": 20,
                             "vcpus": 1, "rxtx_factor": 2.0}],
                "flavors_links": null
            })))
            .mount(&server)
            .await;

        let mut region = CloudRegion::from_access("ORD", &access_with_compute(&server.uri()))?;
        region.use_client(Client::builder().timeout(Duration::from_secs(2)).build()?);

        let flavors = region.flavors().await?;
        assert_eq!(flavors.len(), 1);
        assert_eq!(flavors[0].vcpus, 1);
        Ok(())
    }
}
