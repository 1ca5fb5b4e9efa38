use super::MonitoringClient;
use crate::api::monitoring::types::{PaginatedCheckList, PaginatedEntityList};
use anyhow::{Context, Result};

/// Listing operations return one page per call; the caller continues from
/// `metadata.next_marker` until it comes back absent.
#[allow(async_fn_in_trait)]
pub trait EntitiesApi {
    async fn get_entities(
        &self,
        marker: Option<&str>,
        limit: Option<i32>,
    ) -> Result<PaginatedEntityList>;
    async fn get_checks(
        &self,
        entity_id: &str,
        marker: Option<&str>,
        limit: Option<i32>,
    ) -> Result<PaginatedCheckList>;
}

impl EntitiesApi for MonitoringClient {
    async fn get_entities(
        &self,
        marker: Option<&str>,
        limit: Option<i32>,
    ) -> Result<PaginatedEntityList> {
        let mut url = format!("{}/entities", self.endpoint);

        let mut sep = '?';
        if let Some(marker) = marker {
            url.push_str(&format!("{}marker={}", sep, marker));
            sep = '&';
        }
        if let Some(limit) = limit {
            url.push_str(&format!("{}limit={}", sep, limit));
        }

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Entity listing failed with status: {} - {}", status, text);
        }

        let page = response
            .json::<PaginatedEntityList>()
            .await
            .context("Failed to parse entity list")?;
        Ok(page)
    }

    async fn get_checks(
        &self,
        entity_id: &str,
        marker: Option<&str>,
        limit: Option<i32>,
    ) -> Result<PaginatedCheckList> {
        let mut url = format!("{}/entities/{}/checks", self.endpoint, entity_id);

        let mut sep = '?';
        if let Some(marker) = marker {
            url.push_str(&format!("{}marker={}", sep, marker));
            sep = '&';
        }
        if let Some(limit) = limit {
            url.push_str(&format!("{}limit={}", sep, limit));
        }

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Check listing failed with status: {} - {}", status, text);
        }

        let page = response
            .json::<PaginatedCheckList>()
            .await
            .context("Failed to parse check list")?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_entities_returns_page_with_cursor() -> Result<()> {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "values": [
                {"id": "en1", "label": "web-1", "managed": true},
                {"id": "en2", "managed": false}
            ],
            "metadata": {"count": 2, "limit": 2, "marker": null,
                         "next_marker": "en3", "next_href": null}
        });
        Mock::given(method("GET"))
            .and(path("/entities"))
            .and(query_param("limit", "2"))
            .and(header("X-Auth-Token", "tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = MonitoringClient::new(server.uri(), "tok-1".to_string())?;
        let page = client.get_entities(None, Some(2)).await?;

        assert_eq!(page.values.len(), 2);
        assert_eq!(page.values[0].id, "en1");
        assert_eq!(page.metadata.next_marker.as_deref(), Some("en3"));
        Ok(())
    }

    #[tokio::test]
    async fn get_checks_surfaces_server_error() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entities/en1/checks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = MonitoringClient::new(server.uri(), "tok-1".to_string())?;
        let err = client.get_checks("en1", None, None).await.unwrap_err();
        assert!(err.to_string().contains("500"));
        Ok(())
    }
}
