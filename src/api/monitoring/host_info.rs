use super::MonitoringClient;
use crate::api::monitoring::types::{
    CpuHostInfo, DiskHostInfo, FilesystemsHostInfo, MemoryHostInfo, NetworkInterfaceHostInfo,
    ProcessesHostInfo, SystemHostInfo,
};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// One fetch per metric family, addressed by the agent that collects on the
/// target host. Each call returns the most recent sample the agent reported.
#[allow(async_fn_in_trait)]
pub trait HostInfoApi {
    async fn get_cpus(&self, agent_id: &str) -> Result<CpuHostInfo>;
    async fn get_memory(&self, agent_id: &str) -> Result<MemoryHostInfo>;
    async fn get_network_interfaces(&self, agent_id: &str) -> Result<NetworkInterfaceHostInfo>;
    async fn get_system(&self, agent_id: &str) -> Result<SystemHostInfo>;
    async fn get_disks(&self, agent_id: &str) -> Result<DiskHostInfo>;
    async fn get_filesystems(&self, agent_id: &str) -> Result<FilesystemsHostInfo>;
    async fn get_processes(&self, agent_id: &str) -> Result<ProcessesHostInfo>;
}

impl MonitoringClient {
    async fn get_host_info<T: DeserializeOwned>(&self, agent_id: &str, family: &str) -> Result<T> {
        let url = format!("{}/agents/{}/host_info/{}", self.endpoint, agent_id, family);

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
            anyhow::bail!(
                "Host info request ({}) failed with status: {} - {}",
                family,
                status,
                text
            );
        }

        let snapshot = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} host info", family))?;
        Ok(snapshot)
    }
}

impl HostInfoApi for MonitoringClient {
    async fn get_cpus(&self, agent_id: &str) -> Result<CpuHostInfo> {
        self.get_host_info(agent_id, "cpus").await
    }

    async fn get_memory(&self, agent_id: &str) -> Result<MemoryHostInfo> {
        self.get_host_info(agent_id, "memory").await
    }

    async fn get_network_interfaces(&self, agent_id: &str) -> Result<NetworkInterfaceHostInfo> {
        self.get_host_info(agent_id, "network_interfaces").await
    }

    async fn get_system(&self, agent_id: &str) -> Result<SystemHostInfo> {
        self.get_host_info(agent_id, "system").await
    }

    async fn get_disks(&self, agent_id: &str) -> Result<DiskHostInfo> {
        self.get_host_info(agent_id, "disks").await
    }

    async fn get_filesystems(&self, agent_id: &str) -> Result<FilesystemsHostInfo> {
        self.get_host_info(agent_id, "filesystems").await
    }

    async fn get_processes(&self, agent_id: &str) -> Result<ProcessesHostInfo> {
        self.get_host_info(agent_id, "processes").await
    }
}
