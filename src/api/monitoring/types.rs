use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaginationMetadata {
    pub count: i32,
    pub limit: i32,
    pub marker: Option<String>,
    pub next_marker: Option<String>,
    pub next_href: Option<String>,
}

/// A host or resource registered with the monitoring service.
/// `id` is the stable identity; `metadata` and `ip_addresses` are
/// unordered key/value sets.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub label: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub managed: bool,
    pub uri: Option<String>,
    pub agent_id: Option<String>,
    #[serde(default)]
    pub ip_addresses: HashMap<String, String>,
}

/// A probe configured against an entity. `check_type` (wire key "type")
/// decides which keys are meaningful inside `details`; the schema there is
/// open, so values stay as raw JSON. `metadata` is a small free-form
/// key/value store, not intended for bulk data.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Check {
    pub id: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub check_type: String,
    #[serde(default)]
    pub details: HashMap<String, serde_json::Value>,
    pub monitoring_zones_poll: Vec<String>,
    pub timeout: i32,
    pub period: i32,
    pub target_alias: Option<String>,
    pub target_hostname: Option<String>,
    pub target_resolver: Option<String>,
    pub disabled: bool,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaginatedEntityList {
    pub values: Vec<Entity>,
    pub metadata: PaginationMetadata,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaginatedCheckList {
    pub values: Vec<Check>,
    pub metadata: PaginationMetadata,
}

// Host-info snapshots below are raw agent samples. Where `info` is a list,
// the order is the order the agent reported (core index, device, interface,
// pid, mount) and is preserved as-is. No rates or deltas are computed here.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CpuInfo {
    pub name: String,
    pub vendor: String,
    pub model: String,
    pub mhz: i32,
    pub idle: i64,
    pub irq: i32,
    pub soft_irq: i32,
    pub nice: i32,
    pub stolen: i32,
    pub sys: i32,
    pub user: i32,
    pub wait: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CpuHostInfo {
    pub timestamp: i64,
    pub info: Vec<CpuInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MemoryInfo {
    pub actual_free: i64,
    pub actual_used: i64,
    pub free: i64,
    pub used: i64,
    pub total: i64,
    pub ram: i32,
    pub swap_total: i64,
    pub swap_used: i64,
    pub swap_free: i64,
    pub swap_page_in: i32,
    pub swap_page_out: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MemoryHostInfo {
    pub timestamp: i64,
    pub info: MemoryInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NetworkInterfaceInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub interface_type: String,
    pub address: String,
    pub netmask: String,
    pub address6: Option<String>,
    pub broadcast: Option<String>,
    pub hwaddr: String,
    pub mtu: i32,
    pub rx_packets: i64,
    pub rx_bytes: i64,
    pub tx_packets: i64,
    pub tx_bytes: i64,
    pub flags: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NetworkInterfaceHostInfo {
    pub timestamp: i64,
    pub info: Vec<NetworkInterfaceInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SystemInfo {
    pub name: String,
    pub arch: String,
    pub version: String,
    pub vendor: String,
    pub vendor_version: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SystemHostInfo {
    pub timestamp: i64,
    pub info: SystemInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DiskInfo {
    pub read_bytes: i64,
    pub reads: i64,
    pub rtime: i32,
    pub write_bytes: i64,
    pub writes: i64,
    pub wtime: i32,
    pub time: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DiskHostInfo {
    pub timestamp: i64,
    pub info: Vec<DiskInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FilesystemInfo {
    pub dir_name: String,
    pub dev_name: String,
    pub sys_type_name: String,
    pub options: String,
    pub free: i64,
    pub used: i64,
    pub avail: i64,
    pub total: i64,
    pub files: i64,
    pub free_files: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FilesystemsHostInfo {
    pub timestamp: i64,
    pub info: Vec<FilesystemInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProcessInfo {
    pub pid: i32,
    pub exe_name: String,
    pub exe_cwd: String,
    pub exe_root: String,
    pub time_total: i64,
    pub time_sys: i64,
    pub time_user: i64,
    pub time_start_time: i64,
    pub state_name: String,
    pub state_priority: i32,
    pub state_threads: i32,
    pub memory_size: i64,
    pub memory_resident: i64,
    pub memory_share: i64,
    pub memory_major_faults: i64,
    pub memory_minor_faults: i64,
    pub memory_page_faults: i64,
    pub cred_user: String,
    pub cred_group: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProcessesHostInfo {
    pub timestamp: i64,
    pub info: Vec<ProcessInfo>,
}
