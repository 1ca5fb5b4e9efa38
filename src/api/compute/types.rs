use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Link {
    pub href: String,
    pub rel: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Image {
    pub id: String,
    pub name: String,
    pub status: Option<String>,
    pub progress: Option<i32>,
    pub created: Option<String>,
    pub updated: Option<String>,
    #[serde(rename = "minDisk")]
    pub min_disk: Option<i32>,
    #[serde(rename = "minRam")]
    pub min_ram: Option<i32>,
    pub metadata: Option<HashMap<String, String>>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Flavor {
    pub id: String,
    pub name: String,
    pub ram: i32,
    pub disk: i32,
    pub vcpus: i32,
    pub rxtx_factor: Option<f64>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Address {
    pub addr: String,
    pub version: i32,
}

/// Reference to an image or flavor embedded in a server record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResourceRef {
    pub id: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub status: Option<String>,
    pub tenant_id: Option<String>,
    pub user_id: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    #[serde(rename = "hostId")]
    pub host_id: Option<String>,
    #[serde(rename = "accessIPv4")]
    pub access_ipv4: Option<String>,
    #[serde(rename = "accessIPv6")]
    pub access_ipv6: Option<String>,
    pub progress: Option<i32>,
    pub image: Option<ResourceRef>,
    pub flavor: Option<ResourceRef>,
    #[serde(default)]
    pub addresses: HashMap<String, Vec<Address>>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub key_name: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

// Listing responses carry an optional `*_links` collection; an entry with
// rel == "next" points at the following page.

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImagesResponse {
    pub images: Vec<Image>,
    pub images_links: Option<Vec<Link>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlavorsResponse {
    pub flavors: Vec<Flavor>,
    pub flavors_links: Option<Vec<Link>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServersResponse {
    pub servers: Vec<Server>,
    pub servers_links: Option<Vec<Link>>,
}
