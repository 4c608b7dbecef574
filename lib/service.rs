//! Storage collaborator for imported and published servers.

use crate::constants::OFFICIAL_META_KEY;
use crate::model::{ServerJson, ServerResponse};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tokio::sync::RwLock;
use uuid::Uuid;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Status assigned to newly created servers.
const STATUS_ACTIVE: &str = "active";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Persists validated manifests.
///
/// Errors are opaque to callers; the importer only renders them into its
/// per-record failure list.
#[async_trait]
pub trait RegistryService: Send + Sync {
    /// Store a manifest and return it with registry metadata attached.
    async fn create_server(&self, server: &ServerJson) -> anyhow::Result<ServerResponse>;
}

/// In-memory registry store.
#[derive(Debug, Default)]
pub struct MemoryRegistryService {
    entries: RwLock<Vec<ServerResponse>>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl MemoryRegistryService {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored entries in insertion order.
    pub async fn list(&self) -> Vec<ServerResponse> {
        self.entries.read().await.clone()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// The entry currently marked latest for a server name.
    pub async fn latest(&self, name: &str) -> Option<ServerResponse> {
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.server.name == name && is_latest(entry))
            .cloned()
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

#[async_trait]
impl RegistryService for MemoryRegistryService {
    async fn create_server(&self, server: &ServerJson) -> anyhow::Result<ServerResponse> {
        let mut entries = self.entries.write().await;

        if entries
            .iter()
            .any(|e| e.server.name == server.name && e.server.version == server.version)
        {
            anyhow::bail!(
                "version {} of {} has already been published",
                server.version,
                server.name
            );
        }

        for entry in entries.iter_mut().filter(|e| e.server.name == server.name) {
            set_latest(entry, false);
        }

        let response = ServerResponse {
            server: server.clone(),
            meta: Some(json!({
                OFFICIAL_META_KEY: {
                    "status": STATUS_ACTIVE,
                    "publishedAt": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    "isLatest": true,
                    "versionId": Uuid::new_v4().to_string(),
                }
            })),
        };

        tracing::debug!(name = %server.name, version = %server.version, "Created server");
        entries.push(response.clone());
        Ok(response)
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn is_latest(entry: &ServerResponse) -> bool {
    entry
        .meta
        .as_ref()
        .and_then(|meta| meta.get(OFFICIAL_META_KEY))
        .and_then(|official| official.get("isLatest"))
        .and_then(|flag| flag.as_bool())
        .unwrap_or(false)
}

fn set_latest(entry: &mut ServerResponse, latest: bool) {
    if let Some(official) = entry
        .meta
        .as_mut()
        .and_then(|meta| meta.get_mut(OFFICIAL_META_KEY))
        .and_then(|official| official.as_object_mut())
    {
        official.insert("isLatest".into(), latest.into());
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
