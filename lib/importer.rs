//! Import pipeline: fetch a seed source, validate each manifest, create the
//! valid ones, and report per-record outcomes.

use crate::config::Config;
use crate::constants::{
    CATALOG_PATH_SEGMENT, CURSOR_QUERY_PARAM, EMBEDDED_SEED_JSON, EMBEDDED_SEED_SOURCE,
};
use crate::error::{RegistryError, RegistryResult};
use crate::model::{ServerJson, ServerListResponse};
use crate::service::RegistryService;
use crate::validate::{ErrorCode, validate_server_json};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const CANCELLED: &str = "import cancelled";

const DEADLINE_EXCEEDED: &str = "deadline exceeded";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Where an import reads its manifests from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The seed array compiled into the binary.
    Embedded,

    /// A seed array on the local filesystem.
    LocalFile,

    /// A seed array behind a single HTTP GET.
    RemoteFile,

    /// A paginated `/v0/servers` listing.
    Catalog,
}

/// A record that was skipped or could not be stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordFailure {
    /// Server name, possibly empty when the manifest had none.
    pub name: String,

    /// Server version.
    pub version: String,

    /// Validation code, for records rejected by validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,

    /// Why the record was not imported.
    pub reason: String,
}

/// Outcome of one import run. All lists preserve source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    /// The source locator that was imported.
    pub source: String,

    /// Number of manifests decoded from the source.
    pub total: usize,

    /// Names of the servers that were created.
    pub created: Vec<String>,

    /// Records excluded because they failed validation.
    pub invalid: Vec<RecordFailure>,

    /// Valid records the registry refused to create.
    pub failed: Vec<RecordFailure>,
}

/// Runs imports into a [`RegistryService`].
pub struct Importer {
    /// Storage collaborator.
    registry: Arc<dyn RegistryService>,

    /// HTTP client for remote and catalog sources.
    http: Client,

    /// Cancels in-flight fetches.
    cancel: CancellationToken,

    /// Overall budget for one import run.
    timeout: Option<Duration>,

    /// Maximum catalog pages fetched in one run.
    max_pages: usize,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ImportReport {
    fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ..Default::default()
        }
    }

    /// True when every valid record was created.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl RecordFailure {
    fn new(server: &ServerJson, code: Option<ErrorCode>, reason: impl Into<String>) -> Self {
        Self {
            name: server.name.clone(),
            version: server.version.clone(),
            code,
            reason: reason.into(),
        }
    }
}

impl Importer {
    /// Create an importer with the limits from `config`.
    pub fn new(registry: Arc<dyn RegistryService>, config: &Config) -> RegistryResult<Self> {
        let http = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            registry,
            http,
            cancel: CancellationToken::new(),
            timeout: Some(config.seed_timeout),
            max_pages: config.max_pages,
        })
    }

    /// Set the overall import budget. `None` disables the deadline.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the catalog page limit.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Use an externally owned token; cancelling it aborts in-flight fetches
    /// and creations.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Import every manifest from `source`.
    ///
    /// Unreachable or undecodable sources fail the whole batch. Invalid records
    /// are skipped and reported; creation failures end the run in
    /// [`RegistryError::ImportIncomplete`] carrying the full report. An
    /// interruption during creation marks every record not yet stored as failed.
    pub async fn import(&self, source: &str) -> RegistryResult<ImportReport> {
        let deadline = self.timeout.map(|t| Instant::now() + t);
        let kind = classify_source(source);

        tracing::info!(source, kind = ?kind, "Importing seed data");

        let servers = match kind {
            SourceKind::Embedded => decode_seed(EMBEDDED_SEED_JSON.as_bytes(), source)?,
            SourceKind::LocalFile => {
                let bytes = self.guarded(source, deadline, read_local(source)).await?;
                decode_seed(&bytes, source)?
            }
            SourceKind::RemoteFile => {
                let bytes = self.guarded(source, deadline, self.fetch(source)).await?;
                decode_seed(&bytes, source)?
            }
            SourceKind::Catalog => self.fetch_catalog(source, deadline).await?,
        };

        let mut report = ImportReport::new(source);
        report.total = servers.len();

        let valid = partition_valid(servers, &mut report);
        tracing::info!(
            "Validation summary: {} valid, {} invalid",
            valid.len(),
            report.invalid.len()
        );

        let mut pending = valid.iter();
        while let Some(server) = pending.next() {
            let created = tokio::select! {
                reason = self.interrupted(deadline) => {
                    tracing::warn!("Import interrupted: {}", reason);
                    report.failed.extend(
                        std::iter::once(server)
                            .chain(pending.by_ref())
                            .map(|server| RecordFailure::new(server, None, reason)),
                    );
                    break;
                }
                result = self.registry.create_server(server) => result,
            };

            match created {
                Ok(_) => report.created.push(server.name.clone()),
                Err(e) => {
                    tracing::warn!(name = %server.name, version = %server.version, "Failed to create server: {}", e);
                    report.failed.push(RecordFailure::new(server, None, e.to_string()));
                }
            }
        }

        tracing::info!(
            "Import completed: {} created, {} failed",
            report.created.len(),
            report.failed.len()
        );

        if report.is_complete() {
            Ok(report)
        } else {
            Err(RegistryError::ImportIncomplete(report))
        }
    }

    async fn fetch(&self, url: &str) -> RegistryResult<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| source_unreachable(url, format!("failed to fetch: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(source_unreachable(url, format!("HTTP {} from server", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| source_unreachable(url, format!("failed to read response: {}", e)))?;

        Ok(body.to_vec())
    }

    async fn fetch_catalog(
        &self,
        source: &str,
        deadline: Option<Instant>,
    ) -> RegistryResult<Vec<ServerJson>> {
        let base =
            Url::parse(source).map_err(|e| source_unreachable(source, format!("invalid URL: {}", e)))?;

        let mut servers = Vec::new();
        let mut seen_cursors = HashSet::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0;

        loop {
            if pages >= self.max_pages {
                return Err(RegistryError::PaginationLimit {
                    source_locator: source.to_string(),
                    reason: format!("more than {} pages", self.max_pages),
                });
            }

            let mut page_url = base.clone();
            if let Some(cursor) = &cursor {
                page_url
                    .query_pairs_mut()
                    .append_pair(CURSOR_QUERY_PARAM, cursor);
            }

            tracing::debug!(page = pages + 1, url = %page_url, "Fetching catalog page");
            let body = self
                .guarded(source, deadline, self.fetch(page_url.as_str()))
                .await?;
            pages += 1;

            let page: ServerListResponse =
                serde_json::from_slice(&body).map_err(|e| RegistryError::DecodeFailure {
                    source_locator: page_url.to_string(),
                    reason: e.to_string(),
                })?;
            servers.extend(page.servers.into_iter().map(|entry| entry.server));

            let next = page
                .metadata
                .and_then(|metadata| metadata.next_cursor)
                .filter(|next| !next.is_empty());

            match next {
                None => break,
                Some(next) => {
                    if !seen_cursors.insert(next.clone()) {
                        return Err(RegistryError::PaginationLimit {
                            source_locator: source.to_string(),
                            reason: format!("cursor `{}` was returned twice", next),
                        });
                    }
                    tracing::debug!(cursor = %next, "Next catalog page");
                    cursor = Some(next);
                }
            }
        }

        tracing::info!("Fetched {} servers across {} pages", servers.len(), pages);
        Ok(servers)
    }

    /// Race a fetch against cancellation and the run deadline.
    async fn guarded<T>(
        &self,
        source: &str,
        deadline: Option<Instant>,
        fetch: impl Future<Output = RegistryResult<T>>,
    ) -> RegistryResult<T> {
        tokio::select! {
            reason = self.interrupted(deadline) => Err(source_unreachable(source, reason)),
            result = fetch => result,
        }
    }

    /// Resolves with the reason once the run is cancelled or out of time.
    async fn interrupted(&self, deadline: Option<Instant>) -> &'static str {
        let expired = async {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = self.cancel.cancelled() => CANCELLED,
            _ = expired => DEADLINE_EXCEEDED,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Decide how a source locator is read.
pub fn classify_source(locator: &str) -> SourceKind {
    if locator == EMBEDDED_SEED_SOURCE {
        return SourceKind::Embedded;
    }

    if !(locator.starts_with("http://") || locator.starts_with("https://")) {
        return SourceKind::LocalFile;
    }

    let is_catalog = Url::parse(locator)
        .map(|url| url.path().contains(CATALOG_PATH_SEGMENT))
        .unwrap_or(false);

    if is_catalog {
        SourceKind::Catalog
    } else {
        SourceKind::RemoteFile
    }
}

/// Decode a seed file: a bare JSON array of manifests.
pub fn decode_seed(bytes: &[u8], source: &str) -> RegistryResult<Vec<ServerJson>> {
    serde_json::from_slice(bytes).map_err(|e| RegistryError::DecodeFailure {
        source_locator: source.to_string(),
        reason: e.to_string(),
    })
}

/// Split decoded records into valid ones, recording the rest as invalid.
fn partition_valid(servers: Vec<ServerJson>, report: &mut ImportReport) -> Vec<ServerJson> {
    let mut valid = Vec::with_capacity(servers.len());

    for server in servers {
        match validate_server_json(&server) {
            Ok(()) => valid.push(server),
            Err(issue) => {
                tracing::warn!(name = %server.name, "Skipping invalid server: {}", issue);
                report
                    .invalid
                    .push(RecordFailure::new(&server, Some(issue.code), issue.to_string()));
            }
        }
    }

    valid
}

async fn read_local(path: &str) -> RegistryResult<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| source_unreachable(path, format!("failed to read file: {}", e)))
}

fn source_unreachable(source: &str, reason: impl Into<String>) -> RegistryError {
    RegistryError::SourceUnreachable {
        source_locator: source.to_string(),
        reason: reason.into(),
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
