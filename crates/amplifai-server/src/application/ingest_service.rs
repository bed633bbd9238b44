//! Ingest Application Service (Use Case)
//!
//! Validates incoming requests, records them in the log and memory
//! stores and announces them through the notifier.
//!
//! Record writes are best-effort: a failed append is logged, reported
//! through an error notification, and does not change the outcome
//! returned to the caller.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde_json::json;

use amplifai::{
    CampaignRequest, DomainError, LogRecord, MemoryRecord, Notification, PlaybookFileUpload,
    PlaybookId, PlaybookUpload, Record, RecordStore, RouteRequest, KIND_CAMPAIGN, KIND_PLAYBOOK,
    KIND_ROUTE,
};

use super::NotificationDispatcher;

/// Accepted campaign launch
#[derive(Debug, Clone)]
pub struct CampaignLaunch {
    pub campaign_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Accepted playbook upload (JSON or file)
#[derive(Debug, Clone)]
pub struct PlaybookReceipt {
    pub playbook_id: PlaybookId,
    pub timestamp: DateTime<Utc>,
}

/// Acknowledged route request
#[derive(Debug, Clone)]
pub struct RouteReceipt {
    pub module_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Application service for request intake
pub struct IngestService<L, M>
where
    L: RecordStore<LogRecord>,
    M: RecordStore<MemoryRecord>,
{
    logs: Arc<L>,
    memory: Arc<M>,
    notifications: NotificationDispatcher,
}

impl<L, M> IngestService<L, M>
where
    L: RecordStore<LogRecord>,
    M: RecordStore<MemoryRecord>,
{
    pub fn new(logs: Arc<L>, memory: Arc<M>, notifications: NotificationDispatcher) -> Self {
        Self {
            logs,
            memory,
            notifications,
        }
    }

    /// Launch a campaign
    pub async fn launch_campaign(
        &self,
        campaign: CampaignRequest,
    ) -> Result<CampaignLaunch, DomainError> {
        const ENDPOINT: &str = "/launch-campaign";
        let started = Instant::now();

        if let Err(e) = campaign.validate() {
            self.reject(ENDPOINT, "campaign_rejected", &e, json!(campaign))
                .await;
            return Err(e);
        }

        let timestamp = Utc::now();
        let memory = MemoryRecord::new(
            KIND_CAMPAIGN,
            json!({
                "campaign_id": campaign.campaign_id,
                "budget": campaign.budget,
                "audience": campaign.audience,
                "creatives": campaign.creatives,
                "status": "launched",
                "launch_timestamp": timestamp,
            }),
        )
        .with_metadata(json!({
            "entity_type": "campaign",
            "entity_id": campaign.campaign_id,
            "status": "launched",
        }));
        self.persist(self.memory.as_ref(), memory, ENDPOINT).await;

        let response = json!({
            "status": "launched",
            "campaign_id": campaign.campaign_id,
            "timestamp": timestamp,
        });
        self.log_call(ENDPOINT, "campaign_launched", json!(campaign), response, started)
            .await;

        self.notifications
            .dispatch(Notification::campaign_launched(&campaign));

        tracing::info!("✅ Campaign {} launched successfully", campaign.campaign_id);

        Ok(CampaignLaunch {
            campaign_id: campaign.campaign_id,
            timestamp,
        })
    }

    /// Accept a playbook submitted as JSON
    pub async fn upload_playbook(
        &self,
        playbook: PlaybookUpload,
    ) -> Result<PlaybookReceipt, DomainError> {
        const ENDPOINT: &str = "/upload-playbook";
        let started = Instant::now();

        if let Err(e) = playbook.validate() {
            self.reject(ENDPOINT, "playbook_rejected", &e, json!(playbook))
                .await;
            return Err(e);
        }

        let receipt = self
            .accept_playbook(ENDPOINT, "json", json!(playbook), &playbook, started)
            .await;

        tracing::info!(
            "✅ Playbook '{}' uploaded successfully: {}",
            playbook.playbook_name,
            receipt.playbook_id
        );
        Ok(receipt)
    }

    /// Accept a playbook uploaded as a multipart file
    ///
    /// Only the file summary (name, content type, size) is recorded.
    pub async fn upload_playbook_file(
        &self,
        upload: PlaybookFileUpload,
    ) -> Result<PlaybookReceipt, DomainError> {
        const ENDPOINT: &str = "/upload-playbook-file";
        let started = Instant::now();

        let request = json!({
            "playbook_name": upload.playbook_name,
            "version": upload.version,
            "tags": upload.tags,
            "file": upload.file,
        });

        let (playbook, file) = match upload.into_parts() {
            Ok(parts) => parts,
            Err(e) => {
                self.reject(ENDPOINT, "playbook_rejected", &e, request).await;
                return Err(e);
            }
        };
        let receipt = self
            .accept_playbook(ENDPOINT, "file", request, &playbook, started)
            .await;

        tracing::info!(
            "✅ Playbook file '{}' uploaded successfully: {} ({} bytes)",
            playbook.playbook_name,
            receipt.playbook_id,
            file.size_bytes
        );
        Ok(receipt)
    }

    /// Record and acknowledge a request for a named module
    pub async fn route(&self, route: RouteRequest) -> RouteReceipt {
        let endpoint = format!("/route/{}", route.module_name);
        let started = Instant::now();
        let timestamp = Utc::now();

        let memory = MemoryRecord::new(
            KIND_ROUTE,
            json!({
                "module_name": route.module_name,
                "payload": route.payload,
                "metadata": route.metadata,
                "routed_at": timestamp,
            }),
        )
        .with_metadata(json!({ "module_name": route.module_name }));
        self.persist(self.memory.as_ref(), memory, &endpoint).await;

        let response = json!({
            "status": "routed",
            "module": route.module_name,
            "timestamp": timestamp,
        });
        let request = json!({ "payload": route.payload, "metadata": route.metadata });
        self.log_call(&endpoint, "request_routed", request, response, started)
            .await;

        tracing::info!("✅ Request routed to {}", route.module_name);

        RouteReceipt {
            module_name: route.module_name,
            timestamp,
        }
    }

    async fn accept_playbook(
        &self,
        endpoint: &str,
        source: &str,
        request: serde_json::Value,
        playbook: &PlaybookUpload,
        started: Instant,
    ) -> PlaybookReceipt {
        let playbook_id = PlaybookId::generate();
        let timestamp = Utc::now();

        let memory = MemoryRecord::new(
            KIND_PLAYBOOK,
            json!({
                "playbook_id": playbook_id,
                "playbook_name": playbook.playbook_name,
                "content": playbook.content,
                "version": playbook.version,
                "tags": playbook.tags,
                "source": source,
                "upload_timestamp": timestamp,
            }),
        )
        .with_metadata(json!({
            "entity_type": "playbook",
            "entity_id": playbook_id,
            "name": playbook.playbook_name,
            "version": playbook.version,
        }));
        self.persist(self.memory.as_ref(), memory, endpoint).await;

        let response = json!({
            "status": "received",
            "playbook_id": playbook_id,
            "timestamp": timestamp,
        });
        self.log_call(endpoint, "playbook_uploaded", request, response, started)
            .await;

        self.notifications
            .dispatch(Notification::playbook_uploaded(playbook_id.as_str(), playbook));

        PlaybookReceipt {
            playbook_id,
            timestamp,
        }
    }

    async fn log_call(
        &self,
        endpoint: &str,
        event: &str,
        request: serde_json::Value,
        response: serde_json::Value,
        started: Instant,
    ) {
        let record = LogRecord::info(
            event,
            json!({
                "endpoint": endpoint,
                "request": request,
                "response": response,
                "status": "success",
                "duration_ms": started.elapsed().as_millis() as u64,
            }),
        );
        self.persist(self.logs.as_ref(), record, endpoint).await;
    }

    /// Log a rejected request; never writes to the memory store
    async fn reject(
        &self,
        endpoint: &str,
        event: &str,
        error: &DomainError,
        request: serde_json::Value,
    ) {
        tracing::warn!("⚠️  Rejected {}: {}", endpoint, error);

        let record = LogRecord::warning(
            event,
            json!({
                "endpoint": endpoint,
                "error": error.to_string(),
                "request": request,
            }),
        );
        if let Err(e) = self.logs.append(&record).await {
            tracing::error!("❌ Failed to record rejection for {}: {}", endpoint, e);
        }
    }

    async fn persist<R, S>(&self, store: &S, record: R, endpoint: &str)
    where
        R: Record,
        S: RecordStore<R> + ?Sized,
    {
        if let Err(e) = store.append(&record).await {
            tracing::error!(
                "❌ Failed to write record to {} for {}: {}",
                store.location(),
                endpoint,
                e
            );
            self.notifications.dispatch(Notification::error(
                endpoint,
                format!("Failed to write record: {e}"),
                json!({ "store": store.location() }),
            ));
        }
    }
}
