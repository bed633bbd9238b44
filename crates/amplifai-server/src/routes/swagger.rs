//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    // Campaign models
    CampaignLaunchRequest,
    CampaignLaunchResponse,
    // Status models
    ConfigDiagnostics,
    // Route models
    GenericRouteRequest,
    GenericRouteResponse,
    // Stats models
    LogStatsResponse,
    MemoryRecordResponse,
    MemoryStatsResponse,
    // Playbook models
    PlaybookFileForm,
    PlaybookUploadRequest,
    PlaybookUploadResponse,
    ServiceInfo,
    StatusResponse,
    WebhookTestResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        super::status::root,
        super::status::status,
        // Campaign endpoints
        super::campaign::launch_campaign,
        // Playbook endpoints
        super::playbook::upload_playbook,
        super::playbook::upload_playbook_file,
        // Route endpoints
        super::route::route_request,
        // Stats endpoints
        super::stats::log_stats,
        super::stats::memory_stats,
        super::stats::recent_memories,
        // Diagnostics endpoints
        super::diagnostics::debug_config,
        super::diagnostics::test_webhook,
    ),
    info(
        title = "AmplifAI Execution Engine API",
        version = "1.0.0",
        description = "Campaign launch, playbook intake and module routing with append-only JSONL records.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Service information and health check"),
        (name = "Campaign", description = "Campaign launch"),
        (name = "Playbook", description = "Playbook upload (JSON or file)"),
        (name = "Route", description = "Generic module routing"),
        (name = "Stats", description = "Log and memory store statistics"),
        (name = "Diagnostics", description = "Configuration and webhook checks"),
    ),
    components(
        schemas(
            // Status
            ServiceInfo,
            StatusResponse,
            ConfigDiagnostics,
            WebhookTestResponse,
            // Campaign
            CampaignLaunchRequest,
            CampaignLaunchResponse,
            // Playbook
            PlaybookUploadRequest,
            PlaybookFileForm,
            PlaybookUploadResponse,
            // Route
            GenericRouteRequest,
            GenericRouteResponse,
            // Stats
            LogStatsResponse,
            MemoryStatsResponse,
            MemoryRecordResponse,
            // Errors
            ErrorResponse,
        )
    )
)]
pub struct ApiDoc;
