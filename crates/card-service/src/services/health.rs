//! Health service

use tracing::{instrument, warn};

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check that the backend answers a notice list request
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let backend_healthy = match self.ctx.notice_repo().list_all().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Backend readiness check failed");
                false
            }
        };
        ReadinessResponse::ready(backend_healthy)
    }
}
