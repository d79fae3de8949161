use crate::application::ports::cache::ResponseCache;
use crate::application::ports::portfolio_api::AdminApi;
use crate::domain::entities::DashboardOverview;
use crate::shared::error::AppError;
use std::sync::Arc;

const OVERVIEW_KEY: &str = "/admin/dashboard/overview";

pub struct DashboardService {
    admin_api: Arc<dyn AdminApi>,
    cache: Arc<dyn ResponseCache<DashboardOverview>>,
}

impl DashboardService {
    pub fn new(
        admin_api: Arc<dyn AdminApi>,
        cache: Arc<dyn ResponseCache<DashboardOverview>>,
    ) -> Self {
        Self { admin_api, cache }
    }

    pub async fn overview(&self) -> Result<DashboardOverview, AppError> {
        if let Some(overview) = self.cache.get(OVERVIEW_KEY).await {
            return Ok(overview);
        }
        self.refresh().await
    }

    pub async fn refresh(&self) -> Result<DashboardOverview, AppError> {
        let overview = self.admin_api.dashboard_overview().await?;
        self.cache
            .set(OVERVIEW_KEY.to_string(), overview.clone())
            .await;
        Ok(overview)
    }
}
