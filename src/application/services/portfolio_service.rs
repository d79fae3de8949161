use crate::application::ports::collection_api::ListQuery;
use crate::application::ports::notifier::{Notification, NotificationVariant, Notifier};
use crate::application::ports::portfolio_api::PublicApi;
use crate::application::services::collection_service::CollectionService;
use crate::domain::editable::sorted_by_sort_order;
use crate::domain::entities::{ContactMessage, Experience, Project};
use crate::presentation::dto::ApiListResponse;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_PROJECT_PAGE: u32 = 1;

/// Read models behind the public site, plus the contact form.
pub struct PortfolioService {
    public_api: Arc<dyn PublicApi>,
    projects: Arc<CollectionService<Project>>,
    experiences: Arc<CollectionService<Experience>>,
    notifier: Arc<dyn Notifier>,
    project_page_limit: u32,
}

impl PortfolioService {
    pub fn new(
        public_api: Arc<dyn PublicApi>,
        projects: Arc<CollectionService<Project>>,
        experiences: Arc<CollectionService<Experience>>,
        notifier: Arc<dyn Notifier>,
        project_page_limit: u32,
    ) -> Self {
        Self {
            public_api,
            projects,
            experiences,
            notifier,
            project_page_limit,
        }
    }

    /// The public list always sends paging; search text is trimmed and
    /// dropped when blank.
    pub fn project_query(&self, filter: &ListQuery) -> ListQuery {
        ListQuery {
            page: Some(filter.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PROJECT_PAGE)),
            limit: Some(
                filter
                    .limit
                    .filter(|l| *l > 0)
                    .unwrap_or(self.project_page_limit),
            ),
            q: filter
                .q
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
            featured: filter.featured,
        }
    }

    pub async fn projects(&self, filter: &ListQuery) -> Result<ApiListResponse<Project>, AppError> {
        self.projects.fetch_with(&self.project_query(filter)).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let filter = ListQuery::default().with_featured(true);
        Ok(self.projects(&filter).await?.data)
    }

    pub async fn project(&self, slug: &str) -> Result<Project, AppError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(AppError::validation("Project slug is required"));
        }
        self.public_api.project_by_slug(slug).await
    }

    /// Experiences in display order.
    pub async fn experiences(&self) -> Result<Vec<Experience>, AppError> {
        let page = self.experiences.fetch().await?;
        Ok(sorted_by_sort_order(&page.data))
    }

    pub async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), AppError> {
        let message = message.trimmed();
        if let Err(reason) = message.validate() {
            self.notifier.notify(
                Notification::new("Incomplete form")
                    .with_description(reason.clone())
                    .with_variant(NotificationVariant::Warning),
            );
            return Err(AppError::Validation(reason));
        }

        match self.public_api.send_contact_message(&message).await {
            Ok(()) => {
                info!(subject = %message.subject, "contact message sent");
                self.notifier.notify(
                    Notification::new("Message sent!")
                        .with_description(
                            "Thank you for your message. I'll get back to you soon!",
                        )
                        .with_variant(NotificationVariant::Success),
                );
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "contact message failed");
                self.notifier.notify(
                    Notification::new("Failed to send message")
                        .with_description("Please try again later.")
                        .with_variant(NotificationVariant::Destructive),
                );
                Err(err)
            }
        }
    }
}
