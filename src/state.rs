use crate::application::ports::cache::ResponseCache;
use crate::application::ports::collection_api::ListQuery;
use crate::application::ports::notifier::Notifier;
use crate::application::ports::token_store::TokenStore;
use crate::application::services::{
    AuthService, CollectionService, DashboardService, DraftEditor, PortfolioService,
};
use crate::domain::entities::{DashboardOverview, Experience, Project, Tag};
use crate::infrastructure::cache::MemoryCacheService;
use crate::infrastructure::http::{ApiClient, HttpAdminApi, HttpCollectionApi, HttpPublicApi};
use crate::infrastructure::storage::token_store_for;
use crate::presentation::dto::ApiListResponse;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Every service of the client, wired against one API base URL.
pub struct AppState {
    pub config: AppConfig,
    pub token_store: Arc<dyn TokenStore>,
    pub auth: Arc<AuthService>,
    pub portfolio: Arc<PortfolioService>,
    pub dashboard: Arc<DashboardService>,
    pub tags: Arc<CollectionService<Tag>>,
    pub experience_editor: Arc<DraftEditor<Experience>>,
    pub project_editor: Arc<DraftEditor<Project>>,
}

fn list_cache<T>(ttl_secs: u64) -> Arc<dyn ResponseCache<ApiListResponse<T>>>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(MemoryCacheService::<ApiListResponse<T>>::new(ttl_secs))
}

impl AppState {
    pub fn new(config: AppConfig, notifier: Arc<dyn Notifier>) -> Result<Self, AppError> {
        let token_store = token_store_for(&config.auth);
        Self::with_token_store(config, notifier, token_store)
    }

    pub fn with_token_store(
        config: AppConfig,
        notifier: Arc<dyn Notifier>,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, AppError> {
        config.validate().map_err(AppError::Configuration)?;
        let ttl = config.cache.ttl_secs;
        let editor = &config.editor;

        let public_client =
            Arc::new(ApiClient::public(&config.api)?.with_notifier(notifier.clone()));
        let admin_client = Arc::new(
            ApiClient::admin(&config.api, token_store.clone())?.with_notifier(notifier.clone()),
        );

        let public_api = Arc::new(HttpPublicApi::new(public_client.clone()));
        let admin_api = Arc::new(HttpAdminApi::new(admin_client.clone()));

        let auth = Arc::new(AuthService::new(
            public_api.clone(),
            admin_api.clone(),
            token_store.clone(),
        ));

        let public_projects = Arc::new(CollectionService::<Project>::new(
            Arc::new(HttpCollectionApi::<Project>::new(public_client.clone(), "/projects")),
            list_cache(ttl),
            ListQuery::paged(1, editor.project_page_limit),
        ));
        let public_experiences = Arc::new(CollectionService::<Experience>::new(
            Arc::new(HttpCollectionApi::<Experience>::new(public_client, "/experiences")),
            list_cache(ttl),
            ListQuery::default(),
        ));
        let portfolio = Arc::new(PortfolioService::new(
            public_api,
            public_projects,
            public_experiences,
            notifier.clone(),
            editor.project_page_limit,
        ));

        let dashboard = Arc::new(DashboardService::new(
            admin_api,
            Arc::new(MemoryCacheService::<DashboardOverview>::new(ttl)),
        ));

        let tags = Arc::new(CollectionService::<Tag>::new(
            Arc::new(HttpCollectionApi::<Tag>::new(admin_client.clone(), "/admin/tags")),
            list_cache(ttl),
            ListQuery::paged(1, editor.tag_page_limit),
        ));

        let experience_api = Arc::new(HttpCollectionApi::<Experience>::admin_resource(
            admin_client.clone(),
        ));
        let experience_editor = Arc::new(DraftEditor::<Experience>::new(
            experience_api.clone(),
            Arc::new(CollectionService::<Experience>::new(
                experience_api,
                list_cache(ttl),
                ListQuery::paged(1, editor.experience_page_limit),
            )),
            notifier.clone(),
            editor.mutation_timeout(),
        ));

        let project_api = Arc::new(HttpCollectionApi::<Project>::admin_resource(admin_client));
        let project_editor = Arc::new(DraftEditor::<Project>::new(
            project_api.clone(),
            Arc::new(CollectionService::<Project>::new(
                project_api,
                list_cache(ttl),
                ListQuery::paged(1, editor.project_page_limit),
            )),
            notifier,
            editor.mutation_timeout(),
        ));

        Ok(Self {
            config,
            token_store,
            auth,
            portfolio,
            dashboard,
            tags,
            experience_editor,
            project_editor,
        })
    }
}
