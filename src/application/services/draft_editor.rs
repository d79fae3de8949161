//! Admin editor for one record kind.
//!
//! The editor owns an [`EditableList`] seeded from the cached collection and
//! reconciles it with the API on save and delete. Operations never return
//! `Err`: every failure is reported through the [`Notifier`] and leaves the
//! local list as it was.

use crate::application::ports::collection_api::RecordApi;
use crate::application::ports::notifier::{Notification, NotificationVariant, Notifier};
use crate::application::services::collection_service::CollectionService;
use crate::application::shared::mappers::Upsertable;
use crate::domain::editable::EditableList;
use crate::domain::entities::Tag;
use crate::domain::value_objects::RecordId;
use crate::shared::error::AppError;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryActivity {
    Saving,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A draft was created; the entry now carries the server id.
    Created { id: String },
    Updated,
    Invalid(String),
    Failed(String),
    /// Another save or delete for the entry is still running.
    Busy,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A draft was dropped locally.
    Removed,
    Deleted,
    Failed(String),
    Busy,
    NotFound,
}

type ActivityMap = HashMap<String, (EntryActivity, u64)>;

/// Clears an entry's indicator when the operation that set it ends, unless
/// the indicator was reset and reused in the meantime.
struct ActivityGuard {
    activity: Arc<Mutex<ActivityMap>>,
    id: String,
    ticket: u64,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        let mut activity = self
            .activity
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if activity.get(&self.id).map(|(_, ticket)| *ticket) == Some(self.ticket) {
            activity.remove(&self.id);
        }
    }
}

pub struct DraftEditor<T: Upsertable> {
    records: Arc<dyn RecordApi<T>>,
    collection: Arc<CollectionService<T>>,
    notifier: Arc<dyn Notifier>,
    list: RwLock<EditableList<T>>,
    activity: Arc<Mutex<ActivityMap>>,
    next_ticket: AtomicU64,
    mutation_timeout: Duration,
}

impl<T: Upsertable> DraftEditor<T> {
    pub fn new(
        records: Arc<dyn RecordApi<T>>,
        collection: Arc<CollectionService<T>>,
        notifier: Arc<dyn Notifier>,
        mutation_timeout: Duration,
    ) -> Self {
        Self {
            records,
            collection,
            notifier,
            list: RwLock::new(EditableList::new()),
            activity: Arc::new(Mutex::new(HashMap::new())),
            next_ticket: AtomicU64::new(1),
            mutation_timeout,
        }
    }

    /// Fetches (cache first) and seeds the list if it has not been seeded.
    /// Returns the number of entries afterwards.
    pub async fn load(&self) -> Result<usize, AppError> {
        let page = self.collection.fetch().await?;
        Ok(self.seed(&page.data).await)
    }

    /// Refreshes the backing collection. Local entries are only touched when
    /// the list is still waiting for its first non-empty fetch.
    pub async fn revalidate(&self) -> Result<usize, AppError> {
        let page = self.collection.revalidate().await?;
        Ok(self.seed(&page.data).await)
    }

    pub async fn snapshot(&self) -> EditableList<T> {
        self.list.read().await.clone()
    }

    pub async fn entries(&self) -> Vec<T> {
        self.list.read().await.entries().to_vec()
    }

    /// Appends a blank draft and returns its placeholder id.
    pub async fn add(&self) -> String {
        let mut list = self.list.write().await;
        let next = list.add();
        let id = next
            .entries()
            .last()
            .map(|entry| entry.id().to_string())
            .unwrap_or_default();
        *list = next;
        id
    }

    /// Puts a complete record into the list, replacing the entry with the
    /// same id or appending it. Returns the id to pass to [`Self::save`].
    pub async fn stage(&self, record: T) -> String {
        let mut list = self.list.write().await;
        let (next, id) = list.put(record);
        *list = next;
        id
    }

    /// Drops an entry locally without touching the API. Refused while a save
    /// or delete for the entry is running.
    pub async fn remove(&self, id: &str) -> bool {
        if self.activity(id).is_some() {
            debug!(resource = T::RESOURCE, id = %id, "remove rejected, entry busy");
            return false;
        }
        self.apply(|list| list.remove(id)).await;
        true
    }

    pub async fn update_field(&self, id: &str, field: T::Field) {
        self.apply(|list| list.update_field(id, field)).await;
    }

    pub async fn toggle_tag(&self, id: &str, tag: &Tag) {
        self.apply(|list| list.toggle_tag(id, tag)).await;
    }

    pub fn activity(&self, id: &str) -> Option<EntryActivity> {
        self.lock_activity().get(id).map(|(activity, _)| *activity)
    }

    pub fn is_saving(&self, id: &str) -> bool {
        self.activity(id) == Some(EntryActivity::Saving)
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.activity(id) == Some(EntryActivity::Deleting)
    }

    /// Resets an entry's indicator. The running operation, if any, still
    /// completes; it just no longer blocks a new one.
    pub fn clear_activity(&self, id: &str) {
        self.lock_activity().remove(id);
    }

    /// Creates a draft or updates a record, chosen by the shape of `id`.
    /// The entry's position in the list becomes its `sortOrder`.
    pub async fn save(&self, id: &str) -> SaveOutcome {
        let Some((entry, index)) = self.lookup(id).await else {
            return SaveOutcome::NotFound;
        };

        if let Err(message) = entry.validate() {
            self.notify(
                "Missing information",
                message.clone(),
                NotificationVariant::Warning,
            );
            return SaveOutcome::Invalid(message);
        }

        let Some(guard) = self.begin(id, EntryActivity::Saving) else {
            debug!(resource = T::RESOURCE, id = %id, "save rejected, entry busy");
            return SaveOutcome::Busy;
        };

        let payload = entry.to_payload(index as i64 + 1);
        let result = match RecordId::classify(id) {
            RecordId::Persisted(_) => self
                .bounded(self.records.update(id, &payload))
                .await
                .map(|()| SaveOutcome::Updated),
            RecordId::Draft(_) => match self.bounded(self.records.create(&payload)).await {
                Ok(new_id) => {
                    self.apply(|list| list.replace_id(id, &new_id)).await;
                    Ok(SaveOutcome::Created { id: new_id })
                }
                Err(err) => Err(err),
            },
        };
        drop(guard);

        match result {
            Ok(outcome) => {
                info!(resource = T::RESOURCE, id = %id, outcome = ?outcome, "record saved");
                let title = match outcome {
                    SaveOutcome::Created { .. } => "Created",
                    _ => "Updated",
                };
                self.notify(title, "Saved.", NotificationVariant::Success);
                self.refresh_collection().await;
                outcome
            }
            Err(err) => {
                warn!(resource = T::RESOURCE, id = %id, error = %err, "save failed");
                self.notify_failure();
                SaveOutcome::Failed(err.to_string())
            }
        }
    }

    /// Drops a draft locally, or deletes a record remotely and then rebuilds
    /// the list from the refetched collection, keeping local edits and drafts.
    pub async fn delete(&self, id: &str) -> DeleteOutcome {
        if self.lookup(id).await.is_none() {
            return DeleteOutcome::NotFound;
        }

        let Some(guard) = self.begin(id, EntryActivity::Deleting) else {
            debug!(resource = T::RESOURCE, id = %id, "delete rejected, entry busy");
            return DeleteOutcome::Busy;
        };

        if RecordId::classify(id).is_draft() {
            self.apply(|list| list.remove(id)).await;
            drop(guard);
            self.notify("Removed", "Draft removed.", NotificationVariant::Default);
            return DeleteOutcome::Removed;
        }

        let result = self.bounded(self.records.delete(id)).await;
        drop(guard);

        if let Err(err) = result {
            warn!(resource = T::RESOURCE, id = %id, error = %err, "delete failed");
            self.notify_failure();
            return DeleteOutcome::Failed(err.to_string());
        }

        info!(resource = T::RESOURCE, id = %id, "record deleted");
        self.apply(|list| list.remove(id)).await;
        self.notify(
            "Deleted",
            format!("{} deleted.", T::LABEL),
            NotificationVariant::Success,
        );

        self.collection.invalidate().await;
        match self.collection.revalidate().await {
            Ok(page) => self.apply(|list| list.reconcile(&page.data)).await,
            Err(err) => {
                warn!(resource = T::RESOURCE, error = %err, "refetch after delete failed");
            }
        }
        DeleteOutcome::Deleted
    }

    async fn seed(&self, fetched: &[T]) -> usize {
        let mut list = self.list.write().await;
        *list = list.seed(fetched);
        list.len()
    }

    async fn apply<F>(&self, change: F)
    where
        F: FnOnce(&EditableList<T>) -> EditableList<T>,
    {
        let mut list = self.list.write().await;
        *list = change(&list);
    }

    async fn lookup(&self, id: &str) -> Option<(T, usize)> {
        let list = self.list.read().await;
        let index = list.position(id)?;
        Some((list.entries()[index].clone(), index))
    }

    async fn refresh_collection(&self) {
        self.collection.invalidate().await;
        if let Err(err) = self.collection.revalidate().await {
            warn!(resource = T::RESOURCE, error = %err, "revalidation failed");
        }
    }

    async fn bounded<F, R>(&self, call: F) -> Result<R, AppError>
    where
        F: Future<Output = Result<R, AppError>>,
    {
        match tokio::time::timeout(self.mutation_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(self.mutation_timeout.as_secs())),
        }
    }

    fn begin(&self, id: &str, kind: EntryActivity) -> Option<ActivityGuard> {
        let mut activity = self.lock_activity();
        if activity.contains_key(id) {
            return None;
        }
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        activity.insert(id.to_string(), (kind, ticket));
        Some(ActivityGuard {
            activity: Arc::clone(&self.activity),
            id: id.to_string(),
            ticket,
        })
    }

    fn lock_activity(&self) -> MutexGuard<'_, ActivityMap> {
        self.activity.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, title: &str, description: impl Into<String>, variant: NotificationVariant) {
        self.notifier.notify(
            Notification::new(title)
                .with_description(description)
                .with_variant(variant),
        );
    }

    fn notify_failure(&self) {
        self.notify(
            "Failed",
            "Please try again.",
            NotificationVariant::Destructive,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::collection_api::{CollectionApi, ListQuery};
    use crate::domain::entities::{Experience, ExperienceField};
    use crate::infrastructure::cache::MemoryCacheService;
    use crate::infrastructure::notify::QueuedNotifier;
    use crate::presentation::dto::experience_dto::ExperienceUpsertPayload;
    use crate::presentation::dto::ApiListResponse;
    use async_trait::async_trait;

    const ID_A: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    const ID_B: &str = "9b2e7c1a-0d4f-4e8a-a1b2-c3d4e5f60718";
    const CREATED_ID: &str = "1c6a2f0e-7b3d-4f59-8e21-5a9d0b7c3e44";

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(ExperienceUpsertPayload),
        Update(String, ExperienceUpsertPayload),
        Delete(String),
    }

    #[derive(Default)]
    struct FakeApi {
        server: Mutex<Vec<Experience>>,
        calls: Mutex<Vec<Call>>,
        fail_mutations: bool,
        delay: Option<Duration>,
        /// Holds the create response back after the record is stored.
        create_delay: Option<Duration>,
    }

    impl FakeApi {
        fn with(records: Vec<Experience>) -> Self {
            Self {
                server: Mutex::new(records),
                ..Self::default()
            }
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn mutations(&self) -> Vec<Call> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|call| **call != Call::List)
                .cloned()
                .collect()
        }

        async fn outcome(&self) -> Result<(), AppError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_mutations {
                return Err(AppError::Network("connection reset".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CollectionApi<Experience> for FakeApi {
        fn path(&self) -> &str {
            "/admin/experiences"
        }

        async fn list(&self, _query: &ListQuery) -> Result<ApiListResponse<Experience>, AppError> {
            self.record(Call::List);
            Ok(ApiListResponse::new(self.server.lock().unwrap().clone()))
        }
    }

    #[async_trait]
    impl RecordApi<Experience> for FakeApi {
        async fn create(&self, payload: &ExperienceUpsertPayload) -> Result<String, AppError> {
            self.record(Call::Create(payload.clone()));
            if !self.fail_mutations {
                let mut created = experience(CREATED_ID, &payload.title, payload.sort_order);
                created.company = payload.company.clone();
                self.server.lock().unwrap().push(created);
            }
            if let Some(delay) = self.create_delay {
                tokio::time::sleep(delay).await;
            }
            self.outcome().await?;
            Ok(CREATED_ID.to_string())
        }

        async fn update(&self, id: &str, payload: &ExperienceUpsertPayload) -> Result<(), AppError> {
            self.record(Call::Update(id.to_string(), payload.clone()));
            self.outcome().await
        }

        async fn delete(&self, id: &str) -> Result<(), AppError> {
            self.record(Call::Delete(id.to_string()));
            self.outcome().await?;
            self.server.lock().unwrap().retain(|record| record.id != id);
            Ok(())
        }
    }

    fn experience(id: &str, title: &str, sort_order: i64) -> Experience {
        Experience {
            id: id.to_string(),
            title: title.to_string(),
            sort_order,
            ..Experience::default()
        }
    }

    fn editor(
        api: Arc<FakeApi>,
        timeout: Duration,
    ) -> (DraftEditor<Experience>, Arc<QueuedNotifier>) {
        let notifier = Arc::new(QueuedNotifier::new());
        let collection = Arc::new(CollectionService::<Experience>::new(
            api.clone(),
            Arc::new(MemoryCacheService::<ApiListResponse<Experience>>::new(60)),
            ListQuery::paged(1, 50),
        ));
        let editor = DraftEditor::new(api, collection, notifier.clone(), timeout);
        (editor, notifier)
    }

    fn default_editor(api: Arc<FakeApi>) -> (DraftEditor<Experience>, Arc<QueuedNotifier>) {
        editor(api, Duration::from_secs(5))
    }

    fn titles(entries: &[Experience]) -> Vec<String> {
        entries.iter().map(|entry| entry.title.clone()).collect()
    }

    #[tokio::test]
    async fn load_seeds_once_and_keeps_local_edits() {
        let api = Arc::new(FakeApi::with(vec![
            experience(ID_B, "second", 2),
            experience(ID_A, "first", 1),
        ]));
        let (editor, _) = default_editor(api.clone());

        assert_eq!(editor.load().await.unwrap(), 2);
        editor
            .update_field(ID_A, ExperienceField::Title("edited".into()))
            .await;
        api.server.lock().unwrap().push(experience(CREATED_ID, "third", 3));

        assert_eq!(editor.revalidate().await.unwrap(), 2);
        assert_eq!(titles(&editor.entries().await), vec!["edited", "second"]);
    }

    #[tokio::test]
    async fn saving_a_draft_creates_and_adopts_the_server_id() {
        let api = Arc::new(FakeApi::default());
        let (editor, notifier) = default_editor(api.clone());
        editor.load().await.unwrap();

        let draft_id = editor.add().await;
        editor
            .update_field(&draft_id, ExperienceField::Title("Engineer".into()))
            .await;

        let outcome = editor.save(&draft_id).await;
        assert_eq!(outcome, SaveOutcome::Created { id: CREATED_ID.into() });

        let entries = editor.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, CREATED_ID);
        assert_eq!(entries[0].title, "Engineer");

        match api.mutations().as_slice() {
            [Call::Create(payload)] => {
                assert_eq!(payload.title, "Engineer");
                assert_eq!(payload.sort_order, 1);
            }
            other => panic!("unexpected calls: {other:?}"),
        }
        assert_eq!(notifier.drain()[0].title, "Created");
        assert!(editor.activity(CREATED_ID).is_none());
    }

    #[tokio::test]
    async fn saving_a_record_updates_it_in_place() {
        let api = Arc::new(FakeApi::with(vec![
            experience(ID_A, "first", 1),
            experience(ID_B, "second", 2),
        ]));
        let (editor, notifier) = default_editor(api.clone());
        editor.load().await.unwrap();
        let before = editor.snapshot().await;

        assert_eq!(editor.save(ID_B).await, SaveOutcome::Updated);
        assert_eq!(editor.snapshot().await, before);
        match api.mutations().as_slice() {
            [Call::Update(id, payload)] => {
                assert_eq!(id, ID_B);
                assert_eq!(payload.sort_order, 2);
            }
            other => panic!("unexpected calls: {other:?}"),
        }
        let notice = &notifier.drain()[0];
        assert_eq!(notice.title, "Updated");
        assert_eq!(notice.variant, NotificationVariant::Success);
    }

    #[tokio::test]
    async fn invalid_entries_are_never_sent() {
        let api = Arc::new(FakeApi::default());
        let (editor, notifier) = default_editor(api.clone());
        let draft_id = editor.add().await;

        assert!(matches!(editor.save(&draft_id).await, SaveOutcome::Invalid(_)));
        assert!(api.mutations().is_empty());
        assert_eq!(notifier.drain()[0].variant, NotificationVariant::Warning);
    }

    #[tokio::test]
    async fn failed_save_leaves_the_list_alone() {
        let api = Arc::new(FakeApi {
            fail_mutations: true,
            ..FakeApi::default()
        });
        let (editor, notifier) = default_editor(api.clone());
        let draft_id = editor.add().await;
        editor
            .update_field(&draft_id, ExperienceField::Title("Engineer".into()))
            .await;
        let before = editor.snapshot().await;

        assert!(matches!(editor.save(&draft_id).await, SaveOutcome::Failed(_)));
        assert_eq!(editor.snapshot().await, before);
        assert!(editor.activity(&draft_id).is_none());

        let notice = &notifier.drain()[0];
        assert_eq!(notice.title, "Failed");
        assert_eq!(notice.variant, NotificationVariant::Destructive);
    }

    #[tokio::test]
    async fn deleting_a_draft_stays_local() {
        let api = Arc::new(FakeApi::default());
        let (editor, notifier) = default_editor(api.clone());
        let draft_id = editor.add().await;

        assert_eq!(editor.delete(&draft_id).await, DeleteOutcome::Removed);
        assert!(editor.entries().await.is_empty());
        assert!(api.mutations().is_empty());
        assert_eq!(notifier.drain()[0].description.as_deref(), Some("Draft removed."));
    }

    #[tokio::test]
    async fn deleting_a_record_reconciles_with_the_server() {
        let api = Arc::new(FakeApi::with(vec![
            experience(ID_A, "first", 1),
            experience(ID_B, "second", 2),
        ]));
        let (editor, notifier) = default_editor(api.clone());
        editor.load().await.unwrap();
        editor
            .update_field(ID_B, ExperienceField::Title("second edited".into()))
            .await;
        let draft_id = editor.add().await;

        assert_eq!(editor.delete(ID_A).await, DeleteOutcome::Deleted);

        let entries = editor.entries().await;
        assert_eq!(titles(&entries), vec!["second edited", ""]);
        assert_eq!(entries[1].id, draft_id);
        assert_eq!(api.mutations(), vec![Call::Delete(ID_A.to_string())]);
        assert_eq!(
            notifier.drain()[0].description.as_deref(),
            Some("Experience deleted.")
        );
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_record() {
        let api = Arc::new(FakeApi {
            server: Mutex::new(vec![experience(ID_A, "first", 1)]),
            fail_mutations: true,
            ..FakeApi::default()
        });
        let (editor, _) = default_editor(api.clone());
        editor.load().await.unwrap();
        let before = editor.snapshot().await;

        assert!(matches!(editor.delete(ID_A).await, DeleteOutcome::Failed(_)));
        assert_eq!(editor.snapshot().await, before);
        assert!(editor.activity(ID_A).is_none());
    }

    #[tokio::test]
    async fn busy_entries_reject_a_second_operation() {
        let api = Arc::new(FakeApi {
            server: Mutex::new(vec![experience(ID_A, "first", 1)]),
            delay: Some(Duration::from_millis(200)),
            ..FakeApi::default()
        });
        let (editor, _) = default_editor(api.clone());
        editor.load().await.unwrap();

        let (saved, deleted) = tokio::join!(editor.save(ID_A), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            assert!(editor.is_saving(ID_A));
            editor.delete(ID_A).await
        });

        assert_eq!(saved, SaveOutcome::Updated);
        assert_eq!(deleted, DeleteOutcome::Busy);
        assert_eq!(api.mutations().len(), 1);
    }

    #[tokio::test]
    async fn hung_mutation_times_out_and_clears_the_indicator() {
        let api = Arc::new(FakeApi {
            server: Mutex::new(vec![experience(ID_A, "first", 1)]),
            delay: Some(Duration::from_secs(30)),
            ..FakeApi::default()
        });
        let (editor, notifier) = editor(api, Duration::from_millis(50));
        editor.load().await.unwrap();

        assert!(matches!(editor.save(ID_A).await, SaveOutcome::Failed(_)));
        assert!(editor.activity(ID_A).is_none());
        assert_eq!(notifier.drain()[0].title, "Failed");
    }

    #[tokio::test]
    async fn clear_activity_unblocks_an_entry() {
        let api = Arc::new(FakeApi::with(vec![experience(ID_A, "first", 1)]));
        let (editor, _) = default_editor(api);
        editor.load().await.unwrap();

        let guard = editor.begin(ID_A, EntryActivity::Deleting);
        assert!(guard.is_some());
        assert!(editor.is_deleting(ID_A));

        editor.clear_activity(ID_A);
        let second = editor.begin(ID_A, EntryActivity::Saving);
        drop(guard);
        assert!(editor.is_saving(ID_A));
        drop(second);
        assert!(editor.activity(ID_A).is_none());
    }

    #[tokio::test]
    async fn delete_during_a_create_keeps_ids_unique() {
        let api = Arc::new(FakeApi {
            server: Mutex::new(vec![
                experience(ID_A, "first", 1),
                experience(ID_B, "second", 2),
            ]),
            create_delay: Some(Duration::from_millis(200)),
            ..FakeApi::default()
        });
        let (editor, _) = default_editor(api.clone());
        editor.load().await.unwrap();
        let draft_id = editor.add().await;
        editor
            .update_field(&draft_id, ExperienceField::Title("Engineer".into()))
            .await;

        let (saved, deleted) = tokio::join!(editor.save(&draft_id), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            editor.delete(ID_A).await
        });

        assert_eq!(saved, SaveOutcome::Created { id: CREATED_ID.into() });
        assert_eq!(deleted, DeleteOutcome::Deleted);
        let entries = editor.entries().await;
        let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec![ID_B, CREATED_ID]);
        assert_eq!(entries[1].title, "Engineer");
    }

    #[tokio::test]
    async fn remove_is_refused_while_a_create_runs() {
        let api = Arc::new(FakeApi {
            create_delay: Some(Duration::from_millis(200)),
            ..FakeApi::default()
        });
        let (editor, _) = default_editor(api.clone());
        let draft_id = editor.add().await;
        editor
            .update_field(&draft_id, ExperienceField::Title("Engineer".into()))
            .await;

        let (saved, removed) = tokio::join!(editor.save(&draft_id), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            editor.remove(&draft_id).await
        });

        assert_eq!(saved, SaveOutcome::Created { id: CREATED_ID.into() });
        assert!(!removed);
        let entries = editor.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, CREATED_ID);

        assert!(editor.remove(CREATED_ID).await);
        assert!(editor.entries().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        let (editor, _) = default_editor(Arc::new(FakeApi::default()));
        assert_eq!(editor.save("missing").await, SaveOutcome::NotFound);
        assert_eq!(editor.delete("missing").await, DeleteOutcome::NotFound);
    }
}
