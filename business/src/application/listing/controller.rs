use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::domain::listing::query::{ListQuery, TotalCount};
use crate::domain::listing::state::{
    DELETE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, ListState, ListStatus, PendingDelete,
};
use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, ValidationError};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use crate::domain::product::value_objects::{CategoryFilter, PageSize};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(350);

/// Drives the product list view.
///
/// Query changes are debounced through a single slot: each change supersedes
/// the pending timer. Every dispatched fetch takes a new generation and a
/// response is applied only if no newer fetch was dispatched meanwhile.
/// State is published through a `watch` channel.
///
/// Setters spawn the debounce timer on the current tokio runtime.
#[derive(Clone)]
pub struct ListController {
    inner: Arc<Inner>,
}

struct Inner {
    list_products: Arc<dyn ListProductsUseCase>,
    get_categories: Arc<dyn GetCategoriesUseCase>,
    delete_product: Arc<dyn DeleteProductUseCase>,
    logger: Arc<dyn Logger>,
    debounce: Duration,
    state: watch::Sender<ListState>,
    scheduled: AtomicU64,
    generation: AtomicU64,
}

impl ListController {
    pub fn new(
        list_products: Arc<dyn ListProductsUseCase>,
        get_categories: Arc<dyn GetCategoriesUseCase>,
        delete_product: Arc<dyn DeleteProductUseCase>,
        logger: Arc<dyn Logger>,
        debounce: Duration,
    ) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            inner: Arc::new(Inner {
                list_products,
                get_categories,
                delete_product,
                logger,
                debounce,
                state,
                scheduled: AtomicU64::new(0),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> ListState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.inner.state.subscribe()
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.update_query(|query| query.search_text = text);
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.update_query(|query| {
            query.category = category;
            query.page = 1;
        });
    }

    pub fn set_page_size(&self, page_size: PageSize) {
        self.update_query(|query| {
            query.page_size = page_size;
            query.page = 1;
        });
    }

    pub fn go_to_page(&self, page: u32) {
        self.update_query(|query| query.page = page.max(1));
    }

    /// Moves one page forward; returns `false` when paging forward is disabled.
    pub fn next_page(&self) -> bool {
        let state = self.snapshot();
        if !state.can_go_next() {
            return false;
        }
        self.go_to_page(state.query.page + 1);
        true
    }

    pub fn previous_page(&self) -> bool {
        let state = self.snapshot();
        if !state.can_go_previous() {
            return false;
        }
        self.go_to_page(state.query.page - 1);
        true
    }

    pub fn replace_query(&self, query: ListQuery) {
        self.update_query(|current| *current = query);
    }

    /// Fetches the current query right away, dropping any pending debounce.
    pub async fn refresh(&self) {
        self.inner.scheduled.fetch_add(1, Ordering::SeqCst);
        self.fetch().await;
    }

    pub async fn load_categories(&self) {
        let categories = match self.inner.get_categories.execute().await {
            Ok(categories) => categories,
            Err(e) => {
                self.inner
                    .logger
                    .warn(&format!("Could not load categories: {}", e));
                Vec::new()
            }
        };
        self.inner
            .state
            .send_modify(|state| state.categories = categories);
    }

    pub fn request_delete(&self, id: impl Into<String>, name: impl Into<String>) {
        let pending = PendingDelete {
            id: id.into(),
            name: name.into(),
        };
        self.inner
            .state
            .send_modify(|state| state.pending_delete = Some(pending));
    }

    pub fn cancel_delete(&self) {
        self.inner
            .state
            .send_modify(|state| state.pending_delete = None);
    }

    /// Deletes the pending product and removes it from the loaded page without refetching.
    pub async fn confirm_delete(&self) -> Result<(), ProductError> {
        let mut target = None;
        self.inner.state.send_modify(|state| {
            if state.deleting_id.is_some() {
                return;
            }
            target = state.pending_delete.take();
            if let Some(pending) = &target {
                state.deleting_id = Some(pending.id.clone());
                state.error_message = None;
            }
        });
        let Some(target) = target else {
            return Err(ValidationError::ProductIdMissing.into());
        };

        self.inner
            .logger
            .info(&format!("Deleting product {} ({})", target.id, target.name));
        let result = self
            .inner
            .delete_product
            .execute(DeleteProductParams {
                id: target.id.clone(),
            })
            .await;

        match result {
            Ok(()) => {
                self.inner.state.send_modify(|state| {
                    state.products.retain(|p| p.id != target.id);
                    if let TotalCount::Exact(n) = state.total {
                        state.total = TotalCount::Exact(n.saturating_sub(1));
                    }
                    state.deleting_id = None;
                });
                Ok(())
            }
            Err(e) => {
                self.inner
                    .logger
                    .error(&format!("Failed to delete product {}: {}", target.id, e));
                self.inner.state.send_modify(|state| {
                    state.error_message = Some(DELETE_FAILED_MESSAGE.to_string());
                    state.deleting_id = None;
                });
                Err(e)
            }
        }
    }

    fn update_query(&self, change: impl FnOnce(&mut ListQuery)) {
        self.inner.state.send_modify(|state| change(&mut state.query));
        self.schedule_fetch();
    }

    fn schedule_fetch(&self) {
        let ticket = self.inner.scheduled.fetch_add(1, Ordering::SeqCst) + 1;
        let controller = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(controller.inner.debounce).await;
            if controller.inner.scheduled.load(Ordering::SeqCst) != ticket {
                return;
            }
            controller.fetch().await;
        });
    }

    async fn fetch(&self) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = self.inner.state.borrow().query.clone();
        self.inner.state.send_modify(|state| {
            state.status = ListStatus::Loading;
            state.error_message = None;
        });

        let result = self
            .inner
            .list_products
            .execute(ListProductsParams {
                query: query.clone(),
            })
            .await;

        if self.inner.generation.load(Ordering::SeqCst) != generation {
            self.inner
                .logger
                .debug(&format!("Discarding stale listing #{}", generation));
            return;
        }

        match result {
            Ok(listing) => self.inner.state.send_modify(|state| {
                state.status = ListStatus::Loaded;
                state.products = listing.products;
                if state.query == query {
                    state.query.page = listing.page;
                }
                if let Some(total) = listing.total {
                    state.total = total;
                }
            }),
            Err(e) => {
                self.inner
                    .logger
                    .error(&format!("Failed to load products: {}", e));
                self.inner.state.send_modify(|state| {
                    state.status = ListStatus::Error;
                    state.error_message = Some(LOAD_FAILED_MESSAGE.to_string());
                    state.products.clear();
                });
            }
        }
    }
}
