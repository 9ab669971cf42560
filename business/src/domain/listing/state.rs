use crate::domain::product::model::{Category, Product};

use super::query::{ListQuery, TotalCount};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete product. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Product waiting for the user to confirm its deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

/// Everything a product list view renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub query: ListQuery,
    pub status: ListStatus,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub total: TotalCount,
    pub error_message: Option<String>,
    pub pending_delete: Option<PendingDelete>,
    pub deleting_id: Option<String>,
}

impl ListState {
    pub fn search_active(&self) -> bool {
        self.query.is_search_active()
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn page_count(&self) -> u32 {
        self.total.page_count(self.query.page_size)
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page > 1 && !self.is_loading()
    }

    /// Paging forward is undefined for search results, and pointless past the last known page.
    pub fn can_go_next(&self) -> bool {
        !self.search_active() && !self.is_loading() && self.query.page < self.page_count()
    }

    pub fn selected_category_name(&self) -> Option<&str> {
        let id = self.query.category.as_param()?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}
