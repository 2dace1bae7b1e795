//! Data-fetch collaborator
//!
//! A [`ListSource`] answers the list requests of one screen. The console
//! talks to the catalog API through it; tests use an in-memory source.

use crate::error::AdminResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use videocat_filter::tables::{ExtraFilter, SortDirection};
use videocat_filter::{FilterState, QueryParams};

/// A list row with a stable identifier
pub trait Record: Clone + Send + Sync {
	/// Returns the identifier used for deletes
	fn id(&self) -> &str;
}

/// Parameters of one list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
	pub search: String,
	pub page: u64,
	pub per_page: u64,
	pub sort: Option<String>,
	pub dir: Option<SortDirection>,
	/// Extra filter parameters in their request encoding
	pub extra: QueryParams,
}

impl ListRequest {
	/// Builds the request for a settled filter state
	pub fn from_state(state: &FilterState, plugin: &dyn ExtraFilter) -> Self {
		Self {
			search: state.search_text().to_string(),
			page: state.pagination.page,
			per_page: state.pagination.per_page,
			sort: state.order.sort.clone(),
			dir: state.order.dir,
			extra: state
				.extra_filter
				.as_ref()
				.map(|values| plugin.fetch_params(values))
				.unwrap_or_default(),
		}
	}

	/// Returns the request as query parameters
	pub fn query(&self) -> QueryParams {
		let mut params = QueryParams::new();
		params.set("search", self.search.as_str());
		params.set("page", self.page.to_string());
		params.set("per_page", self.per_page.to_string());
		if let Some(sort) = &self.sort {
			params.set("sort", sort.as_str());
		}
		if let Some(dir) = self.dir {
			params.set("dir", dir.as_str());
		}
		params.extend(self.extra.clone());
		params
	}
}

/// One page of list rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
	pub rows: Vec<T>,
	/// Number of rows matching the filters across all pages
	pub total: u64,
}

/// Answers list and bulk-delete requests for one screen
#[async_trait]
pub trait ListSource: Send + Sync {
	type Row: Record;

	/// Fetches one page of rows
	async fn list(&self, request: &ListRequest) -> AdminResult<ListResponse<Self::Row>>;

	/// Deletes the rows with the given identifiers
	async fn delete_many(&self, ids: &[String]) -> AdminResult<()>;
}
