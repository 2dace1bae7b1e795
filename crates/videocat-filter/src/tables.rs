//! Table model: columns, sorting, pagination and extra filters

pub mod columns;
pub mod filtering;
pub mod pagination;
pub mod sorting;

pub use columns::{TableColumn, is_sortable_column};
pub use filtering::{
	ExtraFilter, ExtraSchema, ExtraValue, ExtraValues, FieldRule, NoExtraFilter, RawExtra,
};
pub use pagination::Pagination;
pub use sorting::{Order, SortDirection};
