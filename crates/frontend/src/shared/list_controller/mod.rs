//! Searchable, paginated, cancellable list fetching shared by list screens.
//!
//! - `controller` - pure query/view-model state machine with single-flight
//!   request tokens
//! - `hook` - Leptos binding: signals, debounced search, teardown on unmount

pub mod controller;
pub mod hook;

pub use controller::{Dispatch, ListController, ListViewModel, Settled};
pub use hook::{use_paginated_list, PaginatedList};
