//! Tab management module
//!
//! - `page`: the TabPage wrapper around tab content
//! - `registry`: tab key to view mapping
//! - `tab_labels`: tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, list_label, tab_label_for_key};
