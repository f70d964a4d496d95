//! Select dropdown
//!
//! Single- or multi-select with filter-as-you-type and outside-click dismissal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::shared::select_dropdown::{SelectDropdown, SelectableItem, SelectionMode};
//!
//! impl SelectableItem for MyItem { ... }
//!
//! view! {
//!     <SelectDropdown
//!         items=items_signal
//!         mode=SelectionMode::Multi
//!         on_change=Callback::new(move |selected: Vec<MyItem>| { /* ... */ })
//!     />
//! }
//! ```

pub mod component;
pub mod state;
pub mod traits;

pub use component::SelectDropdown;
pub use state::{SelectionMode, SelectionState};
pub use traits::SelectableItem;
