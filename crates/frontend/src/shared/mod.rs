pub mod api_utils;
pub mod components;
pub mod config;
pub mod debounce;
pub mod format;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod request_token;
pub mod select_dropdown;
pub mod toast;
