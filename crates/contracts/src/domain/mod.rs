pub mod a001_banner;
pub mod a002_inquiry;
pub mod a003_order;
pub mod a004_transaction;
