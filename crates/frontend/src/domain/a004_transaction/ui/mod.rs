pub mod details;
pub mod lookup;
