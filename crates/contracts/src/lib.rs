//! Wire types shared between the admin dashboard and the shop API.

pub mod domain;
pub mod shared;
