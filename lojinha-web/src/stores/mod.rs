//! Process-wide client state, split by domain so components depend on
//! small focused stores: `session` (who is logged in), `cart` (what the
//! visitor wants to order), `catalog` (what the store sells).

pub mod cart;
pub mod catalog;
pub mod session;
