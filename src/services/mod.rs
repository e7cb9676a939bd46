// Service module exports

pub mod gifts;
pub mod share;
pub mod store;
