// Pedantic: suppress noise for internal crate code.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod actions;
pub mod columns;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod manager;
pub mod pagination;
pub mod reconcile;
pub mod types;

pub use error::BoardError;
pub use manager::OpportunityManager;
pub use pagination::BoardState;
