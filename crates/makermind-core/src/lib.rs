pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod inventory;
pub mod io;
pub mod onboarding;
pub mod paths;
pub mod review;
pub mod saved;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;

pub use error::{MakerError, Result};
