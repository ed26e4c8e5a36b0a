pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod quiz;
pub mod store;

pub use config::Config;
pub use db::{init_db, seed_default_categories, Repository};
pub use domain::{Category, CategoryMap, NewQuestion, Page, Question};
pub use error::AppError;
pub use quiz::{RandomSource, SeededRandom, ThreadRandom};
pub use store::{MockStore, StoreError, TriviaStore};
