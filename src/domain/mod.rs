//! Domain types for the trivia bank.
//!
//! This module provides:
//! - `Question` / `NewQuestion` records
//! - `Category` and the id-to-label `CategoryMap`
//! - Fixed-size pagination helper

pub mod category;
pub mod pagination;
pub mod question;

pub use category::{Category, CategoryMap};
pub use pagination::{paginate, Page, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question};
