//! Category drill-down view: holdings of one asset class with aggregate
//! figures.

mod category_model;
mod category_service;

#[cfg(test)]
mod category_service_tests;

pub use category_model::{CategoryRow, CategorySummary, CategoryView};
pub use category_service::{CategoryService, CategoryServiceTrait};
