//! Application layer: demo catalog and reporting
//!
//! This layer orchestrates domain logic and owns the stdout-facing operations.

pub mod demo;
pub mod error;
pub mod report;

pub use demo::demo_catalog;
pub use error::{ApplicationError, ApplicationResult};
pub use report::{
    print, print_total_price, render, render_report, total_price_line, TOTAL_PRICE_LABEL,
};
