//! Single-pass cleaning of tabular customer data.
//!
//! One table flows through a fixed pipeline:
//!
//! ```text
//!   input.csv
//!       │
//!       ▼
//!  ┌──────────┐
//!  │  loader   │  parse file → Table
//!  └──────────┘
//!       │
//!       ▼
//!  ┌──────────┐
//!  │  clean    │  impute, filter, repair, date features, ratio, prune
//!  └──────────┘
//!       │
//!       ▼
//!  ┌──────────┐
//!  │  writer   │  Table → output.csv
//!  └──────────┘
//! ```
//!
//! The whole run is [`preprocess`]; everything else is its plumbing.

pub mod clean;
pub mod data;
pub mod error;

pub use clean::preprocess;
pub use data::model::{CellValue, Table};
pub use error::{Error, Result};
