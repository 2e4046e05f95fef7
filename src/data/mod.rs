/// Data layer: core types and delimited-text I/O.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Row>, ordered column names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  Table → file (atomic rename)
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod writer;
