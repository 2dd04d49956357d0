/// Data layer: core types, loading, and caching.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → RecordSet
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ DataSource │  path → Arc<RecordSet>, loaded once
///   └────────────┘
///        │
///        ▼
///   crate::insights (lookup / filter / salary)
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod source;

pub use error::DataSourceError;
pub use loader::{load_file, LoaderConfig};
pub use model::{Record, RecordSet};
pub use source::DataSource;
