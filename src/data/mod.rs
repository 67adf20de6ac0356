/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (fatal on error, once at startup)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/booster indices, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selection + payload range → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
