/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/booster indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌───────────┐
///   │  filter   │ ───▶ │ aggregate │  (Dataset, Selection) → derived tables
///   └──────────┘      └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
