//! Data layer: core types, loading, filtering, and aggregation.
//!
//! Architecture:
//! ```text
//!  launch records .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → LaunchDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ LaunchDataset │  Vec<LaunchRecord>, unique sites/boosters
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐      ┌───────────┐
//!   │  filter   │ ───▶ │ aggregate │  indices → pie slices / scatter points
//!   └──────────┘      └───────────┘
//! ```
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
