//! cutsim-bench-core - Shared types and chart logic for cutsim-bench
//!
//! This crate contains WASM-compatible code that is shared between
//! the browser dashboard and the CLI.
//!
//! # Features
//!
//! - Chart payload types as served by the `/api` endpoints
//! - Endpoint selection for single-file and summary charts
//! - Chart.js options per rendering mode
//! - Tooltip formatting for single-file charts
//! - Collapsible section state machine, decoupled from the DOM

pub mod api;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod grouping;
pub mod section;
pub mod tooltip;

pub use api::{summary_requests, ApiRequest, FileKind, MetricType, RevisionRange, SUMMARY_METRICS};
pub use chart::{summary_markup, ChartConfig, ChartOptions, RenderMode, PALETTE};
pub use config::DashboardConfig;
pub use data::{label_text, ChartLoadState, ChartPayload, DataPoint, Dataset, Unit};
pub use error::{Error, Result};
pub use grouping::{build_section, detail_run, FieldRow};
pub use section::{Section, SectionEffect, SectionState};
pub use tooltip::{
    LabelColors, TooltipItem, TooltipModel, TooltipPlacement, TooltipRow, TooltipView, CARET_CLASSES,
};
