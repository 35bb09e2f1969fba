// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod cost;
pub mod engine;
pub mod errors;
pub mod insights;
pub mod io;
pub mod maintainability;
pub mod risk;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    AnalysisRecord, CocomoEstimate, ComplexityLevel, ModuleMetrics, RawModuleMetrics, RiskLevel,
};

pub use crate::engine::{analyze, analyze_at, parse_metrics};

pub use crate::risk::{classify, score_risk};

pub use crate::cost::estimate;

pub use crate::errors::EstimapError;

pub use crate::insights::{summarize, ModuleHighlight, PortfolioInsight, RiskDistribution};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::storage::{AnalysisStore, JsonFileStore, MemoryStore};
