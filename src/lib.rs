//! Dashboard Restyle
//!
//! Rewrites the static Entra dashboard pages so they share one navigation
//! bar, header and CSS theme.
//!
//! This library provides:
//! - Tolerant extraction of titles, timestamps and sections
//! - Section recomposition (icons, scrollable tables)
//! - Page rendering against the shared template
//! - The in-place rewrite loop over the fixed page list

pub mod config;
pub mod driver;
pub mod parser;
pub mod render;
pub mod transform;

pub use config::{Config, PageSettings};
pub use driver::{restyle_html, run, transform_file, FileReport, Outcome, RunSummary};
pub use parser::{parse_document, Document, Section};
pub use transform::{transform_section, RecomposedSection};
