//! Generate Android launcher icon tiers and a TV banner from one logo image.

mod error;
pub mod export;
pub mod layout;
pub mod render;
pub mod tiers;

pub use error::ExportError;
pub use export::{export, export_project, ExportEvent, ExportSummary};
pub use layout::Layout;
