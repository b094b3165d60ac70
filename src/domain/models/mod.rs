//! Settings data model: documents, trees, paths and selected settings.

pub mod document;
pub mod node;
pub mod path;
pub mod settings;

pub use document::ConfigDocument;
pub use node::{Node, Scalar};
pub use path::PathSegments;
pub use settings::Settings;
