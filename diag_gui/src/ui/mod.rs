//! UI components for the diagram viewer

pub mod diagram;
pub mod toolbar;

pub use diagram::DiagramCanvas;
pub use toolbar::view_toolbar;
