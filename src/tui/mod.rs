//! Terminal presentation for the CLI: styled stderr status lines.

pub mod renderer;
pub mod settings;

pub use renderer::Renderer;
