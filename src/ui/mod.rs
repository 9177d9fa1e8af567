// ui/mod.rs - Terminal rendering of the editor view

pub mod renderer;
pub mod widgets;

pub use renderer::TuiRenderer;
