// Presentation layer - widget mutations and renderers
pub mod page;
pub mod render;
