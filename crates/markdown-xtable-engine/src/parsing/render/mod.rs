//! HTML output for the element stream.

pub mod html;

pub use html::render_html;
