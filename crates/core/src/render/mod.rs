//! Renderers for the controller's view regions.
//!
//! - [`html`]: the markup fragments the web page displays, plus an [`html::HtmlPage`] view
//! - [`text`]: terminal output for the binaries

pub mod html;
pub mod text;

pub use html::HtmlPage;
