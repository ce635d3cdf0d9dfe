//! Renders trivia documents into static HTML.
//!
//! The pipeline has three parts:
//! - [`format_answer`] turns an [`Answer`](trivia_document::Answer) into text
//! - [`format_multimedia`] turns resolved media into image and audio markup
//! - [`render_item`] assembles one block per item with an index-correlated
//!   reveal control
//!
//! [`TriviaRenderer`] runs them over a whole document and [`Template`]
//! splices the result into a page.

mod answer;
mod escape;
mod item;
mod multimedia;
mod renderer;
mod template;

pub use answer::format_answer;
pub use escape::{TextPolicy, escape_html};
pub use item::{render_item, render_items};
pub use multimedia::format_multimedia;
pub use renderer::{
    DEFAULT_DESCRIPTION, DEFAULT_TITLE, RenderedContent, RendererConfig, TriviaRenderer,
};
pub use template::{BUILTIN_TEMPLATE, Placeholder, Template, TemplateError};
