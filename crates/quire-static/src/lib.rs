//! Static site builder for quire documentation.
//!
//! Transforms an ordered list of Markdown chapters into per-chapter HTML pages
//! with a navigation menu split around the current chapter.

pub mod builder;
pub mod registry;
pub mod templates;

pub use builder::{BookBuilder, BuildConfig, BuildError, BuildResult};
pub use registry::{Chapter, Registry};
pub use templates::{MenuEntry, PageContext, TemplateEngine};
