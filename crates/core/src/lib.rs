//! Pure building blocks for pathforge: everything between "a URL path came
//! in" and "a response body goes out" that does not touch the network.

pub mod content_type;
pub mod fence;
pub mod path;
pub mod prompt;
pub mod viewer;

pub use content_type::content_type_for;
pub use fence::strip_code_fences;
pub use path::{PathError, RequestPath, DEFAULT_MAX_PATH_LEN};
pub use prompt::{build_prompt, PromptKind};
pub use viewer::{download_filename, render_viewer};

/// True when the extension is rendered as a previewable HTML page.
pub fn is_page_extension(extension: &str) -> bool {
    extension.is_empty() || extension == "html"
}
