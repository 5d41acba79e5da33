//! Prompt templates sent to the completion model.

const TAILWIND_SCRIPT: &str =
    "<script src='https://cdn.tailwindcss.com?plugins=forms,typography,aspect-ratio'></script>";

/// Which template a request falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Full HTML document (no extension or `html`).
    Page,
    Json,
    /// Any other file type.
    File,
}

impl PromptKind {
    pub fn for_extension(extension: &str) -> Self {
        match extension {
            "" | "html" => Self::Page,
            "json" => Self::Json,
            _ => Self::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Json => "json",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the user message for `path`, choosing the template by `extension`.
pub fn build_prompt(extension: &str, path: &str) -> String {
    match PromptKind::for_extension(extension) {
        PromptKind::Page => format!(
            "Create a HTML document with content that matches following URL path: {path}. \
             The website design and colors should match the path and be inspired by Dribbble. \
             Minimum 100vh, responsive design, navigation, footer and multiple sections. \
             Use only meta, title, and the provided Tailwind CSS script (\"{TAILWIND_SCRIPT}\"). \
             For images use online sources that are topic-specific. No comments or extra tags:"
        ),
        PromptKind::Json => format!(
            "Create a JSON structure with content that matches following URL path: {path}. \
             The structure should only contain relevant keys and values for the topic:"
        ),
        PromptKind::File => format!(
            "Create a file of type {extension} with content that matches following URL path: {path}:"
        ),
    }
}
