use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use pathforge_completion::{CompletionClient, CompletionError};
use pathforge_core::{
    build_prompt, content_type_for, is_page_extension, render_viewer, strip_code_fences,
    PromptKind, RequestPath,
};

use crate::error::{ApiErr, GenerateError};
use crate::routes::credentials::api_key_from;
use crate::AppState;

/// A finished file, ready to be sent.
#[derive(Debug)]
pub struct GeneratedFile {
    pub content_type: &'static str,
    pub body: String,
}

impl IntoResponse for GeneratedFile {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

/// GET /{*path} — synthesize a file for an arbitrary path.
pub async fn generate(
    State(state): State<AppState>,
    jar: CookieJar,
    path: Result<Path<String>, PathRejection>,
) -> Result<GeneratedFile, ApiErr> {
    let Path(path) = path?;
    generate_file(&state, &path, api_key_from(&jar).as_deref())
        .await
        .map_err(ApiErr::from)
}

/// Validate, prompt, complete, assemble. Stops at the first failure; the
/// upstream is only contacted once the path and key have been accepted.
pub async fn generate_file(
    state: &AppState,
    raw_path: &str,
    api_key: Option<&str>,
) -> Result<GeneratedFile, GenerateError> {
    let path = RequestPath::parse(raw_path, state.config.server.max_path_len)?;
    let api_key = api_key.ok_or(GenerateError::MissingCredential)?;

    let extension = path.extension();
    let kind = PromptKind::for_extension(extension);
    let prompt = build_prompt(extension, path.as_str());

    let client =
        CompletionClient::new(&state.config.upstream, api_key).map_err(|e| match e {
            CompletionError::MissingApiKey => GenerateError::MissingCredential,
            other => GenerateError::Upstream(other),
        })?;

    tracing::info!(
        path = %path,
        extension,
        kind = %kind,
        model = client.model(),
        "generating file"
    );
    let completion = client.complete(&prompt).await?;
    let content = strip_code_fences(&completion);

    let body = if is_page_extension(extension) {
        render_viewer(path.as_str(), content)
    } else {
        content.to_string()
    };

    Ok(GeneratedFile {
        content_type: content_type_for(extension),
        body,
    })
}
