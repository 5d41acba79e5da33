//! Wrapper page shown around generated HTML.
//!
//! The generated document is never inlined into the wrapper; it is carried
//! as a `data:` URI so its scripts and styles stay inside the iframe.

const DATA_URI_PREFIX: &str = "data:text/html;charset=utf-8,";

const VIEWER_STYLE: &str = "\
body {
  margin: 0;
  background-color: #f1f1f1;
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
}
.pf-viewer {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  min-height: 100vh;
}
.pf-viewer iframe {
  width: 100%;
  height: 90vh;
  border: none;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.pf-actions {
  display: flex;
  gap: 1rem;
  margin: 1rem 0;
}
.pf-actions a {
  background-color: #6b46c1;
  color: white;
  font-weight: 600;
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
  text-decoration: none;
  outline: none;
  transition: background-color 0.3s, box-shadow 0.3s;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}
.pf-actions a:hover {
  background-color: #5a3fbf;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}";

/// Render the preview page for `html` generated for `path`.
pub fn render_viewer(path: &str, html: &str) -> String {
    let data_uri = format!("{DATA_URI_PREFIX}{}", urlencoding::encode(html));
    let title = escape_html(if path.is_empty() { "/" } else { path });
    let filename = escape_html(&download_filename(path));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{VIEWER_STYLE}
</style>
</head>
<body>
<div class="pf-viewer">
  <iframe src="{data_uri}" title="{title}"></iframe>
  <div class="pf-actions">
    <a href="/">Go Home</a>
    <a href="{data_uri}" download="{filename}">Download</a>
  </div>
</div>
</body>
</html>
"#
    )
}

/// File name suggested by the download link: the final path segment up to
/// its first dot, as `.html`.
pub fn download_filename(path: &str) -> String {
    let segment = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or_default();
    let stem = segment.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        "index.html".to_string()
    } else {
        format!("{stem}.html")
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
