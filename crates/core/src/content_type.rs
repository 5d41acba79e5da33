/// Map a (lower-cased) extension to the MIME type served for it.
///
/// No extension means an HTML page; anything unknown is served as plain text.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "" | "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        _ => "text/plain",
    }
}
