const FENCE: &str = "```";

/// Remove Markdown code fences that models like to wrap files in.
///
/// The opening fence may carry a language tag (```` ```html ````). Anything
/// else on the opening line is content and is kept. Either fence is removed
/// independently; surrounding whitespace is trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        body = match rest.split_once('\n') {
            Some((tag, content)) if is_language_tag(tag) => content,
            _ => rest,
        };
    }

    if let Some(rest) = body.trim_end().strip_suffix(FENCE) {
        body = rest;
    }

    body.trim()
}

fn is_language_tag(tag: &str) -> bool {
    tag.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.' | '#'))
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn unfenced_text_is_trimmed_only() {
        assert_eq!(strip_code_fences("  body { color: red; }\n"), "body { color: red; }");
    }

    #[test]
    fn fences_with_language_tag_are_removed() {
        let text = "```json\n{\"planet\": \"Mars\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"planet\": \"Mars\"}");
    }

    #[test]
    fn bare_fences_are_removed() {
        assert_eq!(strip_code_fences("```\n<p>hi</p>\n```\n"), "<p>hi</p>");
    }

    #[test]
    fn single_line_fence_keeps_content() {
        assert_eq!(strip_code_fences("```X```"), "X");
    }

    #[test]
    fn unterminated_fence_is_still_stripped() {
        // A `</html>` stop sequence cuts the closing fence off.
        assert_eq!(
            strip_code_fences("```html\n<!DOCTYPE html>\n<html><body></body>"),
            "<!DOCTYPE html>\n<html><body></body>"
        );
    }

    #[test]
    fn content_on_opening_line_is_kept() {
        assert_eq!(
            strip_code_fences("```<!DOCTYPE html>\n<html></html>\n```"),
            "<!DOCTYPE html>\n<html></html>"
        );
        assert_eq!(strip_code_fences("```c++\nint x;\n```"), "int x;");
    }

    #[test]
    fn inner_backticks_are_untouched() {
        let text = "Use `cargo` and ``` fences ``` in docs";
        assert_eq!(strip_code_fences(text), text);
    }
}
