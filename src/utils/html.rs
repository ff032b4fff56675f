use std::collections::HashSet;

/// Reduce user-submitted text to plain text before it is stored.
///
/// Responses are JSON, so text is kept unescaped: every tag is stripped
/// (`<script>` and `<style>` together with their content) and the entities
/// ammonia emits while serializing are decoded again. Clients must escape the
/// text when rendering it as HTML. Surrounding whitespace is trimmed.
pub fn clean_text(input: &str) -> String {
    let stripped = ammonia::Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(input)
        .to_string();

    html_escape::decode_html_entities(&stripped).trim().to_string()
}
