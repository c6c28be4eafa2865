//! Character escaping for the two output dialects.
//!
//! The tables differ on purpose: HTML output also escapes `/`, XML output
//! leaves it alone.

/// Append `text` to `out` with HTML escaping.
///
/// `&<>"'/` become `&amp; &lt; &gt; &quot; &#39; &#47;`.
pub(crate) fn push_html_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#47;"),
            _ => out.push(ch),
        }
    }
}

/// Append `text` to `out` with XML escaping.
///
/// `&<>"'` become `&amp; &lt; &gt; &quot; &apos;`.
pub(crate) fn push_xml_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn escape_html(text: &str) -> String {
        let mut out = String::new();
        push_html_escaped(&mut out, text);
        out
    }

    fn escape_xml(text: &str) -> String {
        let mut out = String::new();
        push_xml_escaped(&mut out, text);
        out
    }

    #[test]
    fn test_escape_html_table() {
        assert_eq!(
            escape_html(r#"a & b < c > d " e ' f / g"#),
            "a &amp; b &lt; c &gt; d &quot; e &#39; f &#47; g"
        );
    }

    #[test]
    fn test_escape_xml_table() {
        assert_eq!(
            escape_xml(r#"a & b < c > d " e ' f / g"#),
            "a &amp; b &lt; c &gt; d &quot; e &apos; f / g"
        );
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_html("größe → 1"), "größe → 1");
        assert_eq!(escape_xml("größe → 1"), "größe → 1");
    }

    #[test]
    fn test_push_appends() {
        let mut out = String::from("<p>");
        push_html_escaped(&mut out, "</p>");
        assert_eq!(out, "<p>&lt;&#47;p&gt;");
    }
}
