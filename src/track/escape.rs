use quick_xml::escape::escape;

/// Escapes text for use as XML element content.
pub fn escape_html(text: &str) -> String {
    escape(text).into_owned()
}

/// Makes a URI safe inside an XML element.
///
/// Only `&` is touched, existing percent escapes stay as they are.
pub fn encode_uri(uri: &str) -> String {
    uri.replace('&', "%26")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_entities() {
        assert_eq!(escape_html("<Radio & Co.>"), "&lt;Radio &amp; Co.&gt;");
        assert_eq!(escape_html(r#"Say "hi" it's"#), "Say &quot;hi&quot; it&apos;s");
        assert_eq!(escape_html("Plain"), "Plain");
    }

    #[test]
    fn escape_html_does_not_reuse_output() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn encode_uri_only_ampersand() {
        assert_eq!(encode_uri("a&b=1"), "a%26b=1");
        assert_eq!(
            encode_uri("https://x.example.com/s?a=1&b=%20<"),
            "https://x.example.com/s?a=1%26b=%20<"
        );
    }
}
