use kuchiki::{traits::*, NodeRef};

/// The `<body>` of `html`. Fragments get the implied document around them,
/// so this only fails on a tree html5ever could not build at all.
pub(crate) fn parse_body(html: &str) -> Option<NodeRef> {
    let document = kuchiki::parse_html().one(html.to_string());
    document
        .select_first("body")
        .ok()
        .map(|body| body.as_node().clone())
}

/// Serialized children of `node`, without its own tags.
pub(crate) fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| child.to_string()).collect()
}

pub(crate) fn tag_name(node: &NodeRef) -> Option<String> {
    node.as_element().map(|el| el.name.local.to_lowercase())
}

/// Attribute value with entities already decoded by the parser.
pub(crate) fn attr(node: &NodeRef, name: &str) -> Option<String> {
    let el = node.as_element()?;
    let attrs = el.attributes.borrow();
    attrs.get(name).map(|value| value.to_string())
}

/// Drop tags and decode entities. `<br>` and block-level closers become line
/// breaks; script and style bodies are skipped. Malformed markup is recovered
/// the way a browser would, so an unterminated tag swallows the rest of the
/// input.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    if let Some(body) = parse_body(html) {
        push_text(&body, &mut out);
    }
    out.replace('\u{a0}', " ")
}

fn push_text(node: &NodeRef, out: &mut String) {
    for child in node.children() {
        if let Some(text) = child.as_text() {
            out.push_str(&text.borrow());
            continue;
        }
        let Some(tag) = tag_name(&child) else {
            continue;
        };
        match tag.as_str() {
            "script" | "style" => {}
            "br" => out.push('\n'),
            "p" | "div" | "li" | "h1" | "h2" | "h3" => {
                push_text(&child, out);
                out.push('\n');
            }
            _ => push_text(&child, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<b>Hi</b> &amp; <i>bye</i>"), "Hi & bye");
        assert_eq!(strip_html("a<br>b<br/>c"), "a\nb\nc");
        assert_eq!(strip_html("x&nbsp;y"), "x y");
        assert_eq!(strip_html("<p>one</p><p>two</p>"), "one\ntwo\n");
    }

    #[test]
    fn test_strip_html_malformed() {
        assert_eq!(strip_html("plain > text"), "plain > text");
        assert_eq!(strip_html("ok <unterminated"), "ok ");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_strip_html_skips_script_and_style() {
        assert_eq!(strip_html("a<script>var x = 1;</script><style>p{}</style>b"), "ab");
    }

    #[test]
    fn test_strip_html_closes_implied_paragraphs() {
        assert_eq!(strip_html("<p>one<p>two"), "one\ntwo\n");
    }

    #[test]
    fn test_inner_html_and_attr() {
        let body = parse_body(r#"<div data-id="a&amp;b">Hi <b>there</b></div>"#).unwrap();
        let div = body.first_child().unwrap();
        assert_eq!(tag_name(&div).as_deref(), Some("div"));
        assert_eq!(attr(&div, "data-id").as_deref(), Some("a&b"));
        assert_eq!(attr(&div, "missing"), None);
        assert_eq!(inner_html(&div), "Hi <b>there</b>");
    }
}
