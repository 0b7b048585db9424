//! Asset tag injection into a rendered HTML document.
//!
//! A plain string transform: the document is split at the first `</head>`
//! and the tags are appended to the head, one per line. Documents without a
//! head get the tags prepended. Nothing else in the document is inspected.

/// Marker the tags are inserted in front of.
pub const HEAD_CLOSE: &str = "</head>";

/// Insert `tags` before the first `</head>` of `html`, or in front of it.
pub fn inject<S: AsRef<str>>(html: &str, tags: &[S]) -> String {
    if tags.is_empty() {
        return html.to_string();
    }

    let block = render_block(tags);

    match html.split_once(HEAD_CLOSE) {
        Some((head, body)) => {
            let mut out = String::with_capacity(html.len() + block.len());
            out.push_str(head);
            out.push_str(&block);
            out.push_str(HEAD_CLOSE);
            out.push_str(body);
            out
        }
        None => block + html,
    }
}

/// `\t{tag}\n` for every tag.
fn render_block<S: AsRef<str>>(tags: &[S]) -> String {
    let mut block = String::new();
    for tag in tags {
        block.push('\t');
        block.push_str(tag.as_ref());
        block.push('\n');
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = r#"<link rel="stylesheet" href="/assets/a.css">"#;

    #[test]
    fn test_no_tags_unchanged() {
        let html = "<html><head></head><body/></html>";
        assert_eq!(inject::<&str>(html, &[]), html);
    }

    #[test]
    fn test_inserted_before_head_close() {
        let html = "<html><head></head><body/></html>";
        let out = inject(html, &[LINK]);
        assert_eq!(out, format!("<html><head>\t{LINK}\n</head><body/></html>"));
    }

    #[test]
    fn test_order_preserved() {
        let out = inject("<head><title>x</title></head>", &["<a>", "<b>"]);
        assert_eq!(out, "<head><title>x</title>\t<a>\n\t<b>\n</head>");
    }

    #[test]
    fn test_no_head_prepends() {
        let out = inject("<body/>", &["<a>", "<b>"]);
        assert_eq!(out, "\t<a>\n\t<b>\n<body/>");
    }

    #[test]
    fn test_only_first_head_close_used() {
        let html = "<head></head><body><pre></head></pre></body>";
        let out = inject(html, &["<a>"]);
        assert_eq!(out, "<head>\t<a>\n</head><body><pre></head></pre></body>");
    }
}
