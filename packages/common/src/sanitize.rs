//! # Sanitization Boundary
//!
//! Two one-way conversions keep user-authored text and live markup strictly
//! separated:
//!
//! - [`escape_html`] runs immediately before interpolating stored text into
//!   markup. It is the *only* place escaping happens.
//! - [`capture_text`] runs when reading an editable region back into storage.
//!   It is the *only* path by which edits re-enter section content, and it
//!   always yields plain text.
//!
//! Stored content is therefore always unescaped plain text; markup exists
//! only transiently in the rendered view. Capturing immediately after
//! rendering reproduces the original text exactly (after whitespace
//! trimming), including HTML-significant characters, multi-line content and
//! emoji.

/// Escape HTML special characters for safe display
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Decode HTML entities back to literal characters.
///
/// Used when preparing stored text for an external document-generation call,
/// so the downstream document shows `&` rather than `&amp;`. `&amp;` is
/// decoded last: `&amp;lt;` becomes the literal text `&lt;`, never `<`.
pub fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Read the user-visible text content of an editable markup fragment.
///
/// Tags are dropped; `<br>` and closing block tags become newlines, matching
/// the render convention where multi-line fields emit `<br>` per stored
/// newline. Entities are decoded and surrounding whitespace is trimmed.
pub fn capture_text(markup: &str) -> String {
    decode_entities(&strip_tags(markup)).trim().to_string()
}

/// Convert a paste payload to plain text before it can enter the view.
///
/// A payload without markup is clipboard plain text and passes through
/// untouched (it may legitimately contain literal `&amp;` the user typed).
/// A payload with markup has its tags stripped and its entities decoded.
pub fn paste_text(payload: &str) -> String {
    if !payload.contains('<') {
        return payload.to_string();
    }
    decode_entities(&strip_tags(payload))
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let after = &rest[lt + 1..];
        match after.find('>') {
            Some(gt) => {
                if breaks_line(&after[..gt]) {
                    out.push('\n');
                }
                rest = &after[gt + 1..];
            }
            None => {
                // Dangling '<' with no closing '>' is literal text
                out.push_str(&rest[lt..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Tags whose boundary reads as a line break in the captured text
fn breaks_line(tag: &str) -> bool {
    let tag = tag.trim().to_ascii_lowercase();
    let name = tag.trim_end_matches('/').trim_end();
    matches!(name, "br") || matches!(tag.as_str(), "/p" | "/div" | "/li")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("'quotes'"), "&#39;quotes&#39;");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_leaves_no_specials_unescaped() {
        let escaped = escape_html(r#"<script>alert("x & 'y'")</script>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        // Every remaining '&' opens an entity we produced
        for (i, _) in escaped.match_indices('&') {
            assert!(escaped[i..].starts_with("&amp;")
                || escaped[i..].starts_with("&lt;")
                || escaped[i..].starts_with("&gt;")
                || escaped[i..].starts_with("&quot;")
                || escaped[i..].starts_with("&#39;"));
        }
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&#039;legacy&#39;"), "'legacy'");
    }

    #[test]
    fn test_decode_does_not_double_decode() {
        // "&amp;lt;" is the escaped form of the literal text "&lt;"
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_escape_decode_round_trip() {
        for text in [
            "plain",
            "a & b < c > d",
            r#"quote " and ' here"#,
            "&amp; already looks escaped",
            "emoji 🎉 stays",
        ] {
            assert_eq!(decode_entities(&escape_html(text)), text);
        }
    }

    #[test]
    fn test_capture_strips_tags() {
        assert_eq!(capture_text("<b>bold</b> text"), "bold text");
        assert_eq!(capture_text("<div class=\"x\"><span>nested</span></div>"), "nested");
    }

    #[test]
    fn test_capture_round_trip_after_render() {
        // render step for a scalar field: escape, then interpolate
        for text in [
            "Hello <b>World</b>",
            "a & b",
            "tricky \"quotes\" & 'apostrophes'",
            "emoji 🎉🚀",
            "",
        ] {
            let rendered = format!("<h2 class=\"section-title\">{}</h2>", escape_html(text));
            assert_eq!(capture_text(&rendered), text.trim());
        }
    }

    #[test]
    fn test_capture_multiline_round_trip() {
        // multi-line fields render stored newlines as <br>
        let text = "line one\nline two\nline three";
        let rendered = format!("<div>{}</div>", escape_html(text).replace('\n', "<br>"));
        assert_eq!(capture_text(&rendered), text);
    }

    #[test]
    fn test_capture_br_variants() {
        assert_eq!(capture_text("a<br>b"), "a\nb");
        assert_eq!(capture_text("a<br/>b"), "a\nb");
        assert_eq!(capture_text("a<br />b"), "a\nb");
        assert_eq!(capture_text("a<BR>b"), "a\nb");
    }

    #[test]
    fn test_capture_trims_whitespace() {
        assert_eq!(capture_text("  padded  "), "padded");
        assert_eq!(capture_text("<div>  padded  </div>"), "padded");
    }

    #[test]
    fn test_capture_dangling_angle_bracket() {
        assert_eq!(capture_text("3 &lt; 4"), "3 < 4");
        assert_eq!(capture_text("ends with <"), "ends with <");
    }

    #[test]
    fn test_paste_plain_text_untouched() {
        assert_eq!(paste_text("plain &amp; literal"), "plain &amp; literal");
        assert_eq!(paste_text("  keep spacing  "), "  keep spacing  ");
    }

    #[test]
    fn test_paste_discards_markup() {
        assert_eq!(
            paste_text("<p>first</p><p>second</p>"),
            "first\nsecond\n"
        );
        assert_eq!(
            paste_text("<script>alert('x')</script>evil"),
            "alert('x')evil"
        );
        assert_eq!(paste_text("<b>bold &amp; loud</b>"), "bold & loud");
    }
}
