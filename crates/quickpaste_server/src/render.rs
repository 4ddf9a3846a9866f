//! Minimal HTML rendering: escaping, flash redirects, and page templates.

use axum::response::Redirect;
use quickpaste_core::models::paste::Paste;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

const FORM_HTML: &str = r#"<form method="post" action="/paste">
  <input name="title" placeholder="Title (optional)" maxlength="200">
  <select name="language">
    <option value="auto">Auto-detect</option>
    <option value="python">Python</option>
    <option value="javascript">JavaScript</option>
    <option value="html">HTML</option>
    <option value="text">Plain text</option>
  </select>
  <textarea name="content" placeholder="Paste your text here" required></textarea>
  <button type="submit">Create paste</button>
</form>
"#;

const STYLE: &str = r#"body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
.banner { padding: 0.5rem 0.75rem; border-radius: 4px; margin-bottom: 1rem; }
.banner.success { background: #e6f4ea; color: #1e4620; }
.banner.error { background: #fce8e6; color: #5f2120; }
form { display: grid; gap: 0.5rem; margin-bottom: 1.5rem; }
textarea { min-height: 10rem; font-family: monospace; }
ul.pastes { list-style: none; padding: 0; }
ul.pastes li { padding: 0.4rem 0; border-bottom: 1px solid #eee; }
.meta { color: #666; font-size: 0.85rem; }
pre { background: #f6f6f6; padding: 1rem; overflow-x: auto; }
nav.pager { margin-top: 1rem; color: #666; }"#;

/// Escape text for safe interpolation into HTML bodies and attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Percent-encode a query-string value.
pub fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                encoded.push('%');
                encoded.push(HEX_DIGITS[(byte >> 4) as usize] as char);
                encoded.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
            }
        }
    }
    encoded
}

/// Redirect to the index with a flash banner.
pub fn flash_redirect(message: &str, kind: &str) -> Redirect {
    Redirect::to(&format!(
        "/?message={}&type={}",
        encode_query_value(message),
        encode_query_value(kind)
    ))
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n\
         <h1><a href=\"/\">QuickPaste</a></h1>\n{}</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

fn banner(message: Option<&str>, kind: Option<&str>) -> String {
    let Some(message) = message else {
        return String::new();
    };
    // Only the two known banner kinds map to classes; anything else renders
    // as a success banner.
    let class = match kind {
        Some("error") => "error",
        _ => "success",
    };
    format!(
        "<div class=\"banner {}\">{}</div>\n",
        class,
        escape_html(message)
    )
}

fn pagination_nav(page: usize, total_pages: usize) -> String {
    let mut nav = String::from("<nav class=\"pager\">");
    if page > 1 {
        nav.push_str(&format!("<a href=\"/?page={}\">&laquo; newer</a> ", page - 1));
    }
    nav.push_str(&format!("Page {} of {}", page, total_pages));
    if page < total_pages {
        nav.push_str(&format!(" <a href=\"/?page={}\">older &raquo;</a>", page + 1));
    }
    nav.push_str("</nav>\n");
    nav
}

/// Render the index page: banner, submission form, paste list, pager.
pub fn index_page(
    pastes: &[Paste],
    page: usize,
    total_pages: usize,
    message: Option<&str>,
    kind: Option<&str>,
) -> String {
    let mut body = banner(message, kind);
    body.push_str(FORM_HTML);

    if pastes.is_empty() {
        body.push_str("<p class=\"meta\">No pastes yet.</p>\n");
    } else {
        body.push_str("<ul class=\"pastes\">\n");
        for paste in pastes {
            let title = paste.title.as_deref().unwrap_or("Untitled");
            let language = paste.language.as_deref().unwrap_or("unknown");
            body.push_str(&format!(
                "<li><a href=\"/paste/{id}\">{title}</a> \
                 <span class=\"meta\">{id} | {language} | {created} | {size} chars</span> \
                 <a class=\"meta\" href=\"/raw/{id}\">raw</a> \
                 <a class=\"meta\" href=\"/delete/{id}\">delete</a></li>\n",
                id = escape_html(&paste.id),
                title = escape_html(title),
                language = escape_html(language),
                created = escape_html(&paste.created_at),
                size = paste.size,
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&pagination_nav(page, total_pages));
    page_shell("QuickPaste", &body)
}

/// Render a single paste with its escaped content.
pub fn view_page(paste: &Paste) -> String {
    let title = paste.title.as_deref().unwrap_or("Untitled");
    let mut body = format!(
        "<p class=\"meta\"><a href=\"/\">&laquo; all pastes</a> | {} | {} | \
         <a href=\"/raw/{}\">raw</a></p>\n",
        escape_html(title),
        escape_html(&paste.id),
        escape_html(&paste.id),
    );
    body.push_str(&format!(
        "<pre><code>{}</code></pre>\n",
        escape_html(&paste.content)
    ));
    page_shell(&format!("Paste {}", paste.id), &body)
}
