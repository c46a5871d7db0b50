//! Markdown rendering.
//!
//! Two views of the same body: [`to_html`] produces the standalone document
//! the server hands back verbatim, and [`to_plain_text`] produces the
//! stripped text that feeds the search index.

use pulldown_cmark::{html, Event, Options, Parser, TagEnd};

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Render a markdown body into a standalone HTML document.
pub fn to_html(title: &str, markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n{style}\n</style>\n\
         </head>\n\
         <body>\n<article>\n{body}</article>\n</body>\n\
         </html>\n",
        title = escape_html(title),
        style = DOCUMENT_STYLE,
        body = body,
    )
}

/// Strip a markdown body down to plain text for indexing.
///
/// Walks the event stream and keeps only text and code content; block
/// boundaries and line breaks collapse to single spaces so substring search
/// works across soft-wrapped lines.
pub fn to_plain_text(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut out = String::new();

    for event in parser {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => push_separator(&mut out),
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::CodeBlock) => push_separator(&mut out),
            _ => {}
        }
    }

    // Code blocks carry their own newlines; normalize those too.
    let collapsed: Vec<&str> = out.split_whitespace().collect();
    collapsed.join(" ")
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const DOCUMENT_STYLE: &str = "\
article { max-width: 46rem; margin: 2rem auto; padding: 0 1rem;\n\
  font-family: -apple-system, system-ui, sans-serif; line-height: 1.6; color: #1f2328; }\n\
pre { background: #f6f8fa; padding: 0.8rem; overflow-x: auto; border-radius: 6px; }\n\
code { font-family: ui-monospace, monospace; font-size: 0.92em; }\n\
blockquote { border-left: 4px solid #d0d7de; margin-left: 0; padding-left: 1rem; color: #57606a; }\n\
table { border-collapse: collapse; } th, td { border: 1px solid #d0d7de; padding: 0.3rem 0.6rem; }\n\
img { max-width: 100%; }";
