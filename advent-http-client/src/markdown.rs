//! Conversion of puzzle descriptions to markdown

use scraper::{ElementRef, Html, Node};

/// How emphasis inside preformatted code is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmphasisStyle {
    /// Fenced block with `*x*` emphasis
    #[default]
    Default,
    /// Fenced block with emphasis dropped
    None,
    /// Raw HTML block with `<i><b>x</b></i>`
    ItalicBold,
    /// Raw HTML block with `<mark>x</mark>`
    Mark,
}

impl EmphasisStyle {
    /// Parse a style name; unrecognized names fall back to the default
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "none" => EmphasisStyle::None,
            "ib" => EmphasisStyle::ItalicBold,
            "mark" => EmphasisStyle::Mark,
            _ => EmphasisStyle::Default,
        }
    }

    fn keeps_html_blocks(self) -> bool {
        matches!(self, EmphasisStyle::ItalicBold | EmphasisStyle::Mark)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Context {
    Text,
    CodeBlock,
}

/// Render a fragment of puzzle HTML as markdown
///
/// # Example
///
/// ```
/// use advent_http_client::{EmphasisStyle, render_markdown};
///
/// let md = render_markdown("<p>Find the <em>floor</em>.</p>", EmphasisStyle::Default);
/// assert_eq!(md, "Find the *floor*.\n\n");
/// ```
pub fn render_markdown(html: &str, style: EmphasisStyle) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    render_children(fragment.root_element(), style, Context::Text, &mut out);
    out
}

fn render_children(
    element: ElementRef<'_>,
    style: EmphasisStyle,
    context: Context,
    out: &mut String,
) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => render_text(text, style, context, out),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    render_element(child, style, context, out);
                }
            }
            _ => {}
        }
    }
}

fn render_text(text: &str, style: EmphasisStyle, context: Context, out: &mut String) {
    match context {
        Context::CodeBlock if style.keeps_html_blocks() => out.push_str(&escape_html(text)),
        Context::CodeBlock => out.push_str(text),
        // Layout whitespace between block elements
        Context::Text if text.trim().is_empty() && text.contains('\n') => {}
        Context::Text => out.push_str(text),
    }
}

fn render_inner(element: ElementRef<'_>, style: EmphasisStyle, context: Context) -> String {
    let mut inner = String::new();
    render_children(element, style, context, &mut inner);
    inner
}

fn render_element(
    element: ElementRef<'_>,
    style: EmphasisStyle,
    context: Context,
    out: &mut String,
) {
    let tag = element.value().name();

    if context == Context::CodeBlock {
        let inner = render_inner(element, style, context);
        match (tag, style) {
            ("em", EmphasisStyle::Default) => out.push_str(&format!("*{inner}*")),
            ("em", EmphasisStyle::ItalicBold) => out.push_str(&format!("<i><b>{inner}</b></i>")),
            ("em", EmphasisStyle::Mark) => out.push_str(&format!("<mark>{inner}</mark>")),
            _ => out.push_str(&inner),
        }
        return;
    }

    match tag {
        "pre" => {
            let inner = render_inner(element, style, Context::CodeBlock);
            if style.keeps_html_blocks() {
                out.push_str(&format!("\n<pre><code>{inner}</code></pre>\n"));
            } else {
                out.push_str(&format!("\n```\n{}\n```\n", inner.trim_end_matches('\n')));
            }
        }
        "em" => out.push_str(&format!("*{}*", render_inner(element, style, context))),
        "code" => out.push_str(&format!("`{}`", render_inner(element, style, context))),
        "a" => {
            let text = render_inner(element, style, context);
            match element.value().attr("href") {
                Some(href) => out.push_str(&format!("[{text}]({href})")),
                None => out.push_str(&text),
            }
        }
        "h2" => {
            let title = element.text().collect::<String>();
            let title = title.trim().trim_matches('-').trim();
            out.push_str(&format!("## {title}\n\n"));
        }
        "p" => {
            out.push_str(render_inner(element, style, context).trim());
            out.push_str("\n\n");
        }
        "ul" => {
            out.push_str(&render_inner(element, style, context));
            out.push('\n');
        }
        "li" => {
            out.push_str("* ");
            out.push_str(render_inner(element, style, context).trim());
            out.push('\n');
        }
        _ => render_children(element, style, context, out),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}
