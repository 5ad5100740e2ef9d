use crate::blocks::compile_block;
use mailblocks_model::{Document, ThemeParameters};

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Contents of the `<title>` element
    pub title: String,
    /// Tag each block cell with `data-block-id` / `data-block-type` so a
    /// preview surface can map clicks back to blocks
    pub annotate_blocks: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Email".to_string(),
            annotate_blocks: false,
        }
    }
}

/// Where a block sits in the content column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePosition {
    pub first: bool,
    pub last: bool,
}

impl EdgePosition {
    pub fn of(index: usize, len: usize) -> Self {
        Self {
            first: index == 0,
            last: index + 1 == len,
        }
    }

    /// `border-radius` declaration for this position, if any. Only the
    /// outermost blocks get rounded corners.
    pub fn border_radius(&self, radius: u32) -> Option<String> {
        match (self.first, self.last) {
            (true, true) => Some(format!("border-radius:{radius}px;")),
            (true, false) => Some(format!("border-radius:{radius}px {radius}px 0 0;")),
            (false, true) => Some(format!("border-radius:0 0 {radius}px {radius}px;")),
            (false, false) => None,
        }
    }
}

pub(crate) struct Context<'a> {
    pub(crate) options: &'a CompileOptions,
    pub(crate) theme: &'a ThemeParameters,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions, theme: &'a ThemeParameters) -> Self {
        Self {
            options,
            theme,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub(crate) fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Build an opening tag. Attribute values are quote-escaped; `{{...}}`
/// placeholders pass through untouched.
pub(crate) fn open_tag(name: &str, attributes: &[(&str, &str)]) -> String {
    let mut tag = format!("<{name}");
    for (attr, value) in attributes {
        tag.push(' ');
        tag.push_str(attr);
        tag.push_str("=\"");
        tag.push_str(&html_escape::encode_double_quoted_attribute(value));
        tag.push('"');
    }
    tag.push('>');
    tag
}

/// Compile a document to a complete HTML email
pub fn compile_to_html(document: &Document, options: &CompileOptions) -> String {
    let theme = document.theme();
    let mut ctx = Context::new(options, theme);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(&mut ctx);

    let body_style = format!(
        "margin:0;padding:0;background-color:{};font-family:Helvetica,Arial,sans-serif;",
        theme.background_color
    );
    ctx.add_line(&open_tag("body", &[("style", body_style.as_str())]));
    ctx.indent();

    // Full-width page background
    let page_style = format!("background-color:{};", theme.background_color);
    ctx.add_line(&open_tag(
        "table",
        &[
            ("role", "presentation"),
            ("width", "100%"),
            ("cellpadding", "0"),
            ("cellspacing", "0"),
            ("border", "0"),
            ("style", page_style.as_str()),
        ],
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line("<td align=\"center\" style=\"padding:32px 16px;\">");
    ctx.indent();

    // Fixed-width content column
    let width = theme.content_width.to_string();
    let column_style = format!(
        "width:100%;max-width:{}px;background-color:{};border-radius:{}px;",
        theme.content_width, theme.content_background, theme.border_radius
    );
    ctx.add_line(&open_tag(
        "table",
        &[
            ("role", "presentation"),
            ("class", "content"),
            ("width", width.as_str()),
            ("cellpadding", "0"),
            ("cellspacing", "0"),
            ("border", "0"),
            ("style", column_style.as_str()),
        ],
    ));
    ctx.indent();

    let blocks = document.blocks();
    for (index, block) in blocks.iter().enumerate() {
        compile_block(block, EdgePosition::of(index, blocks.len()), &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</table>");
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    let html = ctx.get_output();
    tracing::debug!(blocks = blocks.len(), bytes = html.len(), "compiled document");
    html
}

/// Compile with default options
pub fn render(document: &Document) -> String {
    compile_to_html(document, &CompileOptions::default())
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!(
        "<title>{}</title>",
        html_escape::encode_text(&ctx.options.title)
    );
    ctx.add_line(&title);

    ctx.dedent();
    ctx.add_line("</head>");
}
