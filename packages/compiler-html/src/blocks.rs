//! Per-kind rendering rules.
//!
//! Every block becomes one `<tr><td>` row of the content table. The cell
//! carries the block's padding, its background (header and footer only) and
//! the corner rounding for its edge position.

use crate::compiler::{open_tag, Context, EdgePosition};
use mailblocks_model::{format_number, Attributes, Block, BlockKind};

/// Shown when an image block has no source yet
pub(crate) const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x300?text=Image";

const HEADING_SIZES: [(&str, u32); 3] = [("h1", 28), ("h2", 22), ("h3", 18)];
const DEFAULT_TEXT_COLOR: &str = "#4b5563";
const DEFAULT_HEADING_COLOR: &str = "#1f2937";
const FOOTER_TEXT_COLOR: &str = "#9ca3af";

pub(crate) fn compile_block(block: &Block, position: EdgePosition, ctx: &mut Context) {
    let attrs = &block.attributes;

    match block.kind {
        BlockKind::Header => compile_header(block, attrs, position, ctx),
        BlockKind::Heading => compile_heading(block, attrs, position, ctx),
        BlockKind::Paragraph => compile_paragraph(block, attrs, position, ctx),
        BlockKind::Image => compile_image(block, attrs, position, ctx),
        BlockKind::Button => compile_button(block, attrs, position, ctx),
        BlockKind::Divider => compile_divider(block, attrs, position, ctx),
        BlockKind::Spacer => compile_spacer(block, attrs, position, ctx),
        BlockKind::List => compile_list(block, attrs, position, ctx),
        BlockKind::Footer => compile_footer(block, attrs, position, ctx),
    }
}

/// Open `<tr><td>` for a block with the given base cell style
fn open_cell(block: &Block, base_style: &str, position: EdgePosition, ctx: &mut Context) {
    let mut style = base_style.to_string();
    if let Some(radius) = position.border_radius(ctx.theme.border_radius) {
        style.push_str(&radius);
    }

    ctx.add_line("<tr>");
    ctx.indent();

    let td = if ctx.options.annotate_blocks {
        open_tag(
            "td",
            &[
                ("data-block-id", block.id.as_str()),
                ("data-block-type", block.kind.as_str()),
                ("style", style.as_str()),
            ],
        )
    } else {
        open_tag("td", &[("style", style.as_str())])
    };
    ctx.add_line(&td);
    ctx.indent();
}

fn close_cell(ctx: &mut Context) {
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
}

/// A cell with no visible content
fn compile_inert(block: &Block, position: EdgePosition, ctx: &mut Context) {
    open_cell(block, "font-size:0;line-height:0;", position, ctx);
    ctx.add_line("&nbsp;");
    close_cell(ctx);
}

/// Pixel length from an attribute, falling back to `default`
fn px(attrs: &Attributes, name: &str, default: u32) -> String {
    match attrs.number(name) {
        Some(n) if n.is_finite() && n >= 0.0 => format!("{}px", format_number(n)),
        _ => format!("{default}px"),
    }
}

fn color(attrs: &Attributes, name: &str, default: &str) -> String {
    attrs.non_empty_text(name).unwrap_or_else(|| default.to_string())
}

/// Line breaks in operator text become `<br>`
fn text_content(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}

/// Translucent variant of `color` for the button glow. Only six-digit hex
/// colors can take an alpha suffix; anything else gets a neutral shadow.
fn soft_shadow(color: &str) -> String {
    let is_hex6 = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if is_hex6 {
        format!("0 4px 14px {color}59")
    } else {
        "0 4px 14px rgba(0,0,0,0.15)".to_string()
    }
}

fn compile_header(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let theme = ctx.theme;
    let style = format!(
        "padding:40px 32px;text-align:center;background-color:{primary};background-image:linear-gradient(135deg, {primary} 0%, {secondary} 100%);",
        primary = theme.primary_color,
        secondary = theme.secondary_color,
    );
    open_cell(block, &style, position, ctx);

    if let Some(title) = attrs.non_empty_text("title") {
        ctx.add_line(&format!(
            "<h1 style=\"margin:0;font-size:32px;line-height:1.25;font-weight:700;color:#ffffff;\">{}</h1>",
            text_content(&title)
        ));
    }
    if let Some(subtitle) = attrs.non_empty_text("subtitle") {
        ctx.add_line(&format!(
            "<p style=\"margin:12px 0 0;font-size:16px;line-height:1.5;color:rgba(255,255,255,0.85);\">{}</p>",
            text_content(&subtitle)
        ));
    }

    close_cell(ctx);
}

fn compile_heading(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let requested = attrs
        .text("level")
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let (tag, size) = HEADING_SIZES
        .iter()
        .copied()
        .find(|(level, _)| *level == requested)
        .unwrap_or(HEADING_SIZES[1]);

    open_cell(block, "padding:24px 32px 8px;", position, ctx);
    ctx.add_line(&format!(
        "<{tag} style=\"margin:0;font-size:{size}px;line-height:1.3;font-weight:700;color:{};\">{}</{tag}>",
        color(attrs, "color", DEFAULT_HEADING_COLOR),
        text_content(&attrs.text("text").unwrap_or_default()),
    ));
    close_cell(ctx);
}

fn compile_paragraph(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    open_cell(block, "padding:12px 32px;", position, ctx);
    ctx.add_line(&format!(
        "<p style=\"margin:0;font-size:{};line-height:1.6;color:{};\">{}</p>",
        px(attrs, "fontSize", 16),
        color(attrs, "color", DEFAULT_TEXT_COLOR),
        text_content(&attrs.text("text").unwrap_or_default()),
    ));
    close_cell(ctx);
}

fn compile_image(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let src = attrs
        .non_empty_text("url")
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let alt = attrs.text("alt").unwrap_or_default();
    let default_width = ctx.theme.content_width.saturating_sub(64);
    let width = px(attrs, "width", default_width);
    let style = format!("display:block;margin:0 auto;width:100%;max-width:{width};height:auto;border:0;");

    open_cell(block, "padding:16px 32px;text-align:center;", position, ctx);
    let img = open_tag(
        "img",
        &[
            ("src", src.as_str()),
            ("alt", alt.as_str()),
            ("width", width.trim_end_matches("px")),
            ("style", style.as_str()),
        ],
    );
    ctx.add_line(&img);
    close_cell(ctx);
}

fn compile_button(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let href = attrs.non_empty_text("url").unwrap_or_else(|| "#".to_string());
    let fill = color(attrs, "color", &ctx.theme.primary_color);
    let style = format!(
        "display:inline-block;padding:14px 32px;background-color:{fill};color:#ffffff;font-size:16px;font-weight:600;text-decoration:none;border-radius:9999px;box-shadow:{};",
        soft_shadow(&fill)
    );

    open_cell(block, "padding:16px 32px;text-align:center;", position, ctx);
    let anchor = open_tag(
        "a",
        &[("href", href.as_str()), ("target", "_blank"), ("style", style.as_str())],
    );
    ctx.add_line(&format!(
        "{anchor}{}</a>",
        text_content(&attrs.text("text").unwrap_or_default())
    ));
    close_cell(ctx);
}

fn compile_divider(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let style = format!("padding:{} 32px;", px(attrs, "margin", 24));

    open_cell(block, &style, position, ctx);
    ctx.add_line(&format!(
        "<hr style=\"margin:0;border:none;border-top:1px solid {};\">",
        color(attrs, "color", "#e5e7eb")
    ));
    close_cell(ctx);
}

fn compile_spacer(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let height = px(attrs, "height", 32);
    let style = format!("height:{height};line-height:{height};font-size:0;padding:0;");

    open_cell(block, &style, position, ctx);
    ctx.add_line("&nbsp;");
    close_cell(ctx);
}

fn compile_list(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let items = attrs.list("items").unwrap_or_default();
    if items.is_empty() {
        compile_inert(block, position, ctx);
        return;
    }

    open_cell(block, "padding:12px 32px;", position, ctx);
    ctx.add_line(&format!(
        "<ul style=\"margin:0;padding:0 0 0 20px;font-size:16px;line-height:1.6;color:{};\">",
        color(attrs, "color", DEFAULT_TEXT_COLOR)
    ));
    ctx.indent();
    for item in &items {
        ctx.add_line(&format!(
            "<li style=\"margin:0 0 8px;\">{}</li>",
            text_content(item)
        ));
    }
    ctx.dedent();
    ctx.add_line("</ul>");
    close_cell(ctx);
}

fn compile_footer(block: &Block, attrs: &Attributes, position: EdgePosition, ctx: &mut Context) {
    let style = format!(
        "padding:24px 32px;text-align:center;background-color:{};",
        ctx.theme.footer_background
    );

    open_cell(block, &style, position, ctx);
    ctx.add_line(&format!(
        "<p style=\"margin:0;font-size:12px;line-height:1.5;color:{FOOTER_TEXT_COLOR};\">{}</p>",
        text_content(&attrs.text("text").unwrap_or_default())
    ));
    close_cell(ctx);
}
