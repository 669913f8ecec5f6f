//! Section markup emission
//!
//! One generic renderer parameterized by the declarative template schemas.
//! Field lookup, default fallback, visibility filtering and escaping all
//! happen in the shared helpers; the per-template match only decides
//! structure.

use crate::context::Context;
use wirecraft_common::sanitize::escape_html;
use wirecraft_model::{LayoutDirection, Section, SubItem, SubValue, TemplateKind, Viewport};
use wirecraft_templates::{schema_for, FieldDef, RepeatedSchema, TemplateSchema};

/// Rendering switches
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit the drag handle and section control buttons. Image capture
    /// turns this off so exports show content only.
    pub show_controls: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_controls: true,
        }
    }
}

/// Render one section to markup
pub fn render_section(section: &Section, options: &RenderOptions) -> String {
    let mut ctx = Context::new();
    emit_section(&mut ctx, section, options);
    ctx.into_output()
}

/// Render the editing canvas: all sections, or the empty state
pub fn render_canvas(sections: &[Section], options: &RenderOptions) -> String {
    let mut ctx = Context::new();
    if sections.is_empty() {
        ctx.add_line(r#"<div class="empty-state"><p>Click a section from the library to get started</p></div>"#);
        return ctx.into_output();
    }

    ctx.add_line(r#"<div class="wireframe-container" data-wireframe-root="true">"#);
    ctx.indent();
    for section in sections {
        emit_section(&mut ctx, section, options);
    }
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.into_output()
}

/// Render a standalone HTML document for capture or preview
pub fn render_page(sections: &[Section], viewport: Viewport, options: &RenderOptions) -> String {
    let (width, _) = viewport.dimensions();
    let canvas = render_canvas(sections, options);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            -webkit-font-smoothing: antialiased;
            background: #ffffff;
        }}
        .wireframe-container {{
            width: {width}px;
            margin: 0 auto;
        }}
        .section {{
            padding: 3rem 2rem;
            position: relative;
        }}
        .section.dark {{
            background: #1a1a2e;
            color: #ffffff;
        }}
    </style>
</head>
<body>
    {canvas}
</body>
</html>"#
    )
}

fn emit_section(ctx: &mut Context, section: &Section, options: &RenderOptions) {
    let schema = schema_for(section.template);
    let tag = section.template.tag();

    let mut classes = format!("section {} {}", tag, section.variant.as_str());
    if section.layout == Some(LayoutDirection::Reversed) {
        classes.push_str(" reversed");
    }

    ctx.add_line(&format!(
        r#"<div class="{}" data-section-type="{}" data-section-id="{}">"#,
        classes,
        tag,
        section.id.value()
    ));
    ctx.indent();
    ctx.add_line(r#"<div class="section-container">"#);
    ctx.indent();

    match section.template {
        TemplateKind::ContentCta => emit_content_cta(ctx, section, schema),
        TemplateKind::ThreeColumn => emit_three_column(ctx, section, schema),
        TemplateKind::Statistics => emit_statistics(ctx, section, schema),
        TemplateKind::ProgramCards => emit_program_cards(ctx, section, schema),
        TemplateKind::LeadForm => emit_lead_form(ctx, section, schema),
        TemplateKind::TestimonialSingle => emit_testimonial_single(ctx, section, schema),
        TemplateKind::TestimonialCarousel => emit_testimonial_carousel(ctx, section, schema),
        TemplateKind::ImageContent => emit_image_content(ctx, section, schema),
    }

    ctx.dedent();
    ctx.add_line("</div>");

    if options.show_controls {
        emit_controls(ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

// ---- shared field helpers -------------------------------------------------

/// Emit one scalar field as an editable element. The single place scalar
/// text is escaped; hidden fields are skipped entirely.
fn field(
    ctx: &mut Context,
    section: &Section,
    schema: &TemplateSchema,
    name: &str,
    tag: &str,
    class: &str,
) {
    let Some(field) = schema.scalar(name) else {
        return;
    };
    if !section.is_field_visible(name) {
        return;
    }

    let text = section.text_field(name).unwrap_or(field.default);
    let mut escaped = escape_html(text);
    if field.multiline {
        escaped = escaped.replace('\n', "<br>");
    }

    ctx.add_line(&format!(
        r#"<{tag} class="{class} editable" contenteditable="true" data-field="{name}">{escaped}</{tag}>"#,
    ));
}

/// Emit one editable text field of a repeated sub-item
fn item_field(
    ctx: &mut Context,
    group: &str,
    index: usize,
    item: &SubItem,
    key: &str,
    tag: &str,
    class: &str,
) {
    let text = item.get(key).and_then(SubValue::as_text).unwrap_or("");
    ctx.add_line(&format!(
        r#"<{tag} class="{class} editable" contenteditable="true" data-field="{group}.{index}.{key}">{}</{tag}>"#,
        escape_html(text),
    ));
}

/// Stored items for a repeated group, falling back to the schema defaults
fn group_items(section: &Section, schema: &TemplateSchema, name: &str) -> Vec<SubItem> {
    let stored = section
        .content
        .get(name)
        .and_then(|value| value.as_items())
        .map(|items| items.to_vec());

    stored.unwrap_or_else(|| {
        repeated_schema(schema, name)
            .map(|group| (group.default_items)())
            .unwrap_or_default()
    })
}

fn repeated_schema<'a>(schema: &'a TemplateSchema, name: &str) -> Option<&'a RepeatedSchema> {
    schema.defs.iter().find_map(|def| match def {
        FieldDef::Repeated(group) if group.name == name => Some(group),
        _ => None,
    })
}

fn option_values(section: &Section, schema: &TemplateSchema, name: &str) -> Vec<String> {
    let stored = section
        .content
        .get(name)
        .and_then(|value| value.as_options())
        .map(|options| options.to_vec());

    stored.unwrap_or_else(|| {
        schema
            .defs
            .iter()
            .find_map(|def| match def {
                FieldDef::OptionList(list) if list.name == name => {
                    Some(list.default_options.iter().map(|s| s.to_string()).collect())
                }
                _ => None,
            })
            .unwrap_or_default()
    })
}

fn emit_header(ctx: &mut Context, section: &Section, schema: &TemplateSchema, class: &str) {
    ctx.add_line(&format!(r#"<div class="{class}">"#));
    ctx.indent();
    field(ctx, section, schema, "eyebrow", "div", "eyebrow");
    field(ctx, section, schema, "title", "h2", "section-title");
    field(ctx, section, schema, "subtitle", "p", "section-subtitle");
    ctx.dedent();
    ctx.add_line("</div>");
}

fn emit_cta(ctx: &mut Context, section: &Section, schema: &TemplateSchema, centered: bool) {
    if schema.scalar("ctaText").is_none() || !section.is_field_visible("ctaText") {
        return;
    }
    if centered {
        ctx.add_line(r#"<div class="cta-row">"#);
        ctx.indent();
    }
    let text = section
        .text_field("ctaText")
        .unwrap_or_else(|| schema.scalar("ctaText").map(|f| f.default).unwrap_or(""));
    ctx.add_line(&format!(
        r##"<a href="#" class="cta-button editable" contenteditable="true" data-field="ctaText">{}</a>"##,
        escape_html(text),
    ));
    if centered {
        ctx.dedent();
        ctx.add_line("</div>");
    }
}

fn emit_controls(ctx: &mut Context) {
    ctx.add_line(r#"<div class="drag-handle" draggable="true" aria-label="Drag to reorder section">"#);
    ctx.indent();
    ctx.add_line(r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true"><path d="M9 3h6M9 7h6M9 11h6M9 15h6M9 19h6" stroke-width="2" stroke-linecap="round"/></svg>"#);
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.add_line(r#"<div class="section-controls">"#);
    ctx.indent();
    ctx.add_line(r#"<button class="control-btn duplicate-btn" aria-label="Duplicate section">Duplicate</button>"#);
    ctx.add_line(r#"<button class="control-btn variant-btn" aria-label="Toggle theme variant">Toggle Theme</button>"#);
    ctx.add_line(r#"<button class="control-btn delete delete-btn" aria-label="Delete section">Delete</button>"#);
    ctx.dedent();
    ctx.add_line("</div>");
}

// ---- per-template structure ----------------------------------------------

fn emit_content_cta(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    emit_header(ctx, section, schema, "section-header");
    field(ctx, section, schema, "body", "div", "body-content");
    emit_cta(ctx, section, schema, false);
}

fn emit_three_column(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    emit_header(ctx, section, schema, "section-header");

    if section.is_field_visible("columns") {
        ctx.add_line(r#"<div class="three-column-grid">"#);
        ctx.indent();
        for (i, item) in group_items(section, schema, "columns").iter().enumerate() {
            ctx.add_line(&format!(r#"<div class="column-item" data-column-index="{i}">"#));
            ctx.indent();
            ctx.add_line(r#"<div class="column-image">Mountain Graphic</div>"#);
            item_field(ctx, "columns", i, item, "title", "h3", "column-title");
            item_field(ctx, "columns", i, item, "description", "p", "column-description");
            ctx.dedent();
            ctx.add_line("</div>");
        }
        ctx.dedent();
        ctx.add_line("</div>");
    }

    emit_cta(ctx, section, schema, true);
}

fn emit_statistics(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    emit_header(ctx, section, schema, "section-header");

    if section.is_field_visible("stats") {
        ctx.add_line(r#"<div class="stats-grid">"#);
        ctx.indent();
        for (i, item) in group_items(section, schema, "stats").iter().enumerate() {
            ctx.add_line(&format!(r#"<div class="stat-item" data-stat-index="{i}">"#));
            ctx.indent();
            item_field(ctx, "stats", i, item, "number", "div", "stat-number");
            item_field(ctx, "stats", i, item, "label", "div", "stat-label");
            ctx.dedent();
            ctx.add_line("</div>");
        }
        ctx.dedent();
        ctx.add_line("</div>");
    }

    emit_cta(ctx, section, schema, true);
}

fn emit_program_cards(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    emit_header(ctx, section, schema, "section-header");

    if section.is_field_visible("programs") {
        ctx.add_line(r#"<div class="program-grid">"#);
        ctx.indent();
        for (i, item) in group_items(section, schema, "programs").iter().enumerate() {
            ctx.add_line(&format!(r#"<div class="program-card" data-program-index="{i}">"#));
            ctx.indent();
            ctx.add_line(r#"<div class="program-image">Mountain Graphic</div>"#);
            ctx.add_line(r#"<div class="program-content">"#);
            ctx.indent();
            item_field(ctx, "programs", i, item, "title", "h3", "program-title");
            item_field(ctx, "programs", i, item, "description", "p", "program-description");
            ctx.dedent();
            ctx.add_line("</div>");
            ctx.dedent();
            ctx.add_line("</div>");
        }
        ctx.dedent();
        ctx.add_line("</div>");
    }

    emit_cta(ctx, section, schema, true);
}

fn emit_lead_form(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    ctx.add_line(r#"<div class="form-layout">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="form-content">"#);
    ctx.indent();

    ctx.add_line(r#"<div class="form-header">"#);
    ctx.indent();
    field(ctx, section, schema, "eyebrow", "div", "eyebrow");
    field(ctx, section, schema, "title", "h2", "section-title");
    field(ctx, section, schema, "description", "p", "form-description");
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line(r#"<form class="lead-generation-form" onsubmit="return false;">"#);
    ctx.indent();

    if section.is_field_visible("fields") {
        for (i, item) in group_items(section, schema, "fields").iter().enumerate() {
            let label = item.get("label").and_then(SubValue::as_text).unwrap_or("");
            let input_type = item.get("type").and_then(SubValue::as_text).unwrap_or("text");
            let required = item
                .get("required")
                .and_then(SubValue::as_flag)
                .unwrap_or(false);

            let marker = if required { " *" } else { "" };
            ctx.add_line(r#"<div class="form-field">"#);
            ctx.indent();
            ctx.add_line(&format!(
                r#"<label for="field-{i}" class="editable" contenteditable="true" data-field="fields.{i}.label">{}{marker}</label>"#,
                escape_html(label),
            ));
            ctx.add_line(&format!(
                r#"<input type="{}" id="field-{i}" placeholder="{}"{} aria-required="{required}">"#,
                escape_html(input_type),
                escape_html(label),
                if required { " required" } else { "" },
            ));
            ctx.dedent();
            ctx.add_line("</div>");
        }
    }

    if section.is_field_visible("dropdownLabel") && section.is_field_visible("dropdownOptions") {
        ctx.add_line(r#"<div class="form-field">"#);
        ctx.indent();
        field(ctx, section, schema, "dropdownLabel", "label", "dropdown-label");
        ctx.add_line(r#"<select id="dropdown-field">"#);
        ctx.indent();
        for option in option_values(section, schema, "dropdownOptions") {
            let escaped = escape_html(&option);
            ctx.add_line(&format!(r#"<option value="{escaped}">{escaped}</option>"#));
        }
        ctx.dedent();
        ctx.add_line("</select>");
        ctx.dedent();
        ctx.add_line("</div>");
    }

    if section.is_field_visible("submitText") {
        let text = section
            .text_field("submitText")
            .unwrap_or_else(|| schema.scalar("submitText").map(|f| f.default).unwrap_or(""));
        ctx.add_line(&format!(
            r#"<button type="submit" class="submit-btn editable" contenteditable="true" data-field="submitText">{}</button>"#,
            escape_html(text),
        ));
    }

    ctx.dedent();
    ctx.add_line("</form>");
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line(r#"<div class="form-image">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="decorative-graphic">Mountain Graphic</div>"#);
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
}

fn emit_testimonial_single(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    ctx.add_line(r#"<div class="testimonial-layout">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="testimonial-image-large">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="profile-placeholder">Profile Image</div>"#);
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line(r#"<div class="testimonial-content-large">"#);
    ctx.indent();
    emit_header(ctx, section, schema, "testimonial-header");

    if section.is_field_visible("quote") {
        let quote = section
            .text_field("quote")
            .unwrap_or_else(|| schema.scalar("quote").map(|f| f.default).unwrap_or(""));
        ctx.add_line(&format!(
            r#"<blockquote class="testimonial-quote-large editable" contenteditable="true" data-field="quote">&quot;{}&quot;</blockquote>"#,
            escape_html(quote),
        ));
    }

    ctx.add_line(r#"<div class="testimonial-attribution">"#);
    ctx.indent();
    field(ctx, section, schema, "name", "div", "testimonial-name");
    field(ctx, section, schema, "role", "div", "testimonial-role");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
}

fn emit_testimonial_carousel(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    emit_header(ctx, section, schema, "section-header");

    if !section.is_field_visible("testimonials") {
        return;
    }

    // only the first testimonial is shown; the dots stand in for the rest
    let items = group_items(section, schema, "testimonials");
    let Some(first) = items.first() else {
        return;
    };

    ctx.add_line(r#"<div class="testimonial-carousel-container">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="testimonial-slide active">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="testimonial-profile">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="profile-circle">Profile</div>"#);
    ctx.dedent();
    ctx.add_line("</div>");

    let quote = first.get("quote").and_then(SubValue::as_text).unwrap_or("");
    ctx.add_line(&format!(
        r#"<blockquote class="testimonial-quote editable" contenteditable="true" data-field="testimonials.0.quote">&quot;{}&quot;</blockquote>"#,
        escape_html(quote),
    ));

    ctx.add_line(r#"<div class="testimonial-info">"#);
    ctx.indent();
    item_field(ctx, "testimonials", 0, first, "name", "div", "testimonial-name");
    item_field(ctx, "testimonials", 0, first, "role", "div", "testimonial-role");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line(r#"<div class="carousel-dots">"#);
    ctx.indent();
    for i in 0..items.len().max(1) {
        if i == 0 {
            ctx.add_line(r#"<span class="dot active"></span>"#);
        } else {
            ctx.add_line(r#"<span class="dot"></span>"#);
        }
    }
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
}

fn emit_image_content(ctx: &mut Context, section: &Section, schema: &TemplateSchema) {
    ctx.add_line(r#"<div class="image-content-grid">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="image-column">"#);
    ctx.indent();
    ctx.add_line(r#"<div class="content-image">Mountain Graphic</div>"#);
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line(r#"<div class="content-column">"#);
    ctx.indent();
    field(ctx, section, schema, "eyebrow", "div", "eyebrow");
    field(ctx, section, schema, "title", "h2", "section-title");
    field(ctx, section, schema, "body", "div", "body-content");
    emit_cta(ctx, section, schema, false);
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
}
