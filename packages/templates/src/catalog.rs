//! The template catalog
//!
//! Eight fixed templates. Defaults are the canned example copy each section
//! shows until the author edits it.

use crate::schema::{
    FieldDef, FieldKind, FieldSchema, ItemFieldSchema, OptionListSchema, OutlineStyle,
    RepeatedSchema, TemplateSchema,
};
use wirecraft_model::{SubItem, SubValue, TemplateKind};

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    default: &'static str,
) -> FieldDef {
    FieldDef::Scalar(FieldSchema {
        name,
        label,
        kind,
        default,
        multiline: false,
        always_visible: false,
    })
}

/// The section title survives "hide all fields"
const fn title_field(default: &'static str) -> FieldDef {
    FieldDef::Scalar(FieldSchema {
        name: "title",
        label: "Title",
        kind: FieldKind::SectionTitle,
        default,
        multiline: false,
        always_visible: true,
    })
}

const fn multiline_field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    default: &'static str,
) -> FieldDef {
    FieldDef::Scalar(FieldSchema {
        name,
        label,
        kind,
        default,
        multiline: true,
        always_visible: false,
    })
}

fn text_item(pairs: &[(&str, &str)]) -> SubItem {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), SubValue::from(*v)))
        .collect()
}

fn form_field(label: &str, input_type: &str, required: bool) -> SubItem {
    let mut item = SubItem::new();
    item.insert("label".to_string(), SubValue::from(label));
    item.insert("type".to_string(), SubValue::from(input_type));
    item.insert("required".to_string(), SubValue::from(required));
    item
}

fn default_columns() -> Vec<SubItem> {
    vec![
        text_item(&[
            ("title", "Industry-Expert Faculty"),
            ("description", "Learn from professionals actively working in your field."),
        ]),
        text_item(&[
            ("title", "Career Placement Team"),
            ("description", "Dedicated advisors connect you with top employers."),
        ]),
        text_item(&[
            ("title", "Flexible Schedules"),
            ("description", "Online, evening, and weekend options for working adults."),
        ]),
    ]
}

fn default_stats() -> Vec<SubItem> {
    vec![
        text_item(&[("number", "97%"), ("label", "Job Placement")]),
        text_item(&[("number", "4.8/5"), ("label", "Student Rating")]),
        text_item(&[("number", "45K+"), ("label", "Alumni Network")]),
    ]
}

fn default_programs() -> Vec<SubItem> {
    vec![
        text_item(&[
            ("title", "Business Administration MBA"),
            ("description", "Launch into C-suite roles with our AACSB-accredited program."),
        ]),
        text_item(&[
            ("title", "Computer Science B.S."),
            ("description", "Join the tech revolution with guaranteed internships at top firms."),
        ]),
        text_item(&[
            ("title", "Healthcare Management"),
            ("description", "Lead the future of healthcare in our fastest-growing field."),
        ]),
    ]
}

fn default_form_fields() -> Vec<SubItem> {
    vec![
        form_field("First Name", "text", true),
        form_field("Last Name", "text", true),
        form_field("Email", "email", true),
        form_field("Phone", "tel", false),
        form_field("Birth Date", "date", false),
    ]
}

fn default_testimonials() -> Vec<SubItem> {
    vec![
        text_item(&[
            ("quote", "The hands-on projects and industry mentors helped me land a job at Google before graduation."),
            ("name", "Michael Chen"),
            ("role", "MBA 2023, Product Manager"),
        ]),
        text_item(&[
            ("quote", "Balancing work and school was seamless with evening classes. I doubled my salary in 18 months."),
            ("name", "Emily Rodriguez"),
            ("role", "Healthcare Management 2024"),
        ]),
        text_item(&[
            ("quote", "Career services helped me pivot from retail to data science. Now I work at a Fortune 500."),
            ("name", "James Williams"),
            ("role", "Data Science Certificate 2023"),
        ]),
    ]
}

const COLUMN_ITEM_FIELDS: &[ItemFieldSchema] = &[
    ItemFieldSchema { name: "title", label: "Title", kind: FieldKind::ColumnTitle },
    ItemFieldSchema { name: "description", label: "Description", kind: FieldKind::ColumnDescription },
];

const STAT_ITEM_FIELDS: &[ItemFieldSchema] = &[
    ItemFieldSchema { name: "number", label: "Number", kind: FieldKind::StatNumber },
    ItemFieldSchema { name: "label", label: "Label", kind: FieldKind::StatLabel },
];

const PROGRAM_ITEM_FIELDS: &[ItemFieldSchema] = &[
    ItemFieldSchema { name: "title", label: "Title", kind: FieldKind::ProgramTitle },
    ItemFieldSchema { name: "description", label: "Description", kind: FieldKind::ProgramDescription },
];

const FORM_FIELD_ITEM_FIELDS: &[ItemFieldSchema] = &[
    ItemFieldSchema { name: "label", label: "Label", kind: FieldKind::FormFieldLabel },
];

const TESTIMONIAL_ITEM_FIELDS: &[ItemFieldSchema] = &[
    ItemFieldSchema { name: "quote", label: "Quote", kind: FieldKind::TestimonialQuote },
    ItemFieldSchema { name: "name", label: "Name", kind: FieldKind::TestimonialName },
    ItemFieldSchema { name: "role", label: "Role", kind: FieldKind::TestimonialRole },
];

static CONTENT_CTA: TemplateSchema = TemplateSchema {
    kind: TemplateKind::ContentCta,
    name: "Content + CTA",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Why Choose Us"),
        title_field("Your Future Starts Here"),
        multiline_field(
            "body",
            "Body",
            FieldKind::BodyContent,
            "Join 10,000+ graduates now thriving in their careers. Experience personalized mentorship, industry connections, and a 97% job placement rate.",
        ),
        field("ctaText", "CTA Text", FieldKind::CtaButton, "Get Started"),
    ],
};

static THREE_COLUMN: TemplateSchema = TemplateSchema {
    kind: TemplateKind::ThreeColumn,
    name: "Three Column Features",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Why Choose Us"),
        title_field("Built for Your Success"),
        field(
            "subtitle",
            "Subtitle",
            FieldKind::SectionSubtitle,
            "Three reasons why 97% of our graduates land jobs within 6 months.",
        ),
        FieldDef::Repeated(RepeatedSchema {
            name: "columns",
            item_label: "Column",
            item_fields: COLUMN_ITEM_FIELDS,
            outline: OutlineStyle::PerItemLabeled,
            default_items: default_columns,
        }),
        field("ctaText", "CTA Text", FieldKind::CtaButton, "Learn More"),
    ],
};

static STATISTICS: TemplateSchema = TemplateSchema {
    kind: TemplateKind::Statistics,
    name: "Statistics/Numbers",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Our Impact"),
        title_field("Success by the Numbers"),
        field(
            "subtitle",
            "Subtitle",
            FieldKind::SectionSubtitle,
            "Data-driven results that showcase our commitment to student achievement.",
        ),
        FieldDef::Repeated(RepeatedSchema {
            name: "stats",
            item_label: "Stat",
            item_fields: STAT_ITEM_FIELDS,
            outline: OutlineStyle::PerItemJoined,
            default_items: default_stats,
        }),
        field("ctaText", "CTA Text", FieldKind::CtaButton, "View Stats"),
    ],
};

static PROGRAM_CARDS: TemplateSchema = TemplateSchema {
    kind: TemplateKind::ProgramCards,
    name: "Program Cards",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Popular Programs"),
        title_field("Find Your Path to Success"),
        field(
            "subtitle",
            "Subtitle",
            FieldKind::SectionSubtitle,
            "Explore our most in-demand programs designed to launch your career.",
        ),
        FieldDef::Repeated(RepeatedSchema {
            name: "programs",
            item_label: "Program",
            item_fields: PROGRAM_ITEM_FIELDS,
            outline: OutlineStyle::PerItemLabeled,
            default_items: default_programs,
        }),
        field("ctaText", "CTA Text", FieldKind::CtaButton, "Explore All Programs"),
    ],
};

static LEAD_FORM: TemplateSchema = TemplateSchema {
    kind: TemplateKind::LeadForm,
    name: "Lead Generation Form",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Get Started"),
        title_field("Request Information"),
        field(
            "description",
            "Description",
            FieldKind::FormDescription,
            "Connect with an advisor within 24 hours.",
        ),
        FieldDef::Repeated(RepeatedSchema {
            name: "fields",
            item_label: "Form Fields",
            item_fields: FORM_FIELD_ITEM_FIELDS,
            outline: OutlineStyle::CollapsedLabels,
            default_items: default_form_fields,
        }),
        field("dropdownLabel", "Dropdown Label", FieldKind::DropdownLabel, "Start Term"),
        FieldDef::OptionList(OptionListSchema {
            name: "dropdownOptions",
            label: "Dropdown Options",
            default_options: &["Fall 2025", "Spring 2026", "Summer 2026"],
        }),
        field("submitText", "Submit Button", FieldKind::SubmitButton, "Send"),
    ],
};

static TESTIMONIAL_SINGLE: TemplateSchema = TemplateSchema {
    kind: TemplateKind::TestimonialSingle,
    name: "Single Testimonial with Large Quote",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Student Success"),
        title_field("Real Stories, Real Results"),
        field(
            "quote",
            "Quote",
            FieldKind::TestimonialQuoteLarge,
            "The personalized mentorship I received transformed my career path. I went from uncertainty to landing my dream job at a Fortune 500 company before graduation. This program truly delivers on its promises.",
        ),
        field("name", "Name", FieldKind::TestimonialName, "Sarah Johnson"),
        field("role", "Role", FieldKind::TestimonialRole, "Computer Science, Class of 2024"),
    ],
};

static TESTIMONIAL_CAROUSEL: TemplateSchema = TemplateSchema {
    kind: TemplateKind::TestimonialCarousel,
    name: "Testimonial Carousel",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Student Stories"),
        title_field("Hear from Our Graduates"),
        FieldDef::Repeated(RepeatedSchema {
            name: "testimonials",
            item_label: "Testimonial",
            item_fields: TESTIMONIAL_ITEM_FIELDS,
            outline: OutlineStyle::FirstItemFields,
            default_items: default_testimonials,
        }),
    ],
};

static IMAGE_CONTENT: TemplateSchema = TemplateSchema {
    kind: TemplateKind::ImageContent,
    name: "Image + Content",
    defs: &[
        field("eyebrow", "Eyebrow", FieldKind::Eyebrow, "Campus Life"),
        title_field("Visit Our Campus"),
        multiline_field(
            "body",
            "Body",
            FieldKind::BodyContent,
            "Located in the heart of the city, our campus blends modern facilities with a close-knit community feel.\n\n\u{2022} Central location with public transit access\n\u{2022} On-campus housing available\n\u{2022} Dedicated student success center",
        ),
        field("ctaText", "CTA Text", FieldKind::CtaButton, "Explore Programs"),
    ],
};

/// Schema for a catalog member
pub fn schema_for(kind: TemplateKind) -> &'static TemplateSchema {
    match kind {
        TemplateKind::ContentCta => &CONTENT_CTA,
        TemplateKind::ThreeColumn => &THREE_COLUMN,
        TemplateKind::Statistics => &STATISTICS,
        TemplateKind::ProgramCards => &PROGRAM_CARDS,
        TemplateKind::LeadForm => &LEAD_FORM,
        TemplateKind::TestimonialSingle => &TESTIMONIAL_SINGLE,
        TemplateKind::TestimonialCarousel => &TESTIMONIAL_CAROUSEL,
        TemplateKind::ImageContent => &IMAGE_CONTENT,
    }
}

pub fn template_display_name(kind: TemplateKind) -> &'static str {
    schema_for(kind).name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_a_schema() {
        for kind in TemplateKind::ALL {
            let schema = schema_for(kind);
            assert_eq!(schema.kind, kind);
            assert!(!schema.defs.is_empty());
        }
    }

    #[test]
    fn test_every_template_keeps_title_visible() {
        for kind in TemplateKind::ALL {
            let schema = schema_for(kind);
            let survivors: Vec<_> = schema.always_visible_fields().collect();
            assert_eq!(survivors, vec!["title"], "{}", kind.tag());
        }
    }

    #[test]
    fn test_default_content_covers_all_fields() {
        for kind in TemplateKind::ALL {
            let schema = schema_for(kind);
            let defaults = schema.default_content();
            for name in schema.field_names() {
                assert!(defaults.contains_key(name), "{} missing {}", kind.tag(), name);
            }
        }
    }

    #[test]
    fn test_content_cta_defaults() {
        let defaults = schema_for(TemplateKind::ContentCta).default_content();
        assert_eq!(defaults["title"].as_text(), Some("Your Future Starts Here"));
        assert_eq!(defaults["ctaText"].as_text(), Some("Get Started"));
    }

    #[test]
    fn test_lead_form_defaults_shape() {
        let defaults = schema_for(TemplateKind::LeadForm).default_content();
        let fields = defaults["fields"].as_items().unwrap();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[2]["label"].as_text(), Some("Email"));
        assert_eq!(fields[2]["required"].as_flag(), Some(true));
        assert_eq!(fields[3]["required"].as_flag(), Some(false));

        let options = defaults["dropdownOptions"].as_options().unwrap();
        assert_eq!(options, ["Fall 2025", "Spring 2026", "Summer 2026"]);
    }

    #[test]
    fn test_multiline_flags() {
        assert!(schema_for(TemplateKind::ContentCta).scalar("body").unwrap().multiline);
        assert!(schema_for(TemplateKind::ImageContent).scalar("body").unwrap().multiline);
        assert!(!schema_for(TemplateKind::ContentCta).scalar("title").unwrap().multiline);
    }

    #[test]
    fn test_only_image_content_mirrors() {
        for kind in TemplateKind::ALL {
            assert_eq!(
                kind.supports_mirrored_layout(),
                kind == TemplateKind::ImageContent
            );
        }
    }
}
