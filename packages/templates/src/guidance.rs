//! Writing guidance
//!
//! Advisory data for the editing surface: per-field-kind character budgets
//! and writing tips, plus the pure status function that drives counter
//! styling. Purely informational — nothing here ever blocks an edit.

use crate::schema::FieldKind;
use wirecraft_model::{TemplateKind, Viewport};

/// Character budget and tips for one field kind
#[derive(Debug, Clone, Copy)]
pub struct Guidance {
    pub max_chars: usize,
    pub ideal_chars: usize,
    pub tips: &'static [&'static str],
}

/// Tips shown when a field has no specific guidance
pub const GENERAL_TIPS: &[&str] = &[
    "Mobile users see 30-40% less content",
    "Higher ed compliance: avoid guarantees",
    "Focus on outcomes, not features",
    "Use inclusive, accessible language",
];

/// Ideal word-count band for body copy
pub const WORD_BAND_IDEAL: (usize, usize) = (50, 75);

/// Counter status relative to a guidance budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCountStatus {
    Ok,
    Warning,
    Error,
}

static EYEBROW: Guidance = Guidance {
    max_chars: 35,
    ideal_chars: 25,
    tips: &[
        "Keep eyebrow text to 3-5 words",
        "Use as category label or key benefit",
        "Examples: \"Why Choose Us\", \"Student Success\"",
        "Avoid punctuation and full sentences",
    ],
};

static SECTION_TITLE: Guidance = Guidance {
    max_chars: 70,
    ideal_chars: 45,
    tips: &[
        "Headlines work best at 6-12 words (35-70 characters)",
        "Front-load with key benefit or outcome",
        "Use power words that evoke emotion",
        "Make it specific to your audience",
    ],
};

static SECTION_SUBTITLE: Guidance = Guidance {
    max_chars: 160,
    ideal_chars: 120,
    tips: &[
        "Expand on the headline promise",
        "Keep to 20-25 words for best readability",
        "Include specific value proposition",
        "Break into two sentences if needed",
    ],
};

static BODY_CONTENT: Guidance = Guidance {
    max_chars: 600,
    ideal_chars: 400,
    tips: &[
        "Limit to 50-75 words for best readability",
        "Lead with most compelling benefit",
        "Use simple, conversational language",
        "Each sentence should add new value",
    ],
};

static CTA_BUTTON: Guidance = Guidance {
    max_chars: 25,
    ideal_chars: 15,
    tips: &[
        "Best CTAs are 2-3 words",
        "Start with action verb",
        "Examples: \"Get Started\", \"Learn More\", \"Apply Now\"",
        "Match CTA to user intent",
    ],
};

static SUBMIT_BUTTON: Guidance = Guidance {
    max_chars: 20,
    ideal_chars: 12,
    tips: &[
        "Keep form buttons concise",
        "Good examples: \"Send\", \"Submit\", \"Get Info\"",
        "Match button text to form purpose",
        "Ensure mobile tap targets are 44px+",
    ],
};

static STAT_NUMBER: Guidance = Guidance {
    max_chars: 8,
    ideal_chars: 5,
    tips: &[
        "Round to memorable numbers",
        "Include unit symbol (%, K, +)",
        "Examples: \"97%\", \"10K+\", \"#1\"",
        "Make numbers instantly scannable",
    ],
};

static STAT_LABEL: Guidance = Guidance {
    max_chars: 25,
    ideal_chars: 18,
    tips: &[
        "Use 2-3 words maximum",
        "Focus on the outcome",
        "Examples: \"Job Placement\", \"Graduation Rate\"",
        "Avoid complex metrics",
    ],
};

static COLUMN_TITLE: Guidance = Guidance {
    max_chars: 35,
    ideal_chars: 25,
    tips: &[
        "Feature titles need 3-5 words",
        "Start with benefit, not feature",
        "Make each unique and specific",
        "Consider icon pairing",
    ],
};

static COLUMN_DESCRIPTION: Guidance = Guidance {
    max_chars: 100,
    ideal_chars: 75,
    tips: &[
        "One compelling sentence is best",
        "Expand on title benefit",
        "Keep under 15 words",
        "Use active, present tense",
    ],
};

static PROGRAM_TITLE: Guidance = Guidance {
    max_chars: 50,
    ideal_chars: 35,
    tips: &[
        "Use official program names",
        "Include degree type when relevant",
        "Examples: \"MBA in Finance\", \"B.S. Computer Science\"",
        "Maintain consistency across all cards",
    ],
};

static PROGRAM_DESCRIPTION: Guidance = Guidance {
    max_chars: 120,
    ideal_chars: 90,
    tips: &[
        "Focus on career outcomes",
        "Mention 1-2 key differentiators",
        "Keep to 15-20 words",
        "Highlight demand or growth",
    ],
};

static FORM_DESCRIPTION: Guidance = Guidance {
    max_chars: 140,
    ideal_chars: 100,
    tips: &[
        "Set clear expectations about next steps",
        "Mention response time to build trust",
        "Keep to one compelling sentence",
        "Consider privacy reassurance",
    ],
};

static TESTIMONIAL_QUOTE: Guidance = Guidance {
    max_chars: 200,
    ideal_chars: 150,
    tips: &[
        "Best testimonials are 20-30 words",
        "Include specific outcome or transformation",
        "Keep authentic voice and tone",
        "One powerful statement beats many",
    ],
};

static TESTIMONIAL_QUOTE_LARGE: Guidance = Guidance {
    max_chars: 350,
    ideal_chars: 250,
    tips: &[
        "Tell mini success story in 2-3 sentences",
        "Include before/after transformation",
        "Mention specific achievements",
        "Keep conversational and authentic",
    ],
};

static TESTIMONIAL_NAME: Guidance = Guidance {
    max_chars: 30,
    ideal_chars: 20,
    tips: &[
        "Use full name for credibility",
        "First and last name only",
        "Check privacy permissions",
        "Consider using real alumni",
    ],
};

static TESTIMONIAL_ROLE: Guidance = Guidance {
    max_chars: 50,
    ideal_chars: 35,
    tips: &[
        "Format: \"Program, Class of Year\"",
        "Can add current job title",
        "Example: \"MBA 2023, Marketing Director\"",
        "Keep consistent across testimonials",
    ],
};

// The image+content template keeps the shared budgets but swaps in tips
// with examples that fit a campus/location section.

static IMAGE_CONTENT_EYEBROW: Guidance = Guidance {
    max_chars: 35,
    ideal_chars: 25,
    tips: &[
        "Keep eyebrow text to 3-5 words",
        "Use as category label or key benefit",
        "Examples: \"Campus Life\", \"Our Location\", \"Student Experience\"",
        "Avoid punctuation and full sentences",
    ],
};

static IMAGE_CONTENT_BODY: Guidance = Guidance {
    max_chars: 600,
    ideal_chars: 400,
    tips: &[
        "Limit to 50-75 words for best readability",
        "Lead with most compelling benefit",
        "Use simple, conversational language",
        "Can include bullet points using \u{2022} symbol",
        "Each sentence should add new value",
    ],
};

static IMAGE_CONTENT_CTA: Guidance = Guidance {
    max_chars: 25,
    ideal_chars: 15,
    tips: &[
        "Best CTAs are 2-3 words",
        "Start with action verb",
        "Examples: \"Learn More\", \"Explore Campus\", \"Schedule Visit\"",
        "Match CTA to user intent",
    ],
};

/// Guidance for a field kind; `None` for kinds with only the general tips
pub fn guidance_for(kind: FieldKind) -> Option<&'static Guidance> {
    match kind {
        FieldKind::Eyebrow => Some(&EYEBROW),
        FieldKind::SectionTitle => Some(&SECTION_TITLE),
        FieldKind::SectionSubtitle => Some(&SECTION_SUBTITLE),
        FieldKind::BodyContent => Some(&BODY_CONTENT),
        FieldKind::CtaButton => Some(&CTA_BUTTON),
        FieldKind::SubmitButton => Some(&SUBMIT_BUTTON),
        FieldKind::StatNumber => Some(&STAT_NUMBER),
        FieldKind::StatLabel => Some(&STAT_LABEL),
        FieldKind::ColumnTitle => Some(&COLUMN_TITLE),
        FieldKind::ColumnDescription => Some(&COLUMN_DESCRIPTION),
        FieldKind::ProgramTitle => Some(&PROGRAM_TITLE),
        FieldKind::ProgramDescription => Some(&PROGRAM_DESCRIPTION),
        FieldKind::FormDescription => Some(&FORM_DESCRIPTION),
        FieldKind::FormFieldLabel => None,
        FieldKind::DropdownLabel => None,
        FieldKind::TestimonialQuote => Some(&TESTIMONIAL_QUOTE),
        FieldKind::TestimonialQuoteLarge => Some(&TESTIMONIAL_QUOTE_LARGE),
        FieldKind::TestimonialName => Some(&TESTIMONIAL_NAME),
        FieldKind::TestimonialRole => Some(&TESTIMONIAL_ROLE),
        FieldKind::General => None,
    }
}

fn template_override(template: TemplateKind, kind: FieldKind) -> Option<&'static Guidance> {
    if template != TemplateKind::ImageContent {
        return None;
    }
    match kind {
        FieldKind::Eyebrow => Some(&IMAGE_CONTENT_EYEBROW),
        FieldKind::BodyContent => Some(&IMAGE_CONTENT_BODY),
        FieldKind::CtaButton => Some(&IMAGE_CONTENT_CTA),
        _ => None,
    }
}

/// Status relative to a budget: over max is an error, over ideal a warning
pub fn char_count_status(chars: usize, guidance: &Guidance) -> CharCountStatus {
    if chars > guidance.max_chars {
        CharCountStatus::Error
    } else if chars > guidance.ideal_chars {
        CharCountStatus::Warning
    } else {
        CharCountStatus::Ok
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Everything the advisory panel shows for one focused field
#[derive(Debug, Clone, Copy)]
pub struct Advice {
    pub chars: usize,
    pub guidance: Option<&'static Guidance>,
    pub status: CharCountStatus,

    /// Word count, reported for body copy only
    pub words: Option<usize>,

    pub tips: &'static [&'static str],

    /// Text likely too long for the mobile preview
    pub mobile_alert: bool,
}

/// Assemble the advisory panel data for a field's current text
pub fn advise(template: TemplateKind, kind: FieldKind, text: &str, viewport: Viewport) -> Advice {
    let trimmed = text.trim();
    let chars = trimmed.chars().count();

    let guidance = template_override(template, kind).or_else(|| guidance_for(kind));
    let status = guidance
        .map(|g| char_count_status(chars, g))
        .unwrap_or(CharCountStatus::Ok);

    let words = matches!(kind, FieldKind::BodyContent).then(|| word_count(trimmed));

    Advice {
        chars,
        guidance,
        status,
        words,
        tips: guidance.map(|g| g.tips).unwrap_or(GENERAL_TIPS),
        mobile_alert: viewport == Viewport::Mobile && text.chars().count() > 50,
    }
}
