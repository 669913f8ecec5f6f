//! Section records
//!
//! One `Section` is one authored block on the composed page, instantiated
//! from a template in the fixed catalog.

use crate::content::Content;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// The closed catalog of section templates.
///
/// Serialized as the template's kebab-case tag, which is also the value of
/// the `type` key in the export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    ContentCta,
    ThreeColumn,
    Statistics,
    ProgramCards,
    LeadForm,
    TestimonialSingle,
    TestimonialCarousel,
    ImageContent,
}

impl TemplateKind {
    /// All catalog members, in library display order
    pub const ALL: [TemplateKind; 8] = [
        TemplateKind::ContentCta,
        TemplateKind::ThreeColumn,
        TemplateKind::Statistics,
        TemplateKind::ProgramCards,
        TemplateKind::LeadForm,
        TemplateKind::TestimonialSingle,
        TemplateKind::TestimonialCarousel,
        TemplateKind::ImageContent,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            TemplateKind::ContentCta => "content-cta",
            TemplateKind::ThreeColumn => "three-column",
            TemplateKind::Statistics => "statistics",
            TemplateKind::ProgramCards => "program-cards",
            TemplateKind::LeadForm => "lead-form",
            TemplateKind::TestimonialSingle => "testimonial-single",
            TemplateKind::TestimonialCarousel => "testimonial-carousel",
            TemplateKind::ImageContent => "image-content",
        }
    }

    /// Parse a catalog tag; `None` for anything outside the catalog
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Whether the template supports a mirrored (image-side-swapped) layout
    pub fn supports_mirrored_layout(&self) -> bool {
        matches!(self, TemplateKind::ImageContent)
    }
}

/// Theme variant for a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub fn toggled(self) -> Self {
        match self {
            Variant::Light => Variant::Dark,
            Variant::Dark => Variant::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "light" => Some(Variant::Light),
            "dark" => Some(Variant::Dark),
            _ => None,
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Light
    }
}

/// Layout direction for templates that support a mirrored layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    Normal,
    Reversed,
}

impl LayoutDirection {
    pub fn toggled(self) -> Self {
        match self {
            LayoutDirection::Normal => LayoutDirection::Reversed,
            LayoutDirection::Reversed => LayoutDirection::Normal,
        }
    }
}

impl Default for LayoutDirection {
    fn default() -> Self {
        LayoutDirection::Normal
    }
}

/// Opaque unique section identifier.
///
/// Millisecond-epoch based so exported files stay compatible with the
/// numeric ids of older exports; a process-local monotonic guard keeps ids
/// unique when several sections are created within one millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(u64);

static LAST_ID: AtomicU64 = AtomicU64::new(0);

impl SectionId {
    pub fn generate() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut prev = LAST_ID.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match LAST_ID.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return SectionId(next),
                Err(observed) => prev = observed,
            }
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SectionId {
    fn from(raw: u64) -> Self {
        SectionId(raw)
    }
}

/// One authored content block on the composed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,

    #[serde(rename = "type")]
    pub template: TemplateKind,

    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub content: Content,

    /// Per-field show/hide overrides; explicit `false` omits a field from
    /// render and document export, absent entries default to visible
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub visibility: BTreeMap<String, bool>,

    #[serde(
        rename = "layoutDirection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub layout: Option<LayoutDirection>,
}

impl Section {
    /// Create a section with a freshly generated id
    pub fn new(template: TemplateKind, variant: Variant, content: Content) -> Self {
        Self {
            id: SectionId::generate(),
            template,
            variant,
            content,
            visibility: BTreeMap::new(),
            layout: None,
        }
    }

    /// Deep copy with a freshly generated id (the duplicate operation)
    pub fn duplicated(&self) -> Self {
        Self {
            id: SectionId::generate(),
            ..self.clone()
        }
    }

    /// Whether a field is visible (absent entries default to visible)
    pub fn is_field_visible(&self, field: &str) -> bool {
        self.visibility.get(field).copied().unwrap_or(true)
    }

    pub fn text_field(&self, field: &str) -> Option<&str> {
        self.content.get(field).and_then(|v| v.as_text())
    }
}
