use serde::Serialize;

/// A quick-fill button. Values are kept as the raw attribute strings the
/// button carries so they go through the same intake as typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplatePreset {
    pub id: &'static str,
    pub label: &'static str,
    pub city: &'static str,
    pub days: &'static str,
    pub budget: &'static str,
    pub style: &'static str,
}

pub const DEFAULT_TEMPLATES: &[TemplatePreset] = &[
    TemplatePreset {
        id: "paris-weekend",
        label: "Paris long weekend",
        city: "Paris",
        days: "4",
        budget: "1800",
        style: "balanced",
    },
    TemplatePreset {
        id: "tokyo-premium",
        label: "Tokyo premium week",
        city: "Tokyo",
        days: "7",
        budget: "6000",
        style: "premium",
    },
    TemplatePreset {
        id: "bali-budget",
        label: "Bali on a budget",
        city: "Bali",
        days: "10",
        budget: "1400",
        style: "budget",
    },
    TemplatePreset {
        id: "lisbon-break",
        label: "Lisbon city break",
        city: "Lisbon",
        days: "3",
        budget: "",
        style: "",
    },
];

pub fn find_template<'a>(templates: &'a [TemplatePreset], id: &str) -> Option<&'a TemplatePreset> {
    templates.iter().find(|preset| preset.id == id)
}
