use crate::catalog::{Category, Role};
use crate::icons::Glyph;
use crate::theme::{self, Theme};

pub const PLACEHOLDER_HEADING: &str = "Contributor Roles Taxonomy";
pub const PLACEHOLDER_HINT: &str = "Select a node to explore";
pub const ACTIVITIES_HEADING: &str = "Key Activities";

/// Where the detail is shown: the desktop side panel or the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailVariant {
    Panel,
    Drawer,
}

impl DetailVariant {
    fn description_heading(&self) -> &'static str {
        match self {
            DetailVariant::Panel => "Role Definition",
            DetailVariant::Drawer => "Description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailSection {
    Badge(Category),
    Emblem(Glyph),
    Title(&'static str),
    Divider,
    Description {
        heading: &'static str,
        body: &'static str,
    },
    Activities {
        heading: &'static str,
        items: &'static [&'static str],
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Placeholder {
        heading: &'static str,
        hint: &'static str,
    },
    Populated {
        theme: Theme,
        sections: Vec<DetailSection>,
    },
}

impl DetailView {
    pub fn new(role: Option<&Role>, variant: DetailVariant) -> Self {
        let Some(role) = role else {
            return DetailView::Placeholder {
                heading: PLACEHOLDER_HEADING,
                hint: PLACEHOLDER_HINT,
            };
        };

        let mut sections = vec![
            DetailSection::Badge(role.category),
            DetailSection::Emblem(role.icon),
            DetailSection::Title(role.title),
            DetailSection::Divider,
            DetailSection::Description {
                heading: variant.description_heading(),
                body: role.description,
            },
        ];
        if !role.examples.is_empty() {
            sections.push(DetailSection::Activities {
                heading: ACTIVITIES_HEADING,
                items: role.examples,
            });
        }

        DetailView::Populated {
            theme: theme::theme(role.category),
            sections,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DetailView::Placeholder { .. })
    }

    pub fn sections(&self) -> &[DetailSection] {
        match self {
            DetailView::Placeholder { .. } => &[],
            DetailView::Populated { sections, .. } => sections,
        }
    }

    pub fn has_activities(&self) -> bool {
        self.sections()
            .iter()
            .any(|s| matches!(s, DetailSection::Activities { .. }))
    }
}
