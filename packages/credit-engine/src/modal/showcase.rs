//! Mock journal article that demonstrates a CRediT contribution statement.

use crate::catalog::{Catalog, Role, RoleId};

pub const JOURNAL: &str = "Journal of Metascience";
pub const ISSUE: &str = "Volume 12 \u{2022} Issue 4 \u{2022} 2026";
pub const ARTICLE_TYPE: &str = "Original Research";
pub const TITLE: &str =
    "Optimizing Scientific Credit: A Visual Taxonomy for Contributor Roles";
pub const ABSTRACT: &str = "Accurate attribution of contributor roles in scientific research is critical for transparency. This study explores the efficacy of visual taxonomies in enhancing the readability of contribution statements, moving beyond simple author lists to granular role definitions. By implementing the CRediT taxonomy (Contributor Roles Taxonomy), we demonstrate a significant reduction in cognitive load for readers assessing individual contributions compared to traditional methods.";
pub const CORRESPONDING: &str = "Corresponding Author: mike.morrison@metascience.org";
pub const SOURCE_NOTE: &str = "Source: CRediT Taxonomy";

/// Byline order; also the sort order inside every contribution group.
pub const AUTHOR_ORDER: [&str; 20] = [
    "Mike Morrison",
    "Michael Lai",
    "Rieke Schäfer",
    "Acorn Steed",
    "Adithya Mana",
    "Barry Prendergast",
    "Brian Blais",
    "Celso Júnior",
    "David Green",
    "Divya Koppikar",
    "Jay Patel",
    "Lloyd Gwishiri",
    "Nafisa Mohamed",
    "Philipp Koellinger",
    "Rowan Cockett",
    "Ryan Molen",
    "Samir Mamdouh",
    "Steve Purves",
    "Swetha Ramaswamy",
    "Thurstan Hethorn",
];

pub const AFFILIATIONS: [&str; 3] = [
    "University of Metascience, Department of User Research, Utrecht, The Netherlands",
    "Institute for Open Science, Berlin, Germany",
    "Center for Scientific Reform, Stanford University, CA, USA",
];

/// Contributors per role id, in no particular order.
const CONTRIBUTORS: &[(&str, &[&str])] = &[
    (
        "conceptualization",
        &[
            "Mike Morrison",
            "Michael Lai",
            "Acorn Steed",
            "Adithya Mana",
            "Barry Prendergast",
            "Brian Blais",
            "Celso Júnior",
            "David Green",
            "Divya Koppikar",
            "Jay Patel",
            "Lloyd Gwishiri",
            "Nafisa Mohamed",
            "Philipp Koellinger",
            "Rieke Schäfer",
            "Rowan Cockett",
            "Ryan Molen",
            "Samir Mamdouh",
            "Steve Purves",
            "Swetha Ramaswamy",
            "Thurstan Hethorn",
        ],
    ),
    ("data-curation", &["Michael Lai", "Rieke Schäfer"]),
    ("formal-analysis", &["Michael Lai", "Rieke Schäfer"]),
    ("funding-acquisition", &[]),
    (
        "investigation",
        &["Mike Morrison", "Michael Lai", "Rieke Schäfer"],
    ),
    (
        "methodology",
        &[
            "Mike Morrison",
            "Michael Lai",
            "Swetha Ramaswamy",
            "Rieke Schäfer",
            "Thurstan Hethorn",
        ],
    ),
    ("project-admin", &["Michael Lai"]),
    ("resources", &[]),
    ("software", &["Adithya Mana"]),
    ("supervision", &[]),
    ("validation", &[]),
    ("visualization", &[]),
    ("writing-original", &[]),
    ("writing-review", &[]),
];

/// Groups with more names than this span the full width.
const WIDE_THRESHOLD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowcaseView {
    Standard,
    #[default]
    Credit,
}

impl ShowcaseView {
    pub fn toggled(self) -> Self {
        match self {
            ShowcaseView::Standard => ShowcaseView::Credit,
            ShowcaseView::Credit => ShowcaseView::Standard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShowcaseView::Standard => "Standard View",
            ShowcaseView::Credit => "CRediT View",
        }
    }
}

/// Superscript marker after an author's name in the byline.
pub fn affiliation_marker(index: usize) -> &'static str {
    match index {
        0..=2 => "1, *",
        3..=9 => "2",
        _ => "3",
    }
}

pub fn contributors_of(id: RoleId) -> &'static [&'static str] {
    CONTRIBUTORS
        .iter()
        .find(|(role, _)| *role == id.as_str())
        .map(|(_, names)| *names)
        .unwrap_or(&[])
}

/// Sorts by byline position; names missing from the byline go last.
pub fn sort_names(names: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = names.to_vec();
    sorted.sort_by_key(|name| {
        AUTHOR_ORDER
            .iter()
            .position(|a| a == name)
            .unwrap_or(usize::MAX)
    });
    sorted
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionGroup<'a> {
    pub role: &'a Role,
    pub names: Vec<&'static str>,
    pub wide: bool,
}

/// Roles that have at least one contributor, in catalog order.
pub fn contribution_groups(catalog: &Catalog) -> Vec<ContributionGroup<'_>> {
    catalog
        .roles()
        .iter()
        .filter_map(|role| {
            let names = contributors_of(role.id);
            if names.is_empty() {
                return None;
            }
            let names = sort_names(names);
            Some(ContributionGroup {
                role,
                wide: names.len() > WIDE_THRESHOLD,
                names,
            })
        })
        .collect()
}

/// Plain author list used by the standard view.
pub fn standard_statement() -> String {
    format!("{}.", AUTHOR_ORDER.join(", "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationStatus {
    Published,
    Submitted,
    InPreparation,
}

impl PublicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PublicationStatus::Published => "published",
            PublicationStatus::Submitted => "submitted",
            PublicationStatus::InPreparation => "in preparation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub topic: &'static str,
    pub citation: &'static str,
    pub chapter: &'static str,
    pub status: PublicationStatus,
    /// Conceptualisation, planning, execution, manuscript writing.
    pub contributions: [bool; 4],
}

/// Column headers of the publication table with the role whose glyph they borrow.
pub const PUBLICATION_COLUMNS: [(&str, RoleId); 4] = [
    ("Conceptualisation", RoleId::new("conceptualization")),
    ("Planning", RoleId::new("project-admin")),
    ("Execution", RoleId::new("investigation")),
    ("Manuscript writing", RoleId::new("writing-original")),
];

pub const PUBLICATIONS: [Publication; 4] = [
    Publication {
        topic: "Taxonomy Usability Study",
        citation: "Lai et al., 2026",
        chapter: "Chap. 1",
        status: PublicationStatus::Published,
        contributions: [true, true, false, true],
    },
    Publication {
        topic: "Icon Conception and Design",
        citation: "Mana et al., 2026",
        chapter: "Chap. 2",
        status: PublicationStatus::Published,
        contributions: [true, false, true, false],
    },
    Publication {
        topic: "Quantitative Survey Analysis",
        citation: "Schäfer et al., 2026",
        chapter: "Chap. 3",
        status: PublicationStatus::InPreparation,
        contributions: [false, true, true, true],
    },
    Publication {
        topic: "Final Implementation",
        citation: "Morrison et al., 2026",
        chapter: "Chap. 4",
        status: PublicationStatus::Submitted,
        contributions: [false, true, true, true],
    },
];
