use crate::error::CatalogError;
use crate::icons::Glyph;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Number of roles defined by the CRediT taxonomy.
pub const ROLE_COUNT: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoleId(&'static str);

impl RoleId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Strategy,
    Research,
    Infrastructure,
    Dissemination,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Strategy,
        Category::Research,
        Category::Infrastructure,
        Category::Dissemination,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Strategy => "Strategy & Leadership",
            Category::Research => "Research & Data",
            Category::Infrastructure => "Infrastructure",
            Category::Dissemination => "Dissemination",
        }
    }

    /// Text of the decorative label drawn next to the diagram.
    pub fn connector_label(&self) -> &'static str {
        match self {
            Category::Research => "Investigation",
            other => other.label(),
        }
    }

    /// Accepts the display label or the variant name, ignoring case.
    pub fn parse(input: &str) -> Option<Category> {
        let needle = input.trim();
        Category::ALL.into_iter().find(|c| {
            c.label().eq_ignore_ascii_case(needle)
                || format!("{:?}", c).eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: RoleId,
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub category: Category,
    pub icon: Glyph,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    roles: Vec<Role>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_roles(builtin_roles()));

impl Catalog {
    /// The CRediT taxonomy, built once and shared read-only for the process lifetime.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_roles(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn first(&self) -> Option<&Role> {
        self.roles.first()
    }

    pub fn get(&self, id: RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn position(&self, id: RoleId) -> Option<usize> {
        self.roles.iter().position(|r| r.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Role> + '_ {
        self.roles.iter().filter(move |r| r.category == category)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.roles.len() != ROLE_COUNT {
            return Err(CatalogError::Cardinality {
                expected: ROLE_COUNT,
                found: self.roles.len(),
            });
        }
        let mut seen = HashSet::new();
        for (i, role) in self.roles.iter().enumerate() {
            if role.id.as_str().is_empty() {
                return Err(CatalogError::EmptyId(i));
            }
            if !seen.insert(role.id) {
                return Err(CatalogError::DuplicateId(role.id.to_string()));
            }
        }
        Ok(())
    }
}

fn builtin_roles() -> Vec<Role> {
    vec![
        Role {
            id: RoleId::new("conceptualization"),
            title: "Conceptualization",
            description: "Ideas; formulation or evolution of overarching research goals and aims.",
            examples: &[
                "Formulating the core research question",
                "Developing hypotheses",
                "Defining the scope of the study",
                "Proposing the initial idea",
            ],
            category: Category::Strategy,
            icon: Glyph::Lightbulb,
        },
        Role {
            id: RoleId::new("funding-acquisition"),
            title: "Funding Acquisition",
            description: "Acquisition of the financial support for the project leading to this publication.",
            examples: &[
                "Writing grant proposals",
                "Securing research fellowships",
                "Managing grant funds",
                "Sourcing financial support",
            ],
            category: Category::Strategy,
            icon: Glyph::DollarSign,
        },
        Role {
            id: RoleId::new("project-admin"),
            title: "Project Administration",
            description: "Management and coordination responsibility for the research activity planning and execution.",
            examples: &[
                "Managing the research team",
                "Coordinating study activities",
                "Tracking project timelines",
                "Organizing project meetings",
            ],
            category: Category::Strategy,
            icon: Glyph::FolderTree,
        },
        Role {
            id: RoleId::new("supervision"),
            title: "Supervision",
            description: "Oversight and leadership responsibility for the research activity planning and execution, including mentorship external to the core team.",
            examples: &[
                "Mentoring junior researchers",
                "Providing strategic direction",
                "Overseeing project progress",
                "Reviewing and signing off on outputs",
            ],
            category: Category::Strategy,
            icon: Glyph::Eye,
        },
        Role {
            id: RoleId::new("data-curation"),
            title: "Data Curation",
            description: "Management activities to annotate (produce metadata), scrub data and maintain research data (including software code, where it is necessary for interpreting the data) for initial use and later reuse.",
            examples: &[
                "Producing metadata",
                "Scrubbing and anonymizing data",
                "Archiving research data",
                "Managing data access",
            ],
            category: Category::Research,
            icon: Glyph::Database,
        },
        Role {
            id: RoleId::new("formal-analysis"),
            title: "Formal Analysis",
            description: "Application of statistical, mathematical, computational, or other formal techniques to analyze or synthesize study data.",
            examples: &[
                "Running statistical tests",
                "Mathematical modeling",
                "Computational analysis",
                "Synthesizing study datasets",
            ],
            category: Category::Research,
            icon: Glyph::Calculator,
        },
        Role {
            id: RoleId::new("investigation"),
            title: "Investigation",
            description: "Conducting a research and investigation process, specifically performing the experiments, or data/evidence collection.",
            examples: &[
                "Performing laboratory experiments",
                "Collecting data in the field",
                "Conducting interviews or surveys",
                "Gathering evidence",
            ],
            category: Category::Research,
            icon: Glyph::Microscope,
        },
        Role {
            id: RoleId::new("methodology"),
            title: "Methodology",
            description: "Development or design of methodology; creation of models.",
            examples: &[
                "Designing experimental protocols",
                "Developing new models",
                "Creating survey instruments",
                "Establishing research frameworks",
            ],
            category: Category::Research,
            icon: Glyph::GitCompareArrows,
        },
        Role {
            id: RoleId::new("validation"),
            title: "Validation",
            description: "Verification, whether as a part of the activity or separate, of the overall replication/reproducibility of results/experiments and other research outputs.",
            examples: &[
                "Replicating experiments",
                "Verifying statistical outputs",
                "Checking code integrity",
                "Confirming reproducibility of results",
            ],
            category: Category::Research,
            icon: Glyph::CheckCircle,
        },
        Role {
            id: RoleId::new("resources"),
            title: "Resources",
            description: "Provision of study materials, reagents, materials, patients, laboratory samples, animals, instrumentation, computing resources, or other analysis tools.",
            examples: &[
                "Providing laboratory space",
                "Supplying reagents or animals",
                "Provisioning computing power",
                "Facilitating patient access",
            ],
            category: Category::Infrastructure,
            icon: Glyph::Box,
        },
        Role {
            id: RoleId::new("software"),
            title: "Software",
            description: "Programming, software development; designing computer programs; implementation of the computer code and supporting algorithms; testing of existing code components.",
            examples: &[
                "Writing custom code",
                "Developing algorithms",
                "Testing software components",
                "Maintaining code repositories",
            ],
            category: Category::Infrastructure,
            icon: Glyph::Code,
        },
        Role {
            id: RoleId::new("visualization"),
            title: "Visualization",
            description: "Preparation, creation and/or presentation of the published work, specifically visualization/data presentation.",
            examples: &[
                "Creating charts and graphs",
                "Designing diagrams",
                "Preparing figure layouts",
                "Visualizing complex datasets",
            ],
            category: Category::Dissemination,
            icon: Glyph::BarChart,
        },
        Role {
            id: RoleId::new("writing-original"),
            title: "Writing - Original Draft",
            description: "Preparation, creation and/or presentation of the published work, specifically writing the initial draft (including substantive translation).",
            examples: &[
                "Writing the first draft",
                "Drafting the manuscript structure",
                "Substantive translation",
                "Producing the initial text",
            ],
            category: Category::Dissemination,
            icon: Glyph::Pencil,
        },
        Role {
            id: RoleId::new("writing-review"),
            title: "Writing - Review & Editing",
            description: "Preparation, creation and/or presentation of the published work by those from the original research group, specifically critical review, commentary or revision, including pre- or post-publication stages.",
            examples: &[
                "Critical review of the draft",
                "Editing for content and flow",
                "Responding to peer reviewers",
                "Proofreading final versions",
            ],
            category: Category::Dissemination,
            icon: Glyph::MessageSquareText,
        },
    ]
}
