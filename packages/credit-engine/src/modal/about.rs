//! Static copy for the "About the Project" overlay.

pub const TITLE: &str = "About the Project";

pub const HYPOTHESIS_HEADING: &str = "The Hypothesis";
pub const HYPOTHESIS: &str = "The Credit Role Icon Project tests the hypothesis that improving the user experience of implementing the Contributor Role Taxonomy (CRediT) will result in increased uptake and awareness by journal publishers and authors of scientific articles.";

pub const CREDIT_HEADING: &str = "What are CRediT Roles?";
pub const CREDIT_BODY: &str = "CRediT (Contributor Roles Taxonomy) brings structure and usefulness to the block of names associated with a research paper. We did not create these roles; we are designing visual cues to help increase their adoption.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const CREDIT_LINK: Link = Link {
    label: "Visit Official CRediT Roles Website",
    url: "https://credit.niso.org/",
};

pub const PROCESS_HEADING: &str = "Our Process";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub name: &'static str,
    pub body: &'static str,
    pub link: Option<Link>,
}

pub const PROCESS: [ProcessStep; 3] = [
    ProcessStep {
        name: "Background Research",
        body: "User interviews to understand the problem space and awareness levels.",
        link: None,
    },
    ProcessStep {
        name: "Data Collection",
        body: "Surveys involving scientists to select icons that best matched the 14 defined roles.",
        link: Some(Link {
            label: "View Original Survey",
            url: "https://creditsurvey.sciux.org/",
        }),
    },
    ProcessStep {
        name: "Continuous Improvement",
        body: "Publishing findings and embracing uncertainty to reach the next version.",
        link: None,
    },
];

pub const FINDINGS_HEADING: &str = "Key Findings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub label: &'static str,
    pub body: &'static str,
}

pub const FINDINGS: [Finding; 3] = [
    Finding {
        label: "Low Awareness",
        body: "Participants are often too busy to explore taxonomies, viewing them as 'nice' but not 'necessary'.",
    },
    Finding {
        label: "Concept Approval",
        body: "High agreement that research contribution needs more transparency.",
    },
    Finding {
        label: "Consensus",
        body: "A majority of the roles matched icon ideas generated during the initial interview phase.",
    },
];

pub const FOOTER: &str = "A ScienceUX Project \u{2022} 2026";
