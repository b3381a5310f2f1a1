use super::section_id::SectionId;

/// Numbered entry inside a section, rendered as `"<index_label>. <display_label>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionItem {
    pub index_label: &'static str,
    pub display_label: &'static str,
}

/// Table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub duration: Option<&'static str>,
    pub items: Vec<SectionItem>,
}

impl Section {
    /// Identifier used by hotspots; `None` for unnumbered sections.
    pub fn id(&self) -> Option<SectionId> {
        SectionId::from_title(self.title)
    }
}

/// Call to action shown under the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

/// The full content column of the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDocument {
    pub heading: &'static str,
    pub lede: &'static str,
    pub lede_emphasis: &'static str,
    pub call_to_action: CallToAction,
    pub sections: Vec<Section>,
    pub footer: &'static str,
}

impl ContentDocument {
    /// The authored landing page.
    pub fn authored() -> Self {
        Self {
            heading: "Humanity's Last Machine",
            lede: "Inside the actuators, sensors, and supply chains that will define the future of labor. \
                   The race to manufacture humanoids has already begun, and",
            lede_emphasis: "America is behind.",
            call_to_action: CallToAction {
                label: "Start reading",
                href: "#",
            },
            sections: table_of_contents(),
            footer: "Made with curiosity and precision.",
        }
    }

    /// Number of sections carrying `id`.
    pub fn sections_with_id(&self, id: &SectionId) -> usize {
        self.sections
            .iter()
            .filter(|section| section.id().as_ref() == Some(id))
            .count()
    }

    /// Identifiers of every numbered section, in document order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().filter_map(Section::id).collect()
    }
}

fn section(
    title: &'static str,
    duration: &'static str,
    items: &[(&'static str, &'static str)],
) -> Section {
    Section {
        title,
        duration: Some(duration),
        items: items
            .iter()
            .map(|&(index_label, display_label)| SectionItem {
                index_label,
                display_label,
            })
            .collect(),
    }
}

/// Article sections in reading order.
pub fn table_of_contents() -> Vec<Section> {
    vec![
        section("Introduction", "6m", &[("a", "Motivation"), ("b", "Scope")]),
        section(
            "1. Foundations",
            "12m",
            &[
                ("a", "Morphology"),
                ("b", "Kinematics"),
                ("c", "Dynamics"),
                ("d", "Control Theory"),
            ],
        ),
        section(
            "2. Actuation",
            "18m",
            &[
                ("a", "Electric Motors"),
                ("b", "Hydraulics"),
                ("c", "Pneumatics"),
                ("d", "Artificial Muscles"),
                ("e", "Quasi-Direct Drive"),
                ("f", "Series Elastic"),
            ],
        ),
        section(
            "3. Sensing",
            "15m",
            &[
                ("a", "Proprioception"),
                ("b", "Force/Torque"),
                ("c", "Vision Systems"),
                ("d", "Tactile Arrays"),
                ("e", "IMUs"),
            ],
        ),
        section(
            "4. Structure",
            "14m",
            &[
                ("a", "Materials"),
                ("b", "Joints"),
                ("c", "Linkages"),
                ("d", "Compliance"),
            ],
        ),
        section(
            "5. Computation",
            "20m",
            &[
                ("a", "Embedded Systems"),
                ("b", "Real-Time Control"),
                ("c", "State Estimation"),
                ("d", "Motion Planning"),
            ],
        ),
        section(
            "6. Power",
            "10m",
            &[
                ("a", "Batteries"),
                ("b", "Distribution"),
                ("c", "Thermal"),
                ("d", "Efficiency"),
            ],
        ),
        section(
            "7. Integration",
            "16m",
            &[
                ("a", "System Design"),
                ("b", "Manufacturing"),
                ("c", "Testing"),
                ("d", "Iteration"),
            ],
        ),
        section("8. Future", "8m", &[("a", "Trends"), ("b", "Challenges")]),
    ]
}
