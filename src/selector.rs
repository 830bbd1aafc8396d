//! Turning page interaction into the shape a canvas should show.

use std::time::{Duration, Instant};

use crate::shape::{CareerShape, Shape};

/// Click-driven walk over a fixed list of shapes.
///
/// A click is accepted only if the previous accepted click is at least
/// `cooldown` old; clicks inside the window are dropped, not queued.
pub struct ShapeCycler<S: Shape> {
    order: &'static [S],
    index: usize,
    cooldown: Duration,
    busy_until: Option<Instant>,
}

impl<S: Shape> ShapeCycler<S> {
    pub fn new(cooldown: Duration) -> Self {
        Self::with_order(S::ALL, cooldown)
    }

    pub fn with_order(order: &'static [S], cooldown: Duration) -> Self {
        assert!(!order.is_empty());
        Self {
            order,
            index: 0,
            cooldown,
            busy_until: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> S {
        self.order[self.index]
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.busy_until.is_some_and(|until| now < until)
    }

    /// Advances to the next shape unless a previous click is still cooling down.
    pub fn click(&mut self, now: Instant) -> Option<S> {
        if self.is_animating(now) {
            log::trace!("Ignoring click during cool-down");
            return None;
        }
        self.busy_until = Some(now + self.cooldown);
        self.index = (self.index + 1) % self.order.len();
        Some(self.current())
    }
}

/// Portfolio sections that own a default shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Internships,
    Education,
    Skills,
    Certifications,
}

impl Section {
    pub const ALL: [Self; 4] = [
        Self::Internships,
        Self::Education,
        Self::Skills,
        Self::Certifications,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Internships => "internships",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn shape(self) -> CareerShape {
        match self {
            Self::Internships => CareerShape::Briefcase,
            Self::Education => CareerShape::Hat,
            Self::Skills => CareerShape::Cube,
            Self::Certifications => CareerShape::Torus,
        }
    }
}

/// Skill badge label and the shape shown while it is hovered.
pub const SKILL_SHAPES: &[(&str, CareerShape)] = &[
    ("Python", CareerShape::Pyramid),
    ("SQL", CareerShape::Cylinder),
    ("Spark", CareerShape::Star),
    ("Hive", CareerShape::Torus),
    ("SAS", CareerShape::Cube),
    ("Git", CareerShape::Sphere),
    ("GitHub", CareerShape::Briefcase),
    ("Excel", CareerShape::Pyramid),
    ("Power BI", CareerShape::Cylinder),
    ("Django", CareerShape::Star),
    ("PostgreSQL", CareerShape::Torus),
    ("REST APIs", CareerShape::Cube),
    ("Celery", CareerShape::Sphere),
    ("Pandas", CareerShape::Pyramid),
    ("Trello", CareerShape::Cylinder),
    ("TensorFlow", CareerShape::Star),
    ("Scikit-learn", CareerShape::Torus),
    ("PyTorch", CareerShape::Cube),
    ("OpenCV", CareerShape::Sphere),
    ("CNN", CareerShape::Pyramid),
    ("Supervised/Unsupervised Learning", CareerShape::Cylinder),
    ("Feature Engineering", CareerShape::Star),
    ("Data Engineering", CareerShape::Torus),
    ("ETL", CareerShape::Cube),
    ("SQL Warehousing", CareerShape::Sphere),
    ("Data Visualization", CareerShape::Pyramid),
    ("Analytical Thinking", CareerShape::Cylinder),
    ("Problem Solving", CareerShape::Star),
    ("Teamwork", CareerShape::Torus),
    ("Communication", CareerShape::Cube),
    ("Leadership", CareerShape::Sphere),
    ("Ownership", CareerShape::Pyramid),
];

/// UI state feeding a morphing canvas, passed in every frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    /// Id of the active navigation section.
    pub section: String,
    /// Label of the hovered skill badge, if any.
    pub hovered_skill: Option<String>,
}

impl Selection {
    pub fn section(section: Section) -> Self {
        Self {
            section: section.id().to_string(),
            hovered_skill: None,
        }
    }

    pub fn hovering(mut self, skill: &str) -> Self {
        self.hovered_skill = Some(skill.to_string());
        self
    }
}

/// Resolves [`Selection`]s to career shapes and reports changes.
#[derive(Default)]
pub struct SectionSelector {
    rendered: Option<CareerShape>,
}

impl SectionSelector {
    /// Shape for a hovered skill; unlisted skills get a sphere.
    pub fn skill_shape(skill: &str) -> CareerShape {
        SKILL_SHAPES
            .iter()
            .find(|&&(label, _)| label == skill)
            .map_or(CareerShape::Sphere, |&(_, shape)| shape)
    }

    /// A hovered skill wins; otherwise the active section decides, and an
    /// unknown section falls back to the default shape.
    pub fn resolve(selection: &Selection) -> CareerShape {
        match selection.hovered_skill {
            Some(ref skill) => Self::skill_shape(skill),
            None => Section::from_id(&selection.section)
                .map_or(CareerShape::DEFAULT, Section::shape),
        }
    }

    /// Returns the shape to switch to, or `None` if it is already rendered.
    pub fn update(&mut self, selection: &Selection) -> Option<CareerShape> {
        let shape = Self::resolve(selection);
        if self.rendered == Some(shape) {
            return None;
        }
        self.rendered = Some(shape);
        Some(shape)
    }

    /// Marks `shape` as already on screen, e.g. the one a canvas mounted with.
    pub fn mark_rendered(&mut self, shape: CareerShape) {
        self.rendered = Some(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ArtifactShape;

    #[test]
    fn cycler_wraps_around() {
        let mut cycler = ShapeCycler::<ArtifactShape>::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..ArtifactShape::ALL.len() - 1 {
            cycler.click(start);
        }
        assert_eq!(cycler.current(), ArtifactShape::InfinityCube);
        assert_eq!(cycler.click(start), Some(ArtifactShape::GizaPyramid));
    }

    #[test]
    fn cycler_drops_clicks_during_cooldown() {
        let mut cycler = ShapeCycler::<ArtifactShape>::new(Duration::from_millis(1000));
        let start = Instant::now();
        assert_eq!(cycler.click(start), Some(ArtifactShape::EyeOfHorus));
        assert!(cycler.is_animating(start + Duration::from_millis(999)));
        assert_eq!(cycler.click(start + Duration::from_millis(500)), None);
        assert_eq!(
            cycler.click(start + Duration::from_millis(1000)),
            Some(ArtifactShape::Obelisk)
        );
    }

    #[test]
    fn hover_overrides_section() {
        let selection = Selection::section(Section::Education);
        assert_eq!(SectionSelector::resolve(&selection), CareerShape::Hat);
        let hovered = selection.hovering("Spark");
        assert_eq!(SectionSelector::resolve(&hovered), CareerShape::Star);
        let unknown = Selection::section(Section::Education).hovering("Rust");
        assert_eq!(SectionSelector::resolve(&unknown), CareerShape::Sphere);
    }

    #[test]
    fn unknown_section_uses_default() {
        let selection = Selection {
            section: "blog".to_string(),
            hovered_skill: None,
        };
        assert_eq!(SectionSelector::resolve(&selection), CareerShape::Briefcase);
    }

    #[test]
    fn selector_reports_only_changes() {
        let mut selector = SectionSelector::default();
        let skills = Selection::section(Section::Skills);
        assert_eq!(selector.update(&skills), Some(CareerShape::Cube));
        assert_eq!(selector.update(&skills), None);
        // same shape through a different route
        assert_eq!(selector.update(&skills.clone().hovering("SAS")), None);
        assert_eq!(
            selector.update(&skills.hovering("Git")),
            Some(CareerShape::Sphere)
        );
    }
}
