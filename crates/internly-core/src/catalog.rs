//! The static internship catalog.
//!
//! Fixed reference data: six postings with stable ids, never mutated at
//! runtime and never written to the local store. Lookup and search are
//! pure functions over the in-memory list -- no ranking, no pagination.

use std::sync::LazyLock;

use internly_types::internship::Internship;

static CATALOG: LazyLock<Vec<Internship>> = LazyLock::new(|| {
    vec![
        posting(
            1,
            "Frontend Developer Intern",
            "TechCorp",
            "3 months",
            "Remote",
            &["React", "JavaScript", "CSS"],
            "Join our team to build modern web applications using React and TypeScript.",
        ),
        posting(
            2,
            "Data Science Intern",
            "DataViz Inc",
            "6 months",
            "Mumbai",
            &["Python", "Machine Learning", "SQL"],
            "Work on real-world data analysis projects and machine learning models.",
        ),
        posting(
            3,
            "UX Design Intern",
            "DesignHub",
            "4 months",
            "Pune",
            &["Figma", "UI/UX", "Design Thinking"],
            "Create beautiful user experiences for our mobile and web applications.",
        ),
        posting(
            4,
            "Backend Developer Intern",
            "CloudSystems",
            "3 months",
            "Remote",
            &["Node.js", "Python", "AWS"],
            "Build scalable backend systems and APIs for cloud-based applications.",
        ),
        posting(
            5,
            "Marketing Intern",
            "GrowthLab",
            "3 months",
            "Nashik",
            &["Digital Marketing", "Content Creation", "Analytics"],
            "Help develop and execute marketing campaigns for our SaaS products.",
        ),
        posting(
            6,
            "Mobile App Developer Intern",
            "AppFactory",
            "4 months",
            "Bangalore",
            &["React Native", "iOS", "Android"],
            "Develop cross-platform mobile applications for our growing user base.",
        ),
    ]
});

fn posting(
    id: u32,
    name: &str,
    company: &str,
    duration: &str,
    location: &str,
    skills: &[&str],
    description: &str,
) -> Internship {
    Internship {
        id,
        name: name.to_string(),
        company: company.to_string(),
        duration: duration.to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}

/// The full catalog, in listing order.
pub fn all() -> &'static [Internship] {
    &CATALOG
}

/// Look up a posting by its stable id.
pub fn find(id: u32) -> Option<&'static Internship> {
    CATALOG.iter().find(|i| i.id == id)
}

/// Every posting where `query` is a case-insensitive substring of the
/// name, company, location, or any listed skill. An empty query returns
/// the full catalog.
pub fn search(query: &str) -> Vec<&'static Internship> {
    CATALOG.iter().filter(|i| i.matches(query)).collect()
}
