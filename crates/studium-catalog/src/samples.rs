//! Built-in sample catalogs.
//!
//! Used when no data directory is configured. The data mirrors a small
//! college prospectus: course offerings across streams and boards, a faculty
//! directory, and scholarship listings.

use studium_core::Result;

use crate::catalog::Catalog;
use crate::records::{
    course_catalog, faculty_catalog, scholarship_catalog, CatalogKind, Course, FacultyMember,
    Scholarship,
};

fn course(
    id: u32,
    title: &str,
    description: &str,
    stream: &str,
    board: &str,
    tags: &[&str],
) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        stream: stream.to_string(),
        board: board.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The sample course catalog.
pub fn courses() -> Result<Catalog> {
    course_catalog(vec![
        course(
            1,
            "Physics",
            "Mechanics, optics, electromagnetism, and modern physics with lab work.",
            "Science",
            "CBSE",
            &["lab", "numericals"],
        ),
        course(
            2,
            "Chemistry",
            "Physical, organic, and inorganic chemistry with practicals.",
            "Science",
            "CBSE",
            &["lab"],
        ),
        course(
            3,
            "Mathematics",
            "Algebra, calculus, coordinate geometry, and statistics.",
            "Science",
            "ICSE",
            &["numericals"],
        ),
        course(
            4,
            "Computer Science",
            "Programming fundamentals in Python, data structures, and databases.",
            "Science",
            "CBSE",
            &["python", "programming"],
        ),
        course(
            5,
            "History",
            "Ancient, medieval, and modern Indian history with world history themes.",
            "Arts/Humanities",
            "CBSE",
            &["essays"],
        ),
        course(
            6,
            "Political Science",
            "Indian constitution, comparative politics, and international relations.",
            "Arts/Humanities",
            "ICSE",
            &["essays", "debate"],
        ),
        course(
            7,
            "Accountancy",
            "Financial accounting, partnership accounts, and company accounts.",
            "Commerce",
            "CBSE",
            &["numericals"],
        ),
        course(
            8,
            "Business Studies",
            "Principles of management, marketing, and business finance.",
            "Commerce",
            "ICSE",
            &["case-studies"],
        ),
    ])
}

/// The sample faculty directory.
pub fn faculty() -> Result<Catalog> {
    faculty_catalog(vec![
        FacultyMember {
            id: 1,
            name: "Dr. Meera Sharma".to_string(),
            designation: "Professor".to_string(),
            department: "Physics".to_string(),
            expertise: vec!["quantum mechanics".to_string(), "optics".to_string()],
            bio: Some("Heads the physics department; 18 years of teaching.".to_string()),
        },
        FacultyMember {
            id: 2,
            name: "Dr. Arjun Nair".to_string(),
            designation: "Associate Professor".to_string(),
            department: "Chemistry".to_string(),
            expertise: vec!["organic synthesis".to_string()],
            bio: None,
        },
        FacultyMember {
            id: 3,
            name: "Prof. Kavita Iyer".to_string(),
            designation: "Professor".to_string(),
            department: "Mathematics".to_string(),
            expertise: vec!["calculus".to_string(), "statistics".to_string()],
            bio: Some("Author of two undergraduate calculus textbooks.".to_string()),
        },
        FacultyMember {
            id: 4,
            name: "Dr. Rahul Verma".to_string(),
            designation: "Assistant Professor".to_string(),
            department: "Computer Science".to_string(),
            expertise: vec!["python".to_string(), "databases".to_string()],
            bio: None,
        },
        FacultyMember {
            id: 5,
            name: "Dr. Ananya Bose".to_string(),
            designation: "Associate Professor".to_string(),
            department: "History".to_string(),
            expertise: vec!["medieval history".to_string()],
            bio: Some("Research focus on Deccan sultanates.".to_string()),
        },
        FacultyMember {
            id: 6,
            name: "Prof. Suresh Menon".to_string(),
            designation: "Professor".to_string(),
            department: "Commerce".to_string(),
            expertise: vec!["accounting".to_string(), "taxation".to_string()],
            bio: None,
        },
    ])
}

/// The sample scholarship listings.
pub fn scholarships() -> Result<Catalog> {
    scholarship_catalog(vec![
        Scholarship {
            id: 1,
            title: "Merit Scholarship".to_string(),
            description: Some(
                "Full tuition waiver for students scoring above 95% in board exams.".to_string(),
            ),
            level: "Undergraduate".to_string(),
            award: "Full Tuition".to_string(),
            tags: vec!["merit".to_string()],
        },
        Scholarship {
            id: 2,
            title: "Sports Excellence Award".to_string(),
            description: Some(
                "Partial fee waiver for state and national level sports achievers.".to_string(),
            ),
            level: "Undergraduate".to_string(),
            award: "Partial".to_string(),
            tags: vec!["sports".to_string()],
        },
        Scholarship {
            id: 3,
            title: "Research Fellowship".to_string(),
            description: Some(
                "Monthly stipend for postgraduate students assisting faculty research.".to_string(),
            ),
            level: "Postgraduate".to_string(),
            award: "Stipend".to_string(),
            tags: vec!["research".to_string()],
        },
        Scholarship {
            id: 4,
            title: "Need-Based Grant".to_string(),
            description: Some(
                "Partial fee support based on family income, renewable yearly.".to_string(),
            ),
            level: "Undergraduate".to_string(),
            award: "Partial".to_string(),
            tags: vec!["need-based".to_string()],
        },
    ])
}

/// Load the sample catalog for one kind.
pub fn catalog(kind: CatalogKind) -> Result<Catalog> {
    match kind {
        CatalogKind::Courses => courses(),
        CatalogKind::Faculty => faculty(),
        CatalogKind::Scholarships => scholarships(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sample_catalogs_valid() {
        for kind in CatalogKind::ALL {
            let catalog = catalog(kind).unwrap();
            assert!(!catalog.is_empty(), "{kind} samples should not be empty");
        }
    }

    #[test]
    fn test_courses_cover_streams_and_boards() {
        let catalog = courses().unwrap();
        let streams = catalog.facet_values("stream");
        assert!(streams.contains(&"Science"));
        assert!(streams.contains(&"Arts/Humanities"));
        assert!(streams.contains(&"Commerce"));

        let boards = catalog.facet_values("board");
        assert!(boards.contains(&"CBSE"));
        assert!(boards.contains(&"ICSE"));
    }

    #[test]
    fn test_faculty_has_multiple_designations() {
        let catalog = faculty().unwrap();
        assert!(catalog.facet_values("designation").len() >= 2);
    }

    #[test]
    fn test_scholarships_have_levels_and_awards() {
        let catalog = scholarships().unwrap();
        assert!(catalog.facet_values("level").contains(&"Undergraduate"));
        assert!(catalog.facet_values("award").contains(&"Full Tuition"));
    }
}
