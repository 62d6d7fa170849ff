//! End-to-end tests for catalog construction and filtering.
//!
//! Exercises the flow a browsing surface drives: load a catalog, populate
//! facet controls from it, mutate the filter state, and evaluate.

#![allow(clippy::unwrap_used)]

use studium::catalog::{course_catalog, loader, samples, CatalogKind, Course};
use studium::filter::{evaluate, FacetSelection, FilterState};

fn course(id: u32, title: &str, stream: &str, board: &str) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: None,
        stream: stream.to_string(),
        board: board.to_string(),
        tags: vec![],
    }
}

#[test]
fn test_two_course_scenario() {
    let catalog = course_catalog(vec![
        course(1, "Physics", "Science", "CBSE"),
        course(2, "History", "Arts/Humanities", "CBSE"),
    ])
    .unwrap();

    // stream=Science alone selects Physics
    let mut state = FilterState::for_catalog(&catalog);
    state.select("stream", "Science");
    let visible = evaluate(catalog.entries(), &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Physics");

    // searching "history" alone selects History
    let mut state = FilterState::for_catalog(&catalog);
    state.set_search_term("history");
    let visible = evaluate(catalog.entries(), &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "History");

    // stream=Science + board=ICSE matches nothing
    let mut state = FilterState::for_catalog(&catalog);
    state.select("stream", "Science");
    state.select("board", "ICSE");
    assert!(evaluate(catalog.entries(), &state).is_empty());
}

#[test]
fn test_facet_controls_drive_valid_selections() {
    let catalog = samples::courses().unwrap();
    let mut state = FilterState::for_catalog(&catalog);

    // Every value offered by a facet control selects a non-empty subset.
    for name in catalog.facet_names() {
        for value in catalog.facet_values(name) {
            state.set_facet(name, FacetSelection::value(value));
            let visible = evaluate(catalog.entries(), &state);
            assert!(
                !visible.is_empty(),
                "{name}={value} should match at least one entry"
            );
            assert!(visible.iter().all(|e| e.facet(name) == Some(value)));
            state.clear_facet(name);
        }
    }
}

#[test]
fn test_search_is_case_insensitive_across_tags() {
    let catalog = samples::courses().unwrap();
    let mut state = FilterState::for_catalog(&catalog);

    // "python" only appears as a tag on Computer Science.
    state.set_search_term("PYTHON");
    let visible = evaluate(catalog.entries(), &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Computer Science");
}

#[test]
fn test_restriction_narrows_and_clear_all_restores() {
    let catalog = samples::courses().unwrap();
    let mut state = FilterState::for_catalog(&catalog);

    let all = evaluate(catalog.entries(), &state).len();
    assert_eq!(all, catalog.len());

    state.select("stream", "Science");
    let narrowed = evaluate(catalog.entries(), &state).len();
    assert!(narrowed < all);

    state.select("board", "CBSE");
    let narrower = evaluate(catalog.entries(), &state).len();
    assert!(narrower <= narrowed);

    state.clear_all();
    assert_eq!(evaluate(catalog.entries(), &state).len(), all);
}

#[test]
fn test_fixture_directory_flow() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("faculty.toml"),
        r#"
[[faculty]]
id = 1
name = "Dr. Meera Sharma"
designation = "Professor"
department = "Physics"
expertise = ["quantum mechanics"]

[[faculty]]
id = 2
name = "Dr. Arjun Nair"
designation = "Associate Professor"
department = "Chemistry"
"#,
    )
    .unwrap();

    let catalog = loader::load_catalog(dir.path(), CatalogKind::Faculty).unwrap();
    assert_eq!(catalog.len(), 2);

    let mut state = FilterState::for_catalog(&catalog);
    state.select("department", "Physics");
    let visible = evaluate(catalog.entries(), &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Dr. Meera Sharma");

    // Expertise entries are search targets.
    state.clear_all();
    state.set_search_term("quantum");
    let visible = evaluate(catalog.entries(), &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);
}
