//! Property-based tests for the filter core.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::evaluate::evaluate;
    use crate::state::{FacetSelection, FilterState};
    use proptest::prelude::*;
    use studium_catalog::CatalogEntry;

    const FACETS: [&str; 2] = ["stream", "board"];
    const STREAMS: [&str; 3] = ["Science", "Commerce", "Arts/Humanities"];
    const BOARDS: [&str; 2] = ["CBSE", "ICSE"];
    const WORDS: [&str; 6] = ["physics", "history", "python", "lab", "essays", "chemistry"];

    prop_compose! {
        fn arb_entry()(
            title in "[A-Z][a-z]{2,8}",
            description in proptest::option::of("[a-z]{1,12}"),
            stream in proptest::sample::select(&STREAMS[..]),
            board in proptest::sample::select(&BOARDS[..]),
            tags in proptest::collection::vec(proptest::sample::select(&WORDS[..]), 0..3),
        ) -> CatalogEntry {
            let mut builder = CatalogEntry::builder()
                .title(title)
                .facet("stream", stream)
                .facet("board", board)
                .tags(tags.into_iter().map(String::from).collect());
            if let Some(description) = description {
                builder = builder.description(description);
            }
            builder.build()
        }
    }

    // Ids are assigned by position, so order preservation is observable as
    // strictly increasing ids in the result.
    fn arb_catalog() -> impl Strategy<Value = Vec<CatalogEntry>> {
        proptest::collection::vec(arb_entry(), 0..12).prop_map(|mut entries| {
            for (index, entry) in entries.iter_mut().enumerate() {
                entry.id = index as u32;
            }
            entries
        })
    }

    fn arb_selection(values: &'static [&'static str]) -> impl Strategy<Value = FacetSelection> {
        prop_oneof![
            Just(FacetSelection::All),
            proptest::sample::select(values).prop_map(FacetSelection::value),
        ]
    }

    fn arb_state() -> impl Strategy<Value = FilterState> {
        (
            proptest::option::of(proptest::sample::select(&WORDS[..])),
            arb_selection(&STREAMS[..]),
            arb_selection(&BOARDS[..]),
        )
            .prop_map(|(term, stream, board)| {
                let mut state = FilterState::new(FACETS);
                if let Some(term) = term {
                    state.set_search_term(term);
                }
                state.set_facet("stream", stream);
                state.set_facet("board", board);
                state
            })
    }

    proptest! {
        #[test]
        fn test_unfiltered_state_is_identity(entries in arb_catalog()) {
            let state = FilterState::new(FACETS);
            let visible = evaluate(&entries, &state);
            prop_assert_eq!(visible.len(), entries.len());
        }

        #[test]
        fn test_result_is_ordered_subset(entries in arb_catalog(), state in arb_state()) {
            let visible = evaluate(&entries, &state);
            let mut last_id = None;
            for entry in &visible {
                prop_assert!(entries.iter().any(|e| e.id == entry.id));
                if let Some(last_id) = last_id {
                    prop_assert!(entry.id > last_id);
                }
                last_id = Some(entry.id);
            }
        }

        #[test]
        fn test_evaluation_is_idempotent(entries in arb_catalog(), state in arb_state()) {
            let first = evaluate(&entries, &state);
            let second = evaluate(&entries, &state);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_search_case_insensitive(
            entries in arb_catalog(),
            term in proptest::sample::select(&WORDS[..]),
        ) {
            let mut upper = FilterState::new(FACETS);
            upper.set_search_term(term.to_uppercase());
            let mut lower = FilterState::new(FACETS);
            lower.set_search_term(term.to_lowercase());
            prop_assert_eq!(evaluate(&entries, &upper), evaluate(&entries, &lower));
        }

        #[test]
        fn test_added_restriction_never_grows_result(
            entries in arb_catalog(),
            state in arb_state(),
            value in proptest::sample::select(&STREAMS[..]),
        ) {
            let mut unrestricted = state.clone();
            unrestricted.clear_facet("stream");
            let before = evaluate(&entries, &unrestricted).len();

            let mut restricted = unrestricted.clone();
            restricted.select("stream", value);
            let after = evaluate(&entries, &restricted).len();

            prop_assert!(after <= before);
        }

        #[test]
        fn test_clear_all_restores_full_catalog(
            entries in arb_catalog(),
            state in arb_state(),
        ) {
            let mut state = state;
            state.clear_all();
            prop_assert_eq!(evaluate(&entries, &state).len(), entries.len());
        }
    }
}
