//! Command handlers.
//!
//! Each handler loads the requested catalog (fixtures if a data directory is
//! configured, built-in samples otherwise), drives the filter core, and
//! renders the result in plain or JSON mode.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use studium_catalog::{loader, samples, Catalog, CatalogEntry, CatalogKind};
use studium_core::{normalize_key, Error};
use studium_filter::{evaluate, FilterState};

use crate::cli::Command;
use crate::output;

/// Dispatch one parsed command.
pub fn run(command: Command, data_dir: Option<&Path>, json: bool) -> Result<()> {
    match command {
        Command::Browse {
            catalog,
            search,
            facets,
        } => {
            let catalog = load(catalog.into(), data_dir)?;
            let facets = parse_facet_flags(&facets)?;
            browse(&catalog, search.as_deref(), &facets, json)
        }
        Command::Facets { catalog } => {
            let catalog = load(catalog.into(), data_dir)?;
            facets(&catalog, json)
        }
        Command::Show { catalog, id } => {
            let catalog = load(catalog.into(), data_dir)?;
            show(&catalog, id, json)
        }
        Command::Catalogs => catalogs(json),
    }
}

fn load(kind: CatalogKind, data_dir: Option<&Path>) -> Result<Catalog> {
    let catalog = match data_dir {
        Some(dir) => loader::load_catalog(dir, kind)?,
        None => samples::catalog(kind)?,
    };
    Ok(catalog)
}

/// Parse repeated `--facet NAME=VALUE` flags.
///
/// Facet names are normalized to the catalog's lowercase kebab-case form;
/// values are kept verbatim since facet matching is exact.
fn parse_facet_flags(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|flag| {
            let (name, value) = flag.split_once('=').ok_or_else(|| {
                anyhow::anyhow!("invalid --facet '{flag}', expected NAME=VALUE")
            })?;
            Ok((normalize_key(name), value.to_string()))
        })
        .collect()
}

/// Build the filter state for one browse invocation.
///
/// Unknown facet names are ignored with a warning rather than failing the
/// command.
fn build_state(catalog: &Catalog, search: Option<&str>, facets: &[(String, String)]) -> FilterState {
    let mut state = FilterState::for_catalog(catalog);
    if let Some(term) = search {
        state.set_search_term(term);
    }
    for (name, value) in facets {
        state.select(name, value.clone());
    }
    state
}

fn facet_summary(entry: &CatalogEntry) -> String {
    entry
        .facets
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Serialize)]
struct BrowseReport<'a> {
    catalog: &'a str,
    search_term: &'a str,
    active_filters: BTreeMap<&'a str, &'a str>,
    total: usize,
    entries: Vec<&'a CatalogEntry>,
}

fn browse(
    catalog: &Catalog,
    search: Option<&str>,
    facets: &[(String, String)],
    json: bool,
) -> Result<()> {
    let state = build_state(catalog, search, facets);
    let visible = evaluate(catalog.entries(), &state);

    if json {
        let report = BrowseReport {
            catalog: catalog.name(),
            search_term: state.search_term(),
            active_filters: state.active_selections().into_iter().collect(),
            total: visible.len(),
            entries: visible,
        };
        return output::print_json(report);
    }

    if !state.is_unfiltered() {
        let mut chips = Vec::new();
        if !state.search_term().is_empty() {
            chips.push(format!("search='{}'", state.search_term()));
        }
        for (name, value) in state.active_selections() {
            chips.push(format!("{name}={value}"));
        }
        println!("filters: {}", chips.join(", "));
    }

    if visible.is_empty() {
        println!("no entries match the active filters");
        return Ok(());
    }

    for entry in &visible {
        println!("{}\t{}\t{}", entry.id, entry.title, facet_summary(entry));
    }
    Ok(())
}

#[derive(Serialize)]
struct FacetReport<'a> {
    name: &'a str,
    values: Vec<&'a str>,
}

fn facets(catalog: &Catalog, json: bool) -> Result<()> {
    let reports: Vec<FacetReport<'_>> = catalog
        .facet_names()
        .iter()
        .map(|name| FacetReport {
            name,
            values: catalog.facet_values(name),
        })
        .collect();

    if json {
        return output::print_json(reports);
    }

    for report in reports {
        println!("{}: {}", report.name, report.values.join(", "));
    }
    Ok(())
}

fn show(catalog: &Catalog, id: u32, json: bool) -> Result<()> {
    let entry = catalog
        .entry(id)
        .ok_or_else(|| Error::not_found(format!("{} entry {id}", catalog.name())))?;

    if json {
        return output::print_json(entry);
    }

    println!("id: {}", entry.id);
    println!("title: {}", entry.title);
    if let Some(description) = &entry.description {
        println!("description: {description}");
    }
    for (name, value) in &entry.facets {
        println!("{name}: {value}");
    }
    if !entry.tags.is_empty() {
        println!("tags: {}", entry.tags.join(", "));
    }
    Ok(())
}

fn catalogs(json: bool) -> Result<()> {
    let names: Vec<&str> = CatalogKind::ALL.iter().map(|kind| kind.as_str()).collect();

    if json {
        return output::print_json(names);
    }

    for name in names {
        println!("{name}");
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
