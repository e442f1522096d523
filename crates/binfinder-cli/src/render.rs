//! Console rendering of search and classification results

use colored::Colorize;
use std::fmt::Write;

use binfinder::{
    CategoryResult, Coordinate, FacilityResult, SearchResultSet, WasteClassification,
};

const RULE_WIDTH: usize = 30;

/// Human-readable report of a facility search
pub fn render_results(address: &str, origin: &Coordinate, results: &SearchResultSet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} ({})",
        "Target Location:".bold(),
        address,
        origin.to_string().dimmed()
    );
    let _ = writeln!(out, "\n{}", "--- RESULTS ---".bold());

    for entry in results {
        render_category(&mut out, entry);
    }

    out
}

fn render_category(out: &mut String, entry: &CategoryResult) {
    let _ = writeln!(out, "\n{}", format!("[{}]", entry.category.to_uppercase()).cyan().bold());

    if entry.facilities.is_empty() {
        let _ = writeln!(out, "  No facilities found nearby.");
    }
    if let Some(err) = &entry.error {
        let _ = writeln!(out, "  {} {}", "Search failed:".red(), err);
    }

    for facility in &entry.facilities {
        render_facility(out, facility);
    }
}

fn render_facility(out: &mut String, facility: &FacilityResult) {
    let distance = if facility.has_known_distance() {
        format!("{:.2} miles", facility.rounded_distance())
    } else {
        "unknown".to_string()
    };

    let _ = writeln!(out, "  - {}", facility.name.green());
    let _ = writeln!(out, "    Addr: {}", facility.address.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "    Dist: {}", distance);
    let _ = writeln!(out, "    Rating: {}", facility.rating);
}

/// Human-readable sorting decision
pub fn render_classification(classification: &WasteClassification) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule.dimmed());
    let _ = writeln!(
        out,
        "{} {}",
        "DECISION:".bold(),
        classification.decision.to_string().green().bold()
    );
    if !classification.reason.is_empty() {
        let _ = writeln!(out, "{} {}", "REASON:".bold(), classification.reason);
    }
    let _ = writeln!(out, "{}", rule.dimmed());
    out
}

/// A model answer that carried no readable decision, printed as-is
pub fn render_raw_answer(raw: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule.dimmed());
    let _ = writeln!(out, "{}", raw.trim_end());
    let _ = writeln!(out, "{}", rule.dimmed());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use binfinder::{ProviderError, Rating, WasteCategory};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_results() {
        plain();
        let origin = Coordinate::new(37.7749, -122.4194);
        let mut results = SearchResultSet::new();
        results.push(CategoryResult::found(
            "Recycle",
            "recycling center",
            vec![
                FacilityResult::new(
                    &origin,
                    "Oakland Depot",
                    Some("Oakland".to_string()),
                    Rating::Stars(4.5),
                    Some(Coordinate::new(37.8044, -122.2712)),
                ),
                FacilityResult::new(&origin, "Mystery Bin", None, Rating::NotAvailable, None),
            ],
        ));
        results.push(CategoryResult::found("Compost", "composting service", vec![]));
        results.push(CategoryResult::failed(
            "Trash/Dump",
            "waste disposal service",
            ProviderError::RateLimited { retry_after: None },
        ));

        let text = render_results("San Francisco, CA", &origin, &results);

        assert!(text.contains("Target Location: San Francisco, CA (37.7749,-122.4194)"));
        assert!(text.contains("--- RESULTS ---"));
        assert!(text.contains("[RECYCLE]\n  - Oakland Depot\n    Addr: Oakland\n    Dist: 8."));
        assert!(text.contains(" miles\n    Rating: 4.5\n"));
        assert!(text.contains("  - Mystery Bin\n    Addr: -\n    Dist: unknown\n    Rating: N/A"));
        assert!(text.contains("[COMPOST]\n  No facilities found nearby."));
        assert!(text.contains(
            "[TRASH/DUMP]\n  No facilities found nearby.\n  Search failed: Rate limited"
        ));

        let recycle = text.find("[RECYCLE]").unwrap();
        let compost = text.find("[COMPOST]").unwrap();
        let trash = text.find("[TRASH/DUMP]").unwrap();
        assert!(recycle < compost && compost < trash);
    }

    #[test]
    fn test_render_classification() {
        plain();
        let classification = WasteClassification {
            decision: WasteCategory::Recycle,
            reason: "Clean glass bottle.".to_string(),
            raw: String::new(),
        };

        let text = render_classification(&classification);
        assert!(text.starts_with(&"-".repeat(30)));
        assert!(text.contains("DECISION: RECYCLE\nREASON: Clean glass bottle.\n"));
    }

    #[test]
    fn test_render_raw_answer_between_rules() {
        plain();
        let text = render_raw_answer("This banana peel should go in COMPOST.\n");
        let rule = "-".repeat(30);
        assert_eq!(
            text,
            format!("{rule}\nThis banana peel should go in COMPOST.\n{rule}\n")
        );
    }
}
