//! Greedy chassis pattern matching of a lance template against the inventory.

use std::collections::HashSet;

use crate::model::{
    db::MiniatureModel,
    template::{MatchOutcome, TemplateMatch},
};

/// Matches each pattern, in template order, to the first unused miniature whose chassis
/// contains it
///
/// Candidates are scanned by ascending id. A matched miniature is added to the exclusion set
/// so it satisfies at most one pattern, and earlier patterns win contested miniatures. There
/// is no backtracking: a pattern without a free candidate is reported as missing even if a
/// different assignment of earlier patterns would have left one.
///
/// Matching is a case-sensitive substring test against `chassis`.
pub fn match_template(
    patterns: &[String],
    available: &[MiniatureModel],
    exclude: &HashSet<i32>,
) -> MatchOutcome {
    let mut candidates: Vec<&MiniatureModel> = available.iter().collect();
    candidates.sort_by_key(|miniature| miniature.id);

    let mut used = exclude.clone();
    let mut outcome = MatchOutcome::default();

    for pattern in patterns {
        let found = candidates.iter().find(|miniature| {
            !used.contains(&miniature.id) && miniature.chassis.contains(pattern.as_str())
        });

        match found {
            Some(miniature) => {
                used.insert(miniature.id);
                outcome.matches.push(TemplateMatch {
                    pattern: pattern.clone(),
                    miniature: (*miniature).clone(),
                });
            }
            None => outcome.missing.push(pattern.clone()),
        }
    }

    outcome
}
