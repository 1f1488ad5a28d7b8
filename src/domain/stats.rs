use crate::domain::model::PositionSummary;
use crate::domain::roster::Roster;
use std::collections::BTreeMap;

/// Mean tenure for every position present in the roster, keyed by position.
pub fn average_tenure_by_position(roster: &Roster) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for employee in roster {
        let entry = totals.entry(employee.position.as_str()).or_insert((0.0, 0));
        entry.0 += employee.tenure;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(position, (sum, count))| (position.to_string(), sum / count as f64))
        .collect()
}

/// Position with the smallest average tenure, `None` for an empty roster.
///
/// Ties resolve to the lexicographically smallest position name. NaN averages
/// are never candidates, so a roster holding only NaN tenure also yields `None`.
pub fn position_with_minimum_average(roster: &Roster) -> Option<PositionSummary<'_>> {
    let averages = average_tenure_by_position(roster);

    let mut best: Option<(&String, f64)> = None;
    for (position, &average) in averages.iter().filter(|(_, a)| !a.is_nan()) {
        match best {
            Some((_, current)) if average >= current => {}
            _ => best = Some((position, average)),
        }
    }
    let (position, average) = best?;

    let members: Vec<_> = roster
        .iter()
        .filter(|e| e.position == *position)
        .collect();
    // borrow the key from the roster, the averages map is local
    let first = *members.first()?;
    let position = first.position.as_str();

    Some(PositionSummary {
        position,
        average,
        members,
    })
}
