use tracing::debug;

use crate::models::availability::{AvailabilityHit, CabinIndexFilter, SailingTarget};

/// Scans extracted page text for the target sailing and collects every
/// positive cabin count on its row(s).
///
/// A line is considered only when it contains `"<date> <time>"` as a
/// substring; the whitespace-split tokens must then contain the date token
/// immediately followed by the time token. Everything after that pair is the
/// availability row. Lines that fail either check contribute nothing, and
/// every matching line contributes independently.
pub fn find_availability(
    pages: &[String],
    target: &SailingTarget,
    filter: Option<&CabinIndexFilter>,
) -> Vec<AvailabilityHit> {
    let needle = target.needle();
    let mut hits = Vec::new();

    for (page_no, text) in pages.iter().enumerate() {
        for line in text.lines() {
            if !line.contains(&needle) {
                continue;
            }

            let Some(row) = availability_row(line, target) else {
                debug!(
                    "Page {}: line mentions {} but has no matching token pair: {:?}",
                    page_no + 1,
                    target,
                    line
                );
                continue;
            };

            if row.is_empty() {
                debug!("Page {}: empty row for {}", page_no + 1, target);
                continue;
            }

            match filter {
                Some(filter) => {
                    for &idx in filter.indexes() {
                        if let Some(count) = row.get(idx).and_then(|field| positive_count(field)) {
                            hits.push(hit(target, idx, count));
                        }
                    }
                }
                None => {
                    for (idx, field) in row.iter().enumerate() {
                        if let Some(count) = positive_count(field) {
                            hits.push(hit(target, idx, count));
                        }
                    }
                }
            }
        }
    }

    hits
}

/// Returns the tokens following the first date token, provided the very next
/// token is the time token.
fn availability_row<'a>(line: &'a str, target: &SailingTarget) -> Option<Vec<&'a str>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let date_pos = tokens.iter().position(|token| *token == target.date)?;

    match tokens.get(date_pos + 1) {
        Some(time) if *time == target.time => Some(tokens[date_pos + 2..].to_vec()),
        _ => None,
    }
}

/// Counts too large for `u64` saturate, they are still available cabins.
fn positive_count(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count = field.parse::<u64>().unwrap_or(u64::MAX);
    field.bytes().any(|b| b != b'0').then_some(count)
}

fn hit(target: &SailingTarget, index: usize, count: u64) -> AvailabilityHit {
    AvailabilityHit {
        target: target.clone(),
        index,
        count,
    }
}
