use crate::filter::FilterSpec;
use crate::models::CuisineTable;
use crate::sort::SortField;

/// Filter then sort, returning positions into `table.records()`.
///
/// Positions rather than references so the caller can hold the result next
/// to the table and use them as stable widget ids.
pub fn evaluate(table: &CuisineTable, spec: &FilterSpec, field: SortField) -> Vec<usize> {
    let records = table.records();
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| spec.matches(r))
        .map(|(i, _)| i)
        .collect();
    indices.sort_by(|&a, &b| field.compare(&records[a], &records[b]));

    log::debug!(
        "Filter matched {} of {} cuisines (sorted by {})",
        indices.len(),
        records.len(),
        field.label()
    );
    indices
}
