//! Searchable listings shared by every catalog record type.
//!
//! A listing is computed in four steps over the candidate records supplied by
//! a repository: filter by name, count, order, page. The computation is pure;
//! repositories only decide where the candidates come from.

mod ordering;
mod types;

pub use ordering::{resolve, SortField};
pub use types::{SearchError, SearchInput, SearchOrder, SearchOutput, DEFAULT_PER_PAGE};

use crate::entity::CatalogEntity;

/// Run a listing request over `candidates`.
///
/// Candidates are expected in insertion order: the sort is stable, so records
/// with equal sort keys keep that order in the output.
pub fn search<T, I>(candidates: I, input: &SearchInput) -> SearchOutput<T>
where
    T: CatalogEntity,
    I: IntoIterator<Item = T>,
{
    let term = input.search.to_lowercase();

    let mut matches: Vec<T> = candidates
        .into_iter()
        .filter(|item| term.is_empty() || item.name().to_lowercase().contains(&term))
        .collect();

    let total = matches.len() as u64;

    matches.sort_by(resolve::<T>(&input.order_by, input.order));

    let items = matches
        .into_iter()
        .skip(input.offset())
        .take(input.per_page as usize)
        .collect();

    SearchOutput {
        current_page: input.page,
        per_page: input.per_page,
        total,
        items,
    }
}
