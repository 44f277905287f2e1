use std::num::NonZeroUsize;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::types::Opportunity;

// ---------------------------------------------------------------------------
// Board state
// ---------------------------------------------------------------------------

/// Full result set, current page, and the paging counters.
///
/// Every transition takes the state by value and returns the next one, so a
/// host (or a test) can hold on to any earlier snapshot.
///
/// When `page_number >= 1`, `opportunities` is exactly
/// `all_opportunities[(page_number - 1) * page_size .. page_number * page_size]`
/// (clamped to the end); when `page_number == 0` it is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub(crate) all_opportunities: Vec<Opportunity>,
    pub(crate) opportunities: Vec<Opportunity>,
    pub(crate) page_size: NonZeroUsize,
    pub(crate) page_number: usize,
    pub(crate) total_pages: usize,
    pub(crate) is_loaded: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BoardState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            all_opportunities: Vec::new(),
            opportunities: Vec::new(),
            page_size,
            page_number: 0,
            total_pages: 0,
            is_loaded: false,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The full result set.
    pub fn all_opportunities(&self) -> &[Opportunity] {
        &self.all_opportunities
    }

    /// The rows on the current page.
    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// 1-based; 0 only while the result set is empty.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// False until the first load or filter response has been applied.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn is_empty(&self) -> bool {
        self.all_opportunities.is_empty()
    }

    /// Disables the "previous" control. Page 0 counts as first.
    pub fn is_first_page(&self) -> bool {
        self.page_number <= 1
    }

    /// Disables the "next" control. Also true for an empty board (`0 == 0`).
    pub fn is_last_page(&self) -> bool {
        self.page_number == self.total_pages
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Replace the whole result set and go back to the first page.
    pub fn with_opportunities(mut self, all: Vec<Opportunity>) -> Self {
        self.all_opportunities = all;
        self.is_loaded = true;
        self.recalculate()
    }

    /// Recompute the page count and reset to page 1 (page 0 when empty).
    ///
    /// The user's current page is not preserved across a refresh.
    pub fn recalculate(mut self) -> Self {
        self.total_pages = self.all_opportunities.len().div_ceil(self.page_size.get());
        self.page_number = usize::from(self.total_pages > 0);
        self.reslice()
    }

    /// Advance one page. No-op on the last page.
    ///
    /// Only the slice is recomputed; `total_pages` keeps whatever the last
    /// recalculation produced.
    pub fn next_page(mut self) -> Self {
        if self.page_number == self.total_pages {
            return self;
        }
        self.page_number += 1;
        self.reslice()
    }

    /// Go back one page. No-op on page 1 and page 0.
    pub fn previous_page(mut self) -> Self {
        if self.page_number <= 1 {
            return self;
        }
        self.page_number -= 1;
        self.reslice()
    }

    /// Empty everything. Used when a filter matches nothing.
    pub fn clear(mut self) -> Self {
        self.all_opportunities = Vec::new();
        self.opportunities = Vec::new();
        self.page_number = 0;
        self.total_pages = 0;
        self.is_loaded = true;
        self
    }

    /// Store a new page size without re-paginating.
    ///
    /// Takes effect on the next re-slice (`next_page`, `previous_page`) or
    /// recalculation; `total_pages` is left as is until then.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    fn reslice(mut self) -> Self {
        self.opportunities = page_slice(&self.all_opportunities, self.page_number, self.page_size);
        self
    }
}

/// Rows belonging to `page_number` (1-based). Page 0 is always empty.
fn page_slice(all: &[Opportunity], page_number: usize, page_size: NonZeroUsize) -> Vec<Opportunity> {
    let Some(page_idx) = page_number.checked_sub(1) else {
        return Vec::new();
    };
    let size = page_size.get();
    let start = page_idx.saturating_mul(size).min(all.len());
    let end = start.saturating_add(size).min(all.len());
    all[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::normalize;
    use crate::types::RawOpportunity;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn opportunities(count: usize) -> Vec<Opportunity> {
        let raw: Vec<RawOpportunity> = (1..=count)
            .map(|i| RawOpportunity {
                id_opp: i.to_string(),
                name: format!("Opp {i}"),
                stage_name: "Prospecting".to_owned(),
                amount: None,
                close_date: None,
                is_closed: false,
                account_name: None,
                extra: Default::default(),
            })
            .collect();
        normalize(&raw)
    }

    fn ids(rows: &[Opportunity]) -> Vec<&str> {
        rows.iter().map(|o| o.id_opp.as_str()).collect()
    }

    fn assert_slice_invariant(state: &BoardState) {
        if state.page_number == 0 {
            assert!(state.opportunities.is_empty());
            return;
        }
        let size = state.page_size.get();
        let start = ((state.page_number - 1) * size).min(state.all_opportunities.len());
        let end = (state.page_number * size).min(state.all_opportunities.len());
        assert_eq!(state.opportunities, state.all_opportunities[start..end]);
    }

    #[test]
    fn new_board_is_empty_and_unloaded() {
        let state = BoardState::default();
        assert_eq!(state.page_size().get(), 5);
        assert_eq!(state.page_number(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(!state.is_loaded());
        assert!(state.is_first_page());
        assert!(state.is_last_page());
    }

    #[test]
    fn total_pages_is_ceiling_of_len_over_size() {
        for len in 1..=23 {
            for page_size in 1..=7 {
                let state = BoardState::new(size(page_size)).with_opportunities(opportunities(len));
                assert_eq!(state.total_pages(), len.div_ceil(page_size), "len={len} size={page_size}");
                assert!(state.opportunities().len() <= page_size);
                assert_eq!(state.page_number(), 1);
                assert_slice_invariant(&state);
            }
        }
    }

    #[test]
    fn twelve_rows_walk_to_last_page() {
        let state = BoardState::new(size(5)).with_opportunities(opportunities(12));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(ids(state.opportunities()), ["1", "2", "3", "4", "5"]);

        let state = state.next_page().next_page();
        assert_eq!(state.page_number(), 3);
        assert_eq!(ids(state.opportunities()), ["11", "12"]);
        assert!(state.is_last_page());

        let after = state.clone().next_page();
        assert_eq!(after, state);
    }

    #[test]
    fn previous_at_first_page_is_noop() {
        let state = BoardState::new(size(5)).with_opportunities(opportunities(12));
        let after = state.clone().previous_page();
        assert_eq!(after, state);

        let empty = BoardState::default().clear();
        assert_eq!(empty.clone().previous_page(), empty);
    }

    #[test]
    fn next_then_previous_returns_to_first_page() {
        let state = BoardState::new(size(5))
            .with_opportunities(opportunities(12))
            .next_page()
            .previous_page();
        assert_eq!(state.page_number(), 1);
        assert_slice_invariant(&state);
    }

    #[test]
    fn recalculate_resets_to_first_page() {
        let state = BoardState::new(size(5))
            .with_opportunities(opportunities(12))
            .next_page()
            .next_page();
        assert_eq!(state.page_number(), 3);

        let state = state.with_opportunities(opportunities(8));
        assert_eq!(state.page_number(), 1);
        assert_eq!(state.total_pages(), 2);
        assert_slice_invariant(&state);
    }

    #[test]
    fn clear_zeroes_everything() {
        let state = BoardState::new(size(5)).with_opportunities(opportunities(6)).clear();
        assert!(state.all_opportunities().is_empty());
        assert!(state.opportunities().is_empty());
        assert_eq!(state.page_number(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(state.is_loaded());
    }

    #[test]
    fn empty_board_disables_both_controls() {
        let state = BoardState::new(size(5)).with_opportunities(Vec::new());
        assert_eq!(state.page_number(), 0);
        assert!(state.is_first_page());
        assert!(state.is_last_page());
        assert_eq!(state.clone().next_page(), state);
    }

    #[test]
    fn page_size_change_only_affects_next_slice() {
        let state = BoardState::new(size(5)).with_opportunities(opportunities(12));
        let state = state.with_page_size(size(2));
        // Counters untouched until something re-slices.
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.opportunities().len(), 5);

        let state = state.next_page();
        assert_eq!(state.page_number(), 2);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(ids(state.opportunities()), ["3", "4"]);
    }

    #[test]
    fn oversized_page_size_after_load_yields_empty_slice_past_end() {
        let state = BoardState::new(size(1))
            .with_opportunities(opportunities(3))
            .with_page_size(size(10))
            .next_page();
        assert_eq!(state.page_number(), 2);
        assert!(state.opportunities().is_empty());
    }
}
