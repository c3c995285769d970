//! Remote-wins reconciliation
//!
//! Merges a remote quote collection into the local sequence in one linear
//! pass. Quotes are matched by text; a matching remote quote overwrites the
//! local entry in place, an unmatched one is appended. There is no
//! timestamp or version comparison - last writer wins, deliberately.

use crate::models::Quote;

/// What a merge pass did to the local sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Remote quotes appended as new entries
    pub added: usize,
    /// Local entries overwritten with differing remote data
    pub replaced: usize,
}

impl MergeOutcome {
    /// Whether the pass changed the local sequence at all
    pub fn changed(&self) -> bool {
        self.added > 0 || self.replaced > 0
    }
}

/// Merge remote quotes into the local sequence, remote side winning
///
/// For each remote quote, the first local quote with equal text is
/// overwritten in place; with no match the remote quote is appended.
/// Overwriting an entry with identical content is not counted as a change,
/// so an unchanged collection reports `changed() == false` and callers can
/// skip persisting.
pub fn merge_remote(local: &mut Vec<Quote>, remote: Vec<Quote>) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for remote_quote in remote {
        match local.iter_mut().find(|q| q.text == remote_quote.text) {
            Some(existing) => {
                if *existing != remote_quote {
                    *existing = remote_quote;
                    outcome.replaced += 1;
                }
            }
            None => {
                local.push(remote_quote);
                outcome.added += 1;
            }
        }
    }

    outcome
}
