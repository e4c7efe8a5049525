//! Overlap resolution for raw match sets.

use crate::matcher::Match;

/// Collapse a raw match set to the non-overlapping subset that gets
/// spliced: sort by start ascending then length descending, sweep left to
/// right, and keep a match only when it starts at or after the end of the
/// last kept one.
///
/// This is the classical leftmost-longest cover, not a maximum-coverage
/// one: a kept short match can block a longer match starting slightly
/// later. The sort is stable, so two matches tied on both start and length
/// stay in automaton report order and the first reported wins. Which item
/// that is when two items register the identical surface is therefore
/// automaton insertion order, and callers must not rely on it.
pub fn select_leftmost_longest(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut selected = Vec::new();
    let mut last_end = 0;
    for m in matches {
        if m.start >= last_end {
            last_end = m.end;
            selected.push(m);
        }
    }
    selected
}
