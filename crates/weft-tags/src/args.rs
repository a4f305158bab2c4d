use itertools::Itertools;

use crate::quote::QuoteOptions;

/// Formats an ordered list of already-quoted values as a call-argument
/// string.
///
/// With `prune_tail`, omitted entries are dropped from the end only; pruning
/// stops at the last present entry, so an interior gap still renders as the
/// null literal. Inputs are not quoted here; callers apply
/// [`quote`](crate::quote) first where they want it.
pub fn arg_list<S: AsRef<str>>(values: &[Option<S>], prune_tail: bool) -> String {
    arg_list_with(values, prune_tail, &QuoteOptions::default())
}

pub fn arg_list_with<S: AsRef<str>>(
    values: &[Option<S>],
    prune_tail: bool,
    options: &QuoteOptions,
) -> String {
    let end = if prune_tail {
        values
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1)
    } else {
        values.len()
    };

    values[..end]
        .iter()
        .map(|value| value.as_ref().map_or(options.null_literal, AsRef::as_ref))
        .join(", ")
}
