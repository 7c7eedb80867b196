/// How "split equally" deals with the cents left over when a basis does not
/// divide evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// Every share is rounded to the cent independently. The shares may not
    /// add back up to the basis (99.99 / 2 gives 50.00 + 50.00).
    Unadjusted,
    /// All shares but the last are floored to the cent; the last one absorbs
    /// the leftover so the sum is exact. The last share is never negative and
    /// exceeds the others by at most n - 1 cents.
    LastEntry,
    /// Shares are floored to the cent and the leftover cents are handed out
    /// one at a time starting from the first entry.
    #[default]
    Distribute,
}
