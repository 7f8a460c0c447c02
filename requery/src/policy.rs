use serde::{Deserialize, Serialize};

/// How the machine treats a completion that arrives after its operation has
/// been superseded by a newer identity.
///
/// No in-flight operation is ever aborted or timed out; the policy only
/// decides whether a late outcome may still overwrite the observable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Discard completions whose generation no longer matches the machine's.
    /// Only the newest operation's outcome can reach the state.
    #[default]
    DiscardStale,
    /// Apply every completion as it arrives: whichever operation finishes
    /// last wins, regardless of request order. This reproduces the behavior
    /// of reducer-style implementations that track no generation at all.
    LastWriteWins,
}

impl CompletionPolicy {
    /// Returns the policy as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CompletionPolicy::DiscardStale => "discard_stale",
            CompletionPolicy::LastWriteWins => "last_write_wins",
        }
    }
}
