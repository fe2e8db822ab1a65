/// Whether an asynchronous result still belongs to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Current,
    /// The state moved on since dispatch; the result was not applied.
    Stale,
}

impl Freshness {
    pub fn is_stale(self) -> bool {
        self == Self::Stale
    }
}
