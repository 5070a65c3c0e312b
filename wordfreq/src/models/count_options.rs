// src/models/count_options.rs

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Drop tokens that normalize to the empty string instead of counting them under `""`.
    pub skip_empty: bool,
}

impl CountOptions {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { skip_empty: false }
    }

    #[inline]
    #[must_use]
    pub const fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }
}
