/// Subdivision budget used by [`Config::default`].
pub const DEFAULT_MAX_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of levels that may be created below the root
    pub max_depth: u8,

    /// Reject objects that lie outside the node they are inserted into, instead of attaching them
    /// to that node anyway.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

impl Config {
    pub const fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            strict: false,
        }
    }

    pub const fn strict(self, strict: bool) -> Self {
        Self { strict, ..self }
    }
}
