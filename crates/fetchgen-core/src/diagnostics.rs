use std::fmt;

/// A single non-fatal finding made while mapping schemas. Unrecognized
/// shapes degrade to `unknown` in the output and land here instead of
/// failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the finding was made, e.g. `getProduct: response 200`.
    pub origin: String,
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.detail)
    }
}

/// Ordered collector of diagnostics. The mapper and synthesizer push into
/// it; callers decide how to surface the entries.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, origin: impl Into<String>, detail: impl Into<String>) {
        self.entries.push(Diagnostic {
            origin: origin.into(),
            detail: detail.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}
