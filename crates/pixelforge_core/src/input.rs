use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Opaque identifier of a physical key, e.g. `"KeyW"`, `"ArrowUp"`,
/// `"Space"`.
///
/// Codes are only ever compared for equality; unknown codes are tracked like
/// any other and simply never match a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputCode(String);

impl InputCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InputCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for InputCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for InputCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of input codes that are currently held down.
///
/// The host (or the engine's input subscription) drives this structure by
/// feeding it press/release events; the simulation only ever queries it.
#[derive(Debug, Default, Clone)]
pub struct InputTracker {
    held: HashSet<InputCode>,
}

impl InputTracker {
    /// Creates a fresh, empty tracker.
    pub fn new() -> Self {
        Default::default()
    }

    /// Records a key press.  Pressing an already-held key changes nothing.
    pub fn on_press(&mut self, code: impl Into<InputCode>) {
        self.held.insert(code.into());
    }

    /// Records a key release.  Releasing a key that is not held is a no-op.
    pub fn on_release(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Returns true if the given code is currently held down.
    #[inline]
    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    /// Forget every held code.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Number of codes currently held.
    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
