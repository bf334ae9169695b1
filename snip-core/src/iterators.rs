//! Collision-free loop counter names.

use tracing::trace;

/// Symbols names are built from, in allocation order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Cursor position of `i`, the first name handed out.
pub const START_POSITION: usize = 8;

/// Allocates names for nested loop counters.
///
/// Names never repeat between resets: `i` through `z`, then `aa` through
/// `zz`, then `aaa`, and so on. Allocation is pure counting; the generated
/// code is never inspected for existing names.
///
/// Each generation session owns its allocator. Call [`reset`](Self::reset)
/// between unrelated code units to start again from `i`.
///
/// ```
/// use snipgen_core::IteratorNames;
///
/// let mut names = IteratorNames::new();
/// assert_eq!(names.next_name(), "i");
/// assert_eq!(names.next_name(), "j");
///
/// names.reset();
/// assert_eq!(names.next_name(), "i");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IteratorNames {
    position: usize,
}

impl IteratorNames {
    pub fn new() -> Self {
        Self {
            position: START_POSITION,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the name for the current position and advance.
    pub fn next_name(&mut self) -> String {
        let name = name_at(self.position);
        self.position += 1;
        name
    }

    /// Move the cursor back to `i`.
    pub fn reset(&mut self) {
        trace!(issued = self.position - START_POSITION, "resetting iterator names");
        self.position = START_POSITION;
    }
}

impl Default for IteratorNames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for IteratorNames {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_name())
    }
}

/// Name for an arbitrary cursor position.
///
/// The letter is `position % 26`, repeated once per full pass over the
/// alphabet plus one.
pub fn name_at(position: usize) -> String {
    let symbol = ALPHABET[position % ALPHABET.len()];
    let repeat = position / ALPHABET.len() + 1;
    std::iter::repeat_n(symbol, repeat).collect()
}
