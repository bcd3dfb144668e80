use crate::Position;

/// Identifier of a grammar rule tracked by [`Rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(u8);

impl RuleId {
    /// Number of distinct rule ids a [`Rules`] set can track.
    pub const CAPACITY: u8 = 64;

    /// Creates a rule id.
    ///
    /// # Panics
    ///
    /// Panics if `id >= RuleId::CAPACITY`. Declare ids as `const` items so
    /// the check happens at compile time.
    pub const fn new(id: u8) -> Self {
        assert!(id < Self::CAPACITY, "rule id out of range");
        Self(id)
    }

    /// Returns the numeric id.
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Left-recursion guard for recursive grammars.
///
/// A bitset of the rules entered at one offset. A rule that may recurse
/// into itself without consuming input asks [`is_loop`](Self::is_loop) on
/// entry and fails when it returns `true`. The set is cleared as soon as a
/// rule is entered at a different offset, or when a position is committed
/// through [`Position::seek`].
///
/// One `Rules` value is created per top-level parse and threaded by
/// reference through the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    entered: u64,
    offset: usize,
}

impl Rules {
    /// Creates an empty guard.
    pub fn new() -> Self {
        Self { entered: 0, offset: 0 }
    }

    /// Marks `rule` as entered at `pos`. Returns `true` if it was already
    /// entered at that offset, meaning the grammar is about to recurse
    /// without consuming input.
    pub fn is_loop(&mut self, rule: RuleId, pos: &Position) -> bool {
        if pos.offset != self.offset {
            self.reset_at(pos.offset);
        }
        let bit = 1u64 << rule.get();
        let seen = self.entered & bit != 0;
        self.entered |= bit;
        seen
    }

    /// Returns `true` if `rule` is currently marked.
    pub fn contains(&self, rule: RuleId) -> bool {
        self.entered & (1u64 << rule.get()) != 0
    }

    /// Clears every mark.
    pub fn reset(&mut self) {
        self.entered = 0;
    }

    fn reset_at(&mut self, offset: usize) {
        self.entered = 0;
        self.offset = offset;
    }

    /// Returns `true` if no rule is marked.
    pub fn is_empty(&self) -> bool {
        self.entered == 0
    }
}

impl Position {
    /// Commits `next` like [`Position::commit`] and, when input was
    /// consumed, resets `rules`.
    pub fn seek(&mut self, next: Position, rules: &mut Rules) -> bool {
        if self.commit(next) {
            rules.reset_at(self.offset);
            true
        } else {
            false
        }
    }
}
