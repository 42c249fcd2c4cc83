//! Entity implementation

use std::fmt;

/// Entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create a new entity with the given ID
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// Monotonic id source for one session
///
/// Ids are handed out in increasing order and never reused until the
/// allocator is explicitly reset.
#[derive(Debug, Clone, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator whose first id is zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next unused id
    pub fn allocate(&mut self) -> Entity {
        let entity = Entity::new(self.next);
        self.next += 1;
        entity
    }

    /// The id the next call to [`allocate`](Self::allocate) will return
    pub fn peek(&self) -> Entity {
        Entity::new(self.next)
    }

    /// Restart numbering at `next` (used on session reset)
    pub fn reset_to(&mut self, next: u32) {
        self.next = next;
    }
}
