/// Per-kind id counter. Ids start at 1, only grow, and are never handed out twice,
/// even after the record that held one is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue after the highest id already in use (`max + 1`, or 1 when empty).
    /// `None` when the highest id leaves no room for another.
    pub fn resume_from<I>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let next = match ids.into_iter().max() {
            Some(max) => max.checked_add(1)?,
            None => 1,
        };
        Some(Self { next })
    }

    /// The id the next `claim` will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// `None` once the id space is used up; the counter is left unchanged.
    pub fn claim(&mut self) -> Option<u64> {
        let id = self.next;
        self.next = self.next.checked_add(1)?;
        Some(id)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
