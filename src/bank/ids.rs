use super::AccountId;

/// Hands out account ids for one registry: monotonically increasing, starting
/// at 1, never reused.
#[derive(Debug)]
pub struct AccountIds {
    next: AccountId,
}

impl AccountIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> AccountId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for AccountIds {
    fn default() -> Self {
        Self::new()
    }
}
