use common_math::Rational;
use common_structs::{AccountId, TokenId};

use crate::storage::{Market, PoolStorage, Slot};

enum JournalEntry {
    MarketCreated(TokenId),
    Entry { slot: Slot, prior: Option<Rational> },
}

/// A tentative set of writes against [`PoolStorage`].
///
/// Every write first records the prior value of the entry it touches (or the
/// fact that the entry was absent). Dropping the transaction without calling
/// [`Transaction::commit`] restores those values in reverse order, so a reverted
/// operation leaves the storage identical to what it was, missing keys included.
pub struct Transaction<'a> {
    storage: &'a mut PoolStorage,
    journal: Vec<JournalEntry>,
    committed: bool,
}

impl<'a> Transaction<'a> {
    pub fn new(storage: &'a mut PoolStorage) -> Self {
        Transaction {
            storage,
            journal: Vec::new(),
            committed: false,
        }
    }

    /// Read access to the tentative state, used by post-condition checks.
    pub fn storage(&self) -> &PoolStorage {
        self.storage
    }

    /// Lists `token` if it has no market yet. Returns whether it was created.
    pub fn ensure_market(&mut self, token: &TokenId) -> bool {
        if self.storage.is_listed(token) {
            return false;
        }
        self.storage.markets.insert(token.clone(), Market::default());
        self.journal.push(JournalEntry::MarketCreated(token.clone()));
        true
    }

    pub fn add_reserve(&mut self, token: &TokenId, amount: &Rational) {
        let value = self.storage.reserve(token) + amount;
        self.set(Slot::Reserve(token.clone()), value);
    }

    pub fn sub_reserve(&mut self, token: &TokenId, amount: &Rational) {
        let value = self.storage.reserve(token) - amount;
        self.set(Slot::Reserve(token.clone()), value);
    }

    pub fn add_debt(&mut self, token: &TokenId, account: &AccountId, amount: &Rational) {
        let value = self.storage.debt(token, account) + amount;
        self.set(Slot::Debt(token.clone(), account.clone()), value);
    }

    pub fn sub_debt(&mut self, token: &TokenId, account: &AccountId, amount: &Rational) {
        let value = self.storage.debt(token, account) - amount;
        self.set(Slot::Debt(token.clone(), account.clone()), value);
    }

    pub fn add_credit(&mut self, token: &TokenId, account: &AccountId, amount: &Rational) {
        let value = self.storage.credit(token, account) + amount;
        self.set(Slot::Credit(token.clone(), account.clone()), value);
    }

    pub fn sub_credit(&mut self, token: &TokenId, account: &AccountId, amount: &Rational) {
        let value = self.storage.credit(token, account) - amount;
        self.set(Slot::Credit(token.clone(), account.clone()), value);
    }

    #[cfg(test)]
    fn touched(&self) -> usize {
        self.journal.len()
    }

    /// Keeps every write.
    pub fn commit(mut self) {
        self.committed = true;
        self.journal.clear();
    }

    /// Undoes every write. Equivalent to dropping the transaction.
    pub fn rollback(self) {}

    fn set(&mut self, slot: Slot, value: Rational) {
        let prior = self.storage.read(&slot);
        self.storage.write(&slot, Some(value));
        self.journal.push(JournalEntry::Entry { slot, prior });
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        while let Some(entry) = self.journal.pop() {
            match entry {
                JournalEntry::MarketCreated(token) => {
                    self.storage.markets.remove(&token);
                }
                JournalEntry::Entry { slot, prior } => self.storage.write(&slot, prior),
            }
        }
    }
}
