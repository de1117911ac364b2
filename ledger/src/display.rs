use core::fmt;

use lending_pool::display::write_nested_map;

use crate::Ledger;

/// Renders `{wallets} | {pool state}` on one line.
pub struct LedgerDisplay<'a> {
    ledger: &'a Ledger,
    precise: bool,
}

impl Ledger {
    pub fn display(&self, precise: bool) -> LedgerDisplay<'_> {
        LedgerDisplay {
            ledger: self,
            precise,
        }
    }
}

impl fmt::Display for LedgerDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested_map(f, self.ledger.wallets.iter(), self.precise)?;
        write!(
            f,
            " | {}",
            self.ledger
                .pool
                .display_with_revert_flag(self.precise, self.ledger.last_reverted)
        )
    }
}
