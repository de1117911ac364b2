use core::fmt;
use std::collections::BTreeMap;

use common_math::{format_rational, Rational};

use crate::LendingPool;

/// Single-line rendering of the pool state:
/// `{Reserves: {T: 100}, Debts: {T: {A: 50}}, Minted: {..}, Prices: {..}, LastReverted: false}`.
pub struct StateDisplay<'a> {
    pool: &'a LendingPool,
    precise: bool,
    last_reverted: bool,
}

impl LendingPool {
    /// Renders the state with exact fractions when `precise`, six significant
    /// digits otherwise.
    pub fn display(&self, precise: bool) -> StateDisplay<'_> {
        self.display_with_revert_flag(precise, self.last_reverted())
    }

    /// Same as [`LendingPool::display`], reporting a revert indicator kept by a
    /// wrapping layer instead of the pool's own.
    pub fn display_with_revert_flag(&self, precise: bool, last_reverted: bool) -> StateDisplay<'_> {
        StateDisplay {
            pool: self,
            precise,
            last_reverted,
        }
    }
}

impl fmt::Display for StateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let storage = self.pool.storage();

        f.write_str("{Reserves: ")?;
        write_map(
            f,
            storage.markets.iter().map(|(token, m)| (token, &m.reserve)),
            self.precise,
        )?;
        f.write_str(", Debts: ")?;
        write_nested_map(
            f,
            storage.markets.iter().map(|(token, m)| (token, &m.debts)),
            self.precise,
        )?;
        f.write_str(", Minted: ")?;
        write_nested_map(
            f,
            storage.markets.iter().map(|(token, m)| (token, &m.credits)),
            self.precise,
        )?;
        f.write_str(", Prices: ")?;
        write_map(f, storage.prices.iter(), self.precise)?;
        write!(f, ", LastReverted: {}}}", self.last_reverted)
    }
}

/// Writes `{k: v, ...}` with every value rendered by [`format_rational`].
pub fn write_map<'v, K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (K, &'v Rational)>,
    precise: bool,
) -> fmt::Result {
    f.write_str("{")?;
    for (index, (key, value)) in entries.enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", key, format_rational(value, precise))?;
    }
    f.write_str("}")
}

/// Writes `{outer: {inner: v, ...}, ...}`.
pub fn write_nested_map<'v, K, I>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (K, &'v BTreeMap<I, Rational>)>,
    precise: bool,
) -> fmt::Result
where
    K: fmt::Display,
    I: fmt::Display + 'v,
{
    f.write_str("{")?;
    for (index, (key, inner)) in entries.enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: ", key)?;
        write_map(f, inner.iter(), precise)?;
    }
    f.write_str("}")
}
