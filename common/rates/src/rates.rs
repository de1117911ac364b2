//! Rate and ratio formulas of the lending pool.
//!
//! Every function here is pure and works on exact rationals; callers feed
//! in the aggregates they read from pool storage.

use common_math::Rational;
use common_structs::RiskParams;
use num_traits::{One, Zero};

/// Calculates the exchange rate of a token's credit units.
///
/// **Formula**:
/// - If `credit_supply == 0`: `1`.
/// - Otherwise: `(reserve + debt_supply) / credit_supply`.
///
/// # Arguments
/// - `reserve`: Underlying units held by the pool.
/// - `debt_supply`: Sum of every address' debt in the token.
/// - `credit_supply`: Sum of every address' credit in the token.
///
/// # Returns
/// - `Rational`: Underlying value of one credit unit.
pub fn exchange_rate(reserve: &Rational, debt_supply: &Rational, credit_supply: &Rational) -> Rational {
    if credit_supply.is_zero() {
        return Rational::one();
    }
    (reserve + debt_supply) / credit_supply
}

/// Calculates the share of a token's liquidity that is currently lent out.
///
/// **Formula**:
/// - If `debt_supply == 0`: `0`.
/// - Otherwise: `debt_supply / (reserve + debt_supply)`.
///
/// # Arguments
/// - `reserve`: Underlying units held by the pool.
/// - `debt_supply`: Sum of every address' debt in the token.
///
/// # Returns
/// - `Rational`: Utilization in `[0, 1]`.
pub fn utilization(reserve: &Rational, debt_supply: &Rational) -> Rational {
    if debt_supply.is_zero() {
        return Rational::zero();
    }
    debt_supply / (reserve + debt_supply)
}

/// Calculates the per-accrual interest rate from the linear curve.
///
/// **Formula**: `ir_alpha * utilization + ir_beta`.
pub fn interest_rate(params: &RiskParams, utilization: &Rational) -> Rational {
    &params.ir_alpha * utilization + &params.ir_beta
}

/// Interest owed on `debt` for one accrual at `rate`.
pub fn accrued_interest(debt: &Rational, rate: &Rational) -> Rational {
    debt * rate
}

/// Calculates how many credit units of the seized token a liquidator receives.
///
/// **Formula**:
/// `(amount / xr_minted) * (price_debt / price_minted) * rliq`.
///
/// # Arguments
/// - `amount`: Debt repaid by the liquidator, in underlying units of the debt token.
/// - `xr_minted`: Exchange rate of the seized token.
/// - `price_debt`, `price_minted`: Prices of both tokens.
/// - `rliq`: Liquidation reward factor.
///
/// # Returns
/// - `Rational`: Credit units moved from the debtor to the liquidator.
pub fn liquidation_seized_credit(
    amount: &Rational,
    xr_minted: &Rational,
    price_debt: &Rational,
    price_minted: &Rational,
    rliq: &Rational,
) -> Rational {
    (amount / xr_minted) * (price_debt / price_minted) * rliq
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_math::{ratio, to_rational};

    #[test]
    fn exchange_rate_defaults_to_one_without_credit() {
        let xr = exchange_rate(&to_rational(10), &Rational::zero(), &Rational::zero());
        assert_eq!(xr, Rational::one());
    }

    #[test]
    fn exchange_rate_counts_debt_as_pool_value() {
        let xr = exchange_rate(&to_rational(50), &to_rational(56), &to_rational(100));
        assert_eq!(xr, ratio(106, 100));
    }

    #[test]
    fn utilization_is_zero_without_debt() {
        assert!(utilization(&to_rational(100), &Rational::zero()).is_zero());
        assert_eq!(utilization(&to_rational(50), &to_rational(50)), ratio(1, 2));
    }

    #[test]
    fn interest_rate_follows_linear_curve() {
        let params = RiskParams {
            ir_alpha: ratio(1, 5),
            ..RiskParams::default()
        };
        // 1/5 * 1/2 + 12/100
        assert_eq!(interest_rate(&params, &ratio(1, 2)), ratio(22, 100));
    }

    #[test]
    fn seized_credit_includes_reward_and_price_ratio() {
        let seized = liquidation_seized_credit(
            &to_rational(10),
            &to_rational(2),
            &to_rational(3),
            &to_rational(1),
            &ratio(11, 10),
        );
        // 10 / 2 * 3 * 1.1
        assert_eq!(seized, ratio(33, 2));
    }
}
