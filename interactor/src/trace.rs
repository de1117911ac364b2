//! Parser for line-oriented transaction traces.
//!
//! ```text
//! # comment
//! A:faucet(100:T)
//! A:deposit(100:T)
//! A:liquidate(10:T, B, U)
//! set_price(T, 3/2)
//! accrue_interest
//! ```

use core::fmt;

use common_math::{parse_rational, ParseRationalError, Rational};
use ledger::LedgerCommand;
use lending_pool::{AccountId, Command, LiquidationCall, TokenId};

/// A parsed trace line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// 1-based line number in the trace.
    pub line: usize,
    pub text: String,
    pub command: LedgerCommand,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceError {
    pub line: usize,
    pub kind: TraceErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceErrorKind {
    UnknownMethod(String),
    /// An address-scoped method was called without `address:` prefix, or the reverse.
    MisplacedAddress(String),
    WrongArity {
        method: String,
        expected: usize,
        found: usize,
    },
    /// Expected `amount:token`.
    MissingToken(String),
    InvalidNumber(ParseRationalError),
    Malformed(String),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl fmt::Display for TraceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceErrorKind::UnknownMethod(method) => write!(f, "unknown method `{}`", method),
            TraceErrorKind::MisplacedAddress(method) => {
                write!(f, "method `{}` used with the wrong address form", method)
            }
            TraceErrorKind::WrongArity {
                method,
                expected,
                found,
            } => write!(
                f,
                "method `{}` takes {} argument(s), got {}",
                method, expected, found
            ),
            TraceErrorKind::MissingToken(arg) => {
                write!(f, "expected `amount:token`, got `{}`", arg)
            }
            TraceErrorKind::InvalidNumber(err) => write!(f, "{}", err),
            TraceErrorKind::Malformed(text) => write!(f, "malformed call `{}`", text),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<ParseRationalError> for TraceErrorKind {
    fn from(err: ParseRationalError) -> Self {
        TraceErrorKind::InvalidNumber(err)
    }
}

/// Parses every non-blank, non-comment line, stopping at the first error.
pub fn parse_trace(input: &str) -> Result<Vec<TraceEntry>, TraceError> {
    entries(input).collect()
}

/// Parses line by line, yielding errors in place so a runner can skip them.
pub fn entries(input: &str) -> impl Iterator<Item = Result<TraceEntry, TraceError>> + '_ {
    input.lines().enumerate().filter_map(|(index, raw)| {
        let line = index + 1;
        parse_line(raw)
            .map_err(|kind| TraceError { line, kind })
            .transpose()
            .map(|parsed| {
                parsed.map(|command| TraceEntry {
                    line,
                    text: raw.trim().to_string(),
                    command,
                })
            })
    })
}

/// Parses one line. Blank and `#` lines yield `None`.
pub fn parse_line(raw: &str) -> Result<Option<LedgerCommand>, TraceErrorKind> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (address, call) = split_address(line);
    let (method, args) = split_call(call)?;

    let command = match address {
        Some("") => return Err(TraceErrorKind::Malformed(line.to_string())),
        Some(address) => parse_account_call(AccountId::from(address), method, &args)?,
        None => parse_global_call(method, &args)?,
    };
    Ok(Some(command))
}

/// `A:deposit(1:T)` carries an address prefix; the `:` inside the
/// parentheses does not count.
fn split_address(line: &str) -> (Option<&str>, &str) {
    let paren = line.find('(').unwrap_or(line.len());
    match line.find(':') {
        Some(colon) if colon < paren => (Some(line[..colon].trim()), line[colon + 1..].trim()),
        _ => (None, line),
    }
}

fn split_call(call: &str) -> Result<(&str, Vec<&str>), TraceErrorKind> {
    let Some(open) = call.find('(') else {
        return Ok((call.trim(), Vec::new()));
    };
    let Some(inner) = call[open + 1..].strip_suffix(')') else {
        return Err(TraceErrorKind::Malformed(call.to_string()));
    };

    let method = call[..open].trim();
    let args = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };
    if method.is_empty() || args.iter().any(|arg| arg.is_empty()) {
        return Err(TraceErrorKind::Malformed(call.to_string()));
    }
    Ok((method, args))
}

fn parse_account_call(
    account: AccountId,
    method: &str,
    args: &[&str],
) -> Result<LedgerCommand, TraceErrorKind> {
    match method {
        "faucet" | "deposit" | "borrow" | "repay" | "redeem" => {
            expect_arity(method, args, 1)?;
            let (amount, token) = parse_amount_token(args[0])?;
            Ok(match method {
                "faucet" => LedgerCommand::Faucet {
                    account,
                    amount,
                    token,
                },
                "deposit" => Command::Deposit {
                    account,
                    amount,
                    token,
                }
                .into(),
                "borrow" => Command::Borrow {
                    account,
                    amount,
                    token,
                }
                .into(),
                "repay" => Command::Repay {
                    account,
                    amount,
                    token,
                }
                .into(),
                _ => Command::Redeem {
                    account,
                    amount,
                    token,
                }
                .into(),
            })
        }
        "liquidate" => {
            expect_arity(method, args, 3)?;
            let (amount, token_debt) = parse_amount_token(args[0])?;
            Ok(Command::Liquidate(LiquidationCall {
                liquidator: account,
                amount,
                token_debt,
                debtor: AccountId::from(args[1]),
                token_minted: TokenId::from(args[2]),
            })
            .into())
        }
        _ if is_global_method(method) => Err(TraceErrorKind::MisplacedAddress(method.to_string())),
        _ => Err(TraceErrorKind::UnknownMethod(method.to_string())),
    }
}

fn parse_global_call(method: &str, args: &[&str]) -> Result<LedgerCommand, TraceErrorKind> {
    let command = match method {
        "accrue_interest" => {
            expect_arity(method, args, 0)?;
            Command::AccrueInterest
        }
        "set_price" => {
            expect_arity(method, args, 2)?;
            Command::SetPrice {
                token: TokenId::from(args[0]),
                price: parse_rational(args[1])?,
            }
        }
        "set_liq_threshold" => {
            expect_arity(method, args, 1)?;
            Command::SetLiqThreshold(parse_rational(args[0])?)
        }
        "set_liq_reward_factor" => {
            expect_arity(method, args, 1)?;
            Command::SetLiqRewardFactor(parse_rational(args[0])?)
        }
        "set_interest_rate" => {
            expect_arity(method, args, 2)?;
            Command::SetInterestRate {
                alpha: parse_rational(args[0])?,
                beta: parse_rational(args[1])?,
            }
        }
        "faucet" | "deposit" | "borrow" | "repay" | "redeem" | "liquidate" => {
            return Err(TraceErrorKind::MisplacedAddress(method.to_string()))
        }
        _ => return Err(TraceErrorKind::UnknownMethod(method.to_string())),
    };
    Ok(command.into())
}

fn is_global_method(method: &str) -> bool {
    matches!(
        method,
        "accrue_interest"
            | "set_price"
            | "set_liq_threshold"
            | "set_liq_reward_factor"
            | "set_interest_rate"
    )
}

fn expect_arity(method: &str, args: &[&str], expected: usize) -> Result<(), TraceErrorKind> {
    if args.len() != expected {
        return Err(TraceErrorKind::WrongArity {
            method: method.to_string(),
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn parse_amount_token(arg: &str) -> Result<(Rational, TokenId), TraceErrorKind> {
    let Some((amount, token)) = arg.split_once(':') else {
        return Err(TraceErrorKind::MissingToken(arg.to_string()));
    };
    let token = token.trim();
    if token.is_empty() {
        return Err(TraceErrorKind::MissingToken(arg.to_string()));
    }
    Ok((parse_rational(amount)?, TokenId::from(token)))
}
