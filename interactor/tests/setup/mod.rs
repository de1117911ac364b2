use ledger::Ledger;
use lending_pool::{ratio, to_rational, AccountId, LendingPool, Rational, TokenId};
use lp_interact::{run_trace, RunSummary, Target};

pub fn q(value: u64) -> Rational {
    to_rational(value)
}

pub fn frac(numerator: u64, denominator: u64) -> Rational {
    ratio(numerator, denominator)
}

pub fn account(name: &str) -> AccountId {
    AccountId::from(name)
}

pub fn token(name: &str) -> TokenId {
    TokenId::from(name)
}

pub struct TraceTestState {
    pub target: Target,
    pub output: String,
}

impl TraceTestState {
    pub fn ledger() -> Self {
        TraceTestState {
            target: Target::Ledger(Ledger::new()),
            output: String::new(),
        }
    }

    pub fn pool() -> Self {
        TraceTestState {
            target: Target::Pool(LendingPool::new()),
            output: String::new(),
        }
    }

    pub fn run(&mut self, trace: &str, precise: bool) -> RunSummary {
        let mut buffer = Vec::new();
        let summary = run_trace(trace, &mut self.target, precise, &mut buffer).unwrap();
        self.output.push_str(&String::from_utf8(buffer).unwrap());
        summary
    }

    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }

    pub fn pool_state(&self) -> &LendingPool {
        self.target.pool()
    }
}
