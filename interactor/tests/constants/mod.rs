pub const ALICE: &str = "A";
pub const BOB: &str = "B";
pub const CAROL: &str = "C";

pub const TOKEN_T: &str = "T";
pub const TOKEN_U: &str = "U";

pub const LENDING_TRACE: &str = "\
# A supplies and borrows against T
A:faucet(100:T)
A:deposit(100:T)
A:borrow(50:T)
bogus(1)

B:borrow(1:T)
";

pub const LIQUIDATION_TRACE: &str = "\
A:faucet(100:T)
B:faucet(1000:U)
C:faucet(10:U)
A:deposit(100:T)
B:deposit(1000:U)
A:borrow(60:U)
set_price(U, 4/3)
C:liquidate(10:U, A, T)
";

pub const POOL_CONFIG: &str = r#"
mode = "pool"
precise = true

[pool.risk]
liquidation_threshold = "1/2"
interest_rate_alpha = "0"

[pool.prices]
T = "3/2"
"#;
