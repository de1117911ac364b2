pub mod borrow;
pub mod deposit;
pub mod liquidation;
pub mod redeem;
pub mod repay;
pub mod update;
