pub const ALICE: &str = "A";
pub const BOB: &str = "B";
pub const CAROL: &str = "C";

pub const ETH: &str = "ETH";
pub const USDC: &str = "USDC";

pub const SIMULATION_ACCOUNTS: [&str; 4] = ["A", "B", "C", "D"];
pub const SIMULATION_TOKENS: [&str; 3] = ["T", "U", "V"];
pub const SIMULATION_STEPS: usize = 300;
