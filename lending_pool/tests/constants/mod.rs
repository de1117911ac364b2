pub const ALICE: &str = "A";
pub const BOB: &str = "B";
pub const CAROL: &str = "C";

pub const TOKEN_T: &str = "T";
pub const TOKEN_U: &str = "U";
pub const UNLISTED_TOKEN: &str = "Z";

pub const SIMULATION_ACCOUNTS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
pub const SIMULATION_TOKENS: [&str; 7] = ["T", "U", "V", "W", "X", "Y", "Z"];
pub const SIMULATION_STEPS: usize = 400;
pub const SIMULATION_SEEDS: [u64; 4] = [7, 42, 1_337, 20_240_601];
