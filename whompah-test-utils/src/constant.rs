pub const TEST_USER_AGENT: &str = "whompah-tests";
