#[cfg(feature = "integration-tests")]
pub mod test_utils;
