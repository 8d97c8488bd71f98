use simple_error::SimpleError;
use std::fmt::Display;

pub fn init_log() {
    // a second start in the same process fails, keep the first logger
    if let Ok(logger) = flexi_logger::Logger::try_with_env_or_str("debug") {
        let _ = logger.log_to_stdout().start();
    }
}

pub fn to_simple(context: &str, e: impl Display) -> SimpleError {
    SimpleError::new(format!("{}: {}", context, e))
}
