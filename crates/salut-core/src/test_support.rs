use std::sync::Mutex;

// Serializes tests that mutate process-wide environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());
