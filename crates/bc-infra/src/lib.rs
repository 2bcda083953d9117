pub mod kv;
pub mod time;

pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use time::{CooldownTimer, SystemClock};
