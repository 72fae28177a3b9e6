pub mod client;
pub mod seed;

pub use client::{MemoryStore, StoreError};
pub use seed::{load_seed_file, sample_seed};
