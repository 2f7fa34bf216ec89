// src/application/ports/mod.rs
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type ImageStorePort = dyn storage::ImageStore;
pub type SlugCodecPort = dyn util::SlugCodec;
