// tests/support/mocks/mod.rs
pub mod article_store;
pub mod image_store;
pub mod util;

pub use article_store::InMemoryArticleStore;
pub use image_store::RecordingImageStore;
pub use time::fixed_now;
pub use util::FixedClock;
