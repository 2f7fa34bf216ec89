// src/application/ports/util.rs
pub trait SlugCodec: Send + Sync {
    /// URL-safe, lowercase form of `input`. Deterministic.
    fn slugify(&self, input: &str) -> String;
    fn encode_sequence(&self, sequence: u64, prefix: &str) -> String;
}
