pub mod articles;
pub mod serde_time;

pub use articles::ArticleExportDto;
