use crate::application::ports::util::SlugCodec;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugCodec;

impl SlugCodec for DefaultSlugCodec {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }

    fn encode_sequence(&self, sequence: u64, prefix: &str) -> String {
        format!("{prefix}{sequence}")
    }
}
