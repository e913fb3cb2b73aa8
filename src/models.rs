pub const OPTION_AUTHOR_BIO: &str = "作者简介";
pub const OPTION_WRITING_BACKGROUND: &str = "写作背景";

/// Which background sections the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub author_bio: bool,
    pub writing_background: bool,
}

impl QueryOptions {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = QueryOptions::default();
        for value in values {
            match value.as_ref() {
                OPTION_AUTHOR_BIO => options.author_bio = true,
                OPTION_WRITING_BACKGROUND => options.writing_background = true,
                other => log::warn!("ignoring unknown query option: {other}"),
            }
        }
        options
    }

    pub fn is_empty(&self) -> bool {
        !self.author_bio && !self.writing_background
    }
}

/// The submitted form, assembled from the urlencoded body. The `options`
/// checkbox key repeats, so the body is parsed as raw pairs first.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub title: String,
    pub options: QueryOptions,
    pub word_count: String,
    pub font_size: String,
    pub line_height: String,
}

impl FormInput {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut input = FormInput::default();
        let mut option_values = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "title" => input.title = value.trim().to_string(),
                "options" => option_values.push(value),
                "word_count" => input.word_count = value.trim().to_string(),
                "font_size" => input.font_size = value.trim().to_string(),
                "line_height" => input.line_height = value.trim().to_string(),
                _ => {}
            }
        }
        input.options = QueryOptions::from_values(&option_values);
        input
    }

    /// All five fields present, at least one option ticked, numeric fields
    /// actually numeric.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.options.is_empty()
            && !self.word_count.is_empty()
            && self.word_count.parse::<u32>().is_ok()
            && self.font_size.parse::<f32>().is_ok()
            && self.line_height.parse::<f32>().is_ok()
    }

    pub fn font_size_pt(&self) -> f32 {
        self.font_size.parse().unwrap_or(12.0)
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_height.parse().unwrap_or(1.5)
    }
}
