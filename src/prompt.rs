//! Prompt assembly for the completion provider.

use crate::models::QueryOptions;

/// Build the generation prompt. Pure function of its inputs; the option
/// clauses always come out in the same order (author bio first) no matter
/// how the form listed them.
pub fn build_prompt(title: &str, options: &QueryOptions, word_count: &str) -> String {
    let mut prompt = format!("请提供课文《{title}》的");
    if options.author_bio {
        prompt.push_str("作者简介，");
    }
    if options.writing_background {
        prompt.push_str("写作背景，");
    }
    prompt.push_str(&format!(
        "要求总字数约为{word_count}字，语言通俗易懂，结构清晰，不要包含任何格式符号、序号、特殊字符。"
    ));
    prompt
}
