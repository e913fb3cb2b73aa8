use textbook_background_server::models::QueryOptions;
use textbook_background_server::prompt::build_prompt;

#[test]
fn prompt_is_deterministic() {
    let options = QueryOptions {
        author_bio: true,
        writing_background: true,
    };
    let first = build_prompt("背影", &options, "200");
    let second = build_prompt("背影", &options, "200");
    assert_eq!(first, second);
}

#[test]
fn prompt_follows_the_full_template() {
    let options = QueryOptions {
        author_bio: true,
        writing_background: true,
    };
    assert_eq!(
        build_prompt("背影", &options, "200"),
        "请提供课文《背影》的作者简介，写作背景，\
         要求总字数约为200字，语言通俗易懂，结构清晰，不要包含任何格式符号、序号、特殊字符。"
    );
}

#[test]
fn option_clause_order_is_fixed() {
    // The form may post the checkboxes in any order; the clause order
    // must always be author bio first.
    let reversed = QueryOptions::from_values(["写作背景", "作者简介"]);
    let prompt = build_prompt("背影", &reversed, "300");
    let bio_pos = prompt.find("作者简介").unwrap();
    let background_pos = prompt.find("写作背景").unwrap();
    assert!(bio_pos < background_pos);
}

#[test]
fn single_option_omits_the_other_clause() {
    let options = QueryOptions {
        author_bio: false,
        writing_background: true,
    };
    let prompt = build_prompt("春", &options, "150");
    assert!(!prompt.contains("作者简介"));
    assert!(prompt.contains("写作背景"));
    assert!(prompt.ends_with("不要包含任何格式符号、序号、特殊字符。"));
}

#[test]
fn unknown_option_values_are_ignored() {
    let options = QueryOptions::from_values(["作者简介", "不存在的选项"]);
    assert!(options.author_bio);
    assert!(!options.writing_background);
}
