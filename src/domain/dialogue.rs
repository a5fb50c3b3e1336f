//! 台词清理
//!
//! 在送入语音合成之前移除导演备注并规整空白
//!
//! 导演备注为台词中以 `[` 和最近的后续 `]` 包裹的非朗读标注，
//! 例如 `[whispering]`、`[pause]`

/// 清理一句台词
///
/// 清理策略：
/// 1. 移除每个 `[...]` 片段（非贪婪，一行可有多个，不支持嵌套）
/// 2. 连续空白折叠为单个空格
/// 3. 两端 trim
///
/// 未闭合的 `[` 按字面保留。清理是幂等的。
pub fn clean_dialogue(text: &str) -> String {
    let stripped = strip_director_notes(text);
    collapse_whitespace(&stripped)
}

/// 移除所有 `[...]` 导演备注片段
fn strip_director_notes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        match rest[open..].find(']') {
            Some(close_offset) => {
                result.push_str(&rest[..open]);
                rest = &rest[open + close_offset + 1..];
            }
            None => {
                // 没有闭合的 ]，剩余部分原样保留
                break;
            }
        }
    }
    result.push_str(rest);
    result
}

/// 空白折叠：任意连续空白变为单个空格，两端去除
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(clean_dialogue("Hello there friend"), "Hello there friend");
    }

    #[test]
    fn test_removes_single_note() {
        assert_eq!(clean_dialogue("Hello [whispering] friend"), "Hello friend");
    }

    #[test]
    fn test_removes_multiple_notes() {
        assert_eq!(
            clean_dialogue("Hi [whisper] there [pause] friend"),
            "Hi there friend"
        );
    }

    #[test]
    fn test_note_only_yields_empty() {
        assert_eq!(clean_dialogue("[sigh]"), "");
        assert_eq!(clean_dialogue("[sigh] [pause]"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = clean_dialogue("Hi [whisper] there   [pause] friend");
        let twice = clean_dialogue(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_dialogue("  spaced \t out\u{3000} text  "), "spaced out text");
    }

    #[test]
    fn test_unclosed_bracket_kept_literally() {
        assert_eq!(clean_dialogue("Hello [broken note"), "Hello [broken note");
    }

    #[test]
    fn test_nearest_closing_bracket_wins() {
        // 与原工具的非贪婪匹配一致："[a [b]" 整体被移除
        assert_eq!(clean_dialogue("x [a [b] c] y"), "x c] y");
    }

    #[test]
    fn test_adjacent_notes() {
        assert_eq!(clean_dialogue("a[one][two]b"), "ab");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_dialogue(""), "");
    }
}
