//! 台词脚本解析器
//!
//! 将上传的纯文本脚本解析为结构化的台词记录
//!
//! 脚本格式：每个物理行一句台词 `角色名: 台词内容`，空行忽略

/// 一条成功解析的台词
///
/// 不变量:
/// - `ordinal` 为 1 起始的处理序号，每个非空行占用一个（格式错误的行也占用）
/// - `line_no` 为源文件中的 1 起始物理行号
/// - `text` 保留原始台词（未清理），用于前端展示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    pub ordinal: usize,
    pub line_no: usize,
    pub character: String,
    pub text: String,
}

/// 格式错误的行（缺少冒号、角色名或台词为空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub line_no: usize,
    pub raw: String,
}

/// 脚本解析结果
///
/// `records` 与 `format_errors` 均保持源文件顺序；
/// `lines_seen` 等于非空行总数（records.len() + format_errors.len()）
#[derive(Debug, Clone, Default)]
pub struct ParsedScript {
    pub records: Vec<DialogueLine>,
    pub format_errors: Vec<FormatError>,
    pub lines_seen: usize,
}

/// 解析脚本文本
///
/// 解析策略：
/// 1. 按物理行分割（兼容 \n 与 \r\n）
/// 2. 每行 trim，空行跳过（不计入处理数，也不算错误）
/// 3. 按第一个冒号切分，两侧 trim 后都必须非空，否则记录格式错误并继续
pub fn parse_script(text: &str) -> ParsedScript {
    let mut parsed = ParsedScript::default();

    for (i, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let line_no = i + 1;
        parsed.lines_seen += 1;
        let ordinal = parsed.lines_seen;

        let Some((name_part, text_part)) = line.split_once(':') else {
            parsed.format_errors.push(FormatError {
                line_no,
                raw: line.to_string(),
            });
            continue;
        };

        let character = name_part.trim();
        let dialogue = text_part.trim();
        if character.is_empty() || dialogue.is_empty() {
            parsed.format_errors.push(FormatError {
                line_no,
                raw: line.to_string(),
            });
            continue;
        }

        parsed.records.push(DialogueLine {
            ordinal,
            line_no,
            character: character.to_string(),
            text: dialogue.to_string(),
        });
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_line_produces_one_record() {
        let parsed = parse_script("Krishna: Hello there.");
        assert_eq!(parsed.lines_seen, 1);
        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.format_errors.is_empty());

        let record = &parsed.records[0];
        assert_eq!(record.ordinal, 1);
        assert_eq!(record.line_no, 1);
        assert_eq!(record.character, "Krishna");
        assert_eq!(record.text, "Hello there.");
    }

    #[test]
    fn test_blank_lines_skipped_not_counted() {
        let parsed = parse_script("\nKrishna: Hi.\n\n\nRadha: Hello.\n");
        assert_eq!(parsed.lines_seen, 2);
        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.format_errors.is_empty());
        // 行号对应源文件，序号对应处理顺序
        assert_eq!(parsed.records[0].line_no, 2);
        assert_eq!(parsed.records[0].ordinal, 1);
        assert_eq!(parsed.records[1].line_no, 5);
        assert_eq!(parsed.records[1].ordinal, 2);
    }

    #[test]
    fn test_missing_colon_is_format_error() {
        let parsed = parse_script("just some stage direction");
        assert_eq!(parsed.lines_seen, 1);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.format_errors.len(), 1);
        assert_eq!(parsed.format_errors[0].line_no, 1);
        assert_eq!(parsed.format_errors[0].raw, "just some stage direction");
    }

    #[test]
    fn test_empty_name_or_dialogue_is_format_error() {
        let parsed = parse_script(": no speaker\nKrishna:   \n  : ");
        assert_eq!(parsed.lines_seen, 3);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.format_errors.len(), 3);
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let parsed = parse_script("Narrator: And then he said: run!");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].character, "Narrator");
        assert_eq!(parsed.records[0].text, "And then he said: run!");
    }

    #[test]
    fn test_failed_line_still_consumes_ordinal() {
        let script = "Krishna: First line.\nno colon here\nRadha: Third line.";
        let parsed = parse_script(script);

        assert_eq!(parsed.lines_seen, 3);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.format_errors.len(), 1);
        // 第二行虽然失败，仍占用序号 2
        assert_eq!(parsed.records[0].ordinal, 1);
        assert_eq!(parsed.records[1].ordinal, 3);
        assert_eq!(parsed.format_errors[0].line_no, 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_script("Krishna: One.\r\nRadha: Two.\r\n");
        assert_eq!(parsed.lines_seen, 2);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].text, "Two.");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let parsed = parse_script("   Krishna  :   spaced out   ");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].character, "Krishna");
        assert_eq!(parsed.records[0].text, "spaced out");
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_script("");
        assert_eq!(parsed.lines_seen, 0);
        assert!(parsed.records.is_empty());
        assert!(parsed.format_errors.is_empty());
    }
}
