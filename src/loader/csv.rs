use crate::errors::LoadTrendError;

/// One parsed CSV row and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Split report content into rows of fields.
///
/// Handles double-quoted fields (with `""` escapes and embedded separators or
/// newlines), `\r\n` line endings and a leading UTF-8 BOM. Blank lines are skipped.
pub fn parse_rows(content: &str) -> Result<Vec<Row>, LoadTrendError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut rows = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut was_quoted = false;
    let mut line = 1usize;
    let mut row_start = 1usize;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.trim().is_empty() && !was_quoted => {
                field.clear();
                in_quotes = true;
                was_quoted = true;
            }
            '"' => {
                return Err(LoadTrendError::parse(line, "unexpected quote inside unquoted field"));
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                was_quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                was_quoted = false;
                push_row(&mut rows, std::mem::take(&mut fields), row_start);
                line += 1;
                row_start = line;
            }
            _ if was_quoted => {
                if !c.is_whitespace() {
                    return Err(LoadTrendError::parse(line, "unexpected data after closing quote"));
                }
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(LoadTrendError::parse(row_start, "unterminated quoted field"));
    }

    if !field.is_empty() || !fields.is_empty() || was_quoted {
        fields.push(field);
        push_row(&mut rows, fields, row_start);
    }

    Ok(rows)
}

fn push_row(rows: &mut Vec<Row>, fields: Vec<String>, line: usize) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        rows.push(Row { line, fields });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(rows: &[Row]) -> Vec<Vec<&str>> {
        rows.iter()
            .map(|r| r.fields.iter().map(|f| f.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_parse_plain_rows() {
        let rows = parse_rows("a,b,c\n1,2,3\n").unwrap();
        assert_eq!(fields(&rows), vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let rows = parse_rows("a,b\n1,2").unwrap();
        assert_eq!(fields(&rows), vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_crlf_and_bom() {
        let rows = parse_rows("\u{feff}a,b\r\n1,2\r\n").unwrap();
        assert_eq!(fields(&rows), vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let rows = parse_rows("label,n\n\"GET /a, /b\",1\n\"say \"\"hi\"\"\",2\n").unwrap();
        assert_eq!(rows[1].fields[0], "GET /a, /b");
        assert_eq!(rows[2].fields[0], "say \"hi\"");
    }

    #[test]
    fn test_parse_quoted_newline_keeps_line_numbers() {
        let rows = parse_rows("a,b\n\"multi\nline\",1\nx,2\n").unwrap();
        assert_eq!(rows[1].fields[0], "multi\nline");
        assert_eq!(rows[1].line, 2);
        assert_eq!(rows[2].line, 4);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let rows = parse_rows("a,b\n\n1,2\n   \n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn test_parse_keeps_empty_fields() {
        let rows = parse_rows("a,,c\n").unwrap();
        assert_eq!(fields(&rows), vec![vec!["a", "", "c"]]);
    }

    #[test]
    fn test_unterminated_quote_fails() {
        let err = parse_rows("a,b\n\"open,1\n").unwrap_err();
        assert!(matches!(err, LoadTrendError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_stray_quote_fails() {
        assert!(parse_rows("a,b\nab\"c,1\n").is_err());
    }

    #[test]
    fn test_empty_content_has_no_rows() {
        assert!(parse_rows("").unwrap().is_empty());
    }
}
