/// Splits raw source text into segments, the unit of execution.
///
/// The splitting character is `;` and splits happen only at the top
/// level: not inside parentheses and not inside double-quoted strings,
/// where `\` escapes the following byte. Each physical line contributes
/// at least one segment; carriage returns are stripped.
pub fn split(source: &str) -> Vec<String> {
    let mut segments = vec![];
    for line in source.lines() {
        split_line(line, &mut segments);
    }
    segments
}

fn split_line(line: &str, segments: &mut Vec<String>) {
    let mut segment = String::new();
    let mut depth = 0;
    let mut in_str = false;
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            continue;
        }
        if in_str {
            if ch == '\\' {
                segment.push(ch);
                if let Some(escaped) = chars.next() {
                    segment.push(escaped);
                }
                continue;
            }
            if ch == '"' {
                in_str = false;
            }
            segment.push(ch);
            continue;
        }
        match ch {
            '"' => {
                in_str = true;
                segment.push(ch);
            }
            '(' => {
                depth += 1;
                segment.push(ch);
            }
            ')' => {
                if depth > 0 {
                    depth -= 1;
                }
                segment.push(ch);
            }
            ';' if depth == 0 => {
                segments.push(std::mem::take(&mut segment));
            }
            _ => segment.push(ch),
        }
    }
    segments.push(segment);
}
