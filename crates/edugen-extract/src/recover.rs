//! The ordered fallback chain for coercing raw model text into JSON.

use serde_json::Value;

/// Which stage of the fallback chain produced a parse.
///
/// `Raw` means no stage succeeded and the caller only has the original
/// text. The tag is intended for diagnostic logging, not control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryMethod {
    /// The trimmed text parsed as-is.
    Direct,
    /// The content of the first markdown code fence parsed.
    Fence,
    /// Parsing succeeded after comment/trailing-comma/control cleanup.
    Cleanup,
    /// Parsing succeeded on a brace-balanced substring.
    BraceScan,
    /// Nothing parsed; the text is only usable as-is.
    Raw,
}

impl RecoveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryMethod::Direct => "direct",
            RecoveryMethod::Fence => "fence",
            RecoveryMethod::Cleanup => "cleanup",
            RecoveryMethod::BraceScan => "brace_scan",
            RecoveryMethod::Raw => "raw",
        }
    }
}

impl std::fmt::Display for RecoveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attempts to recover a JSON object or array from arbitrary model output.
///
/// Stages are tried in order, stopping at the first success:
///
/// 1. strict parse of the trimmed text;
/// 2. strict parse of the first triple-backtick fenced block;
/// 3. parse after lexical cleanup (comments, trailing commas, stray
///    control characters) of the fenced block if one exists, otherwise of
///    the whole text;
/// 4. parse of the brace-balanced substring starting at the first `{`/`[`;
/// 5. give up with `(None, Raw)`.
///
/// Only objects and arrays count as structured data; a bare scalar falls
/// through to the next stage. The function is pure and never panics.
pub fn extract(text: &str) -> (Option<Value>, RecoveryMethod) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (None, RecoveryMethod::Raw);
    }

    if let Some(value) = parse_structured(trimmed) {
        return (Some(value), RecoveryMethod::Direct);
    }

    let fenced = fenced_block(trimmed);
    if let Some(inner) = fenced {
        if let Some(value) = parse_structured(inner) {
            return (Some(value), RecoveryMethod::Fence);
        }
    }

    let candidate = fenced.unwrap_or(trimmed);
    let cleaned = strip_trailing_commas(&strip_comments_and_controls(candidate));
    if let Some(value) = parse_structured(cleaned.trim()) {
        return (Some(value), RecoveryMethod::Cleanup);
    }

    if let Some(span) = balanced_span(&cleaned) {
        if let Some(value) = parse_structured(span) {
            return (Some(value), RecoveryMethod::BraceScan);
        }
    }

    (None, RecoveryMethod::Raw)
}

/// Strict parse that only admits objects and arrays.
fn parse_structured(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        _ => None,
    }
}

/// Returns the trimmed content of the first triple-backtick block.
///
/// An opening fence may carry a language tag (for example ```` ```json ````)
/// on the same line; the tag is dropped. When the text holds several fenced
/// blocks, the first one wins.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let rest = &text[open + 3..];
    let close = rest.find("```")?;
    let mut body = &rest[..close];

    if let Some(newline) = body.find('\n') {
        let tag = body[..newline].trim();
        if tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            body = &body[newline + 1..];
        }
    } else if let Some(stripped) = body.strip_prefix("json") {
        body = stripped;
    }

    Some(body.trim())
}

/// Removes `//` and `/* */` comments outside string literals, drops stray
/// control characters, and escapes raw newlines/tabs inside strings.
fn strip_comments_and_controls(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            if escaped {
                out.push(c);
                escaped = false;
            } else if c == '\\' {
                out.push(c);
                escaped = true;
            } else if c == '"' {
                out.push(c);
                in_string = false;
            } else if c == '\n' {
                out.push_str("\\n");
            } else if c == '\r' {
                out.push_str("\\r");
            } else if c == '\t' {
                out.push_str("\\t");
            } else if !c.is_control() {
                out.push(c);
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    chars.next();
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            c if c.is_control() && c != '\n' && c != '\r' && c != '\t' => {}
            _ => out.push(c),
        }
    }

    out
}

/// Removes commas whose next non-whitespace character closes an object or
/// array. Commas inside string literals are untouched.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
            continue;
        }

        if c == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                i += 1;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Finds the substring from the first `{`/`[` to the bracket that returns
/// nesting depth to zero, tracking string-literal state so braces inside
/// values (and escaped quotes) do not confuse the count.
fn balanced_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
