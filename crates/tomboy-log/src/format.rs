//! Positional message templates
//!
//! Templates use numbered placeholders: `"got {0} of {1}"`. Literal braces
//! are written as `{{` and `}}`. A message logged without arguments is never
//! interpreted, so `"100% {done}"` is emitted exactly as written.

use std::fmt::{self, Write};

use crate::error::FormatError;

/// Substitute `args` into `template`
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut index: Option<usize> = None;
                let mut closed = false;
                for (inner_pos, inner) in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '0'..='9' => {
                            let digit = inner as usize - '0' as usize;
                            index = Some(
                                index
                                    .unwrap_or(0)
                                    .checked_mul(10)
                                    .and_then(|v| v.checked_add(digit))
                                    .ok_or(FormatError::InvalidPlaceholder { position: inner_pos })?,
                            );
                        }
                        _ => return Err(FormatError::InvalidPlaceholder { position: pos }),
                    }
                }

                if !closed {
                    return Err(FormatError::UnbalancedBrace { position: pos });
                }
                let index = index.ok_or(FormatError::InvalidPlaceholder { position: pos })?;
                let arg = args.get(index).ok_or(FormatError::IndexOutOfRange {
                    index,
                    count: args.len(),
                })?;
                // Writing into a String cannot fail
                let _ = write!(out, "{}", arg);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnbalancedBrace { position: pos });
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Produce the message body a sink writes
///
/// Without arguments the template is returned verbatim. A template that does
/// not match its arguments is kept as written and the problem appended, so
/// neither the message nor the caller's mistake disappears.
pub fn message_body(template: &str, args: &[&dyn fmt::Display]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    match render(template, args) {
        Ok(message) => message,
        Err(e) => format!("{} (format error: {})", template, e),
    }
}
