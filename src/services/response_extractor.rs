use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::GenerationError;

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").expect("LEADING_FENCE is a valid regex pattern")
});
static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n?```[ \t]*$").expect("TRAILING_FENCE is a valid regex pattern")
});

fn is_opener(c: char) -> bool {
    c == '{' || c == '['
}

/// Isolates the JSON payload inside a raw generator reply.
///
/// Strips a surrounding code fence, then takes the span from the first
/// `{` or `[` to the last matching closer. Replies carrying several
/// top-level payloads are rejected rather than guessed at.
pub fn extract(raw: &str) -> Result<&str, GenerationError> {
    let trimmed = raw.trim();
    let unfenced = LEADING_FENCE
        .find(trimmed)
        .map_or(trimmed, |m| &trimmed[m.end()..]);
    let body = TRAILING_FENCE
        .find(unfenced)
        .map_or(unfenced, |m| &unfenced[..m.start()]);

    let start = body.find(is_opener).ok_or_else(|| {
        GenerationError::MalformedResponse("no JSON object or array found".to_string())
    })?;
    let closer = if body[start..].starts_with('{') { '}' } else { ']' };
    let end = body
        .rfind(closer)
        .filter(|&end| end > start)
        .ok_or_else(|| {
            GenerationError::MalformedResponse(format!(
                "no closing '{}' after the opening delimiter",
                closer
            ))
        })?;

    let span = &body[start..=end];
    ensure_single_payload(span)?;
    Ok(span)
}

/// Fails when a second structure starts after the first one closes.
///
/// Unbalanced spans pass through; the JSON parser reports those.
fn ensure_single_payload(span: &str) -> Result<(), GenerationError> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in span.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let rest = &span[idx + ch.len_utf8()..];
                    if rest.contains(is_opener) {
                        return Err(GenerationError::MalformedResponse(
                            "more than one top-level JSON payload".to_string(),
                        ));
                    }
                    return Ok(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}
