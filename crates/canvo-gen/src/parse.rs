//! Response text parsing and validation.

use canvo_core::BusinessModelCanvas;

use crate::error::GenerateError;

/// Strip one leading/trailing markdown code fence, if present.
///
/// Models asked for bare JSON still wrap it in ```` ```json ```` or a bare
/// ```` ``` ```` fence often enough that the parser has to tolerate both.
/// Unfenced input passes through unchanged (modulo surrounding whitespace).
#[must_use]
pub fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    let body = body.strip_prefix('\n').unwrap_or(body);
    let body = match body.strip_suffix("```") {
        Some(inner) => inner.strip_suffix('\n').unwrap_or(inner),
        None => body,
    };
    body.trim()
}

/// Parse backend response text into a validated canvas.
///
/// # Errors
///
/// Returns [`GenerateError::Parse`] for invalid JSON and
/// [`GenerateError::Canvas`] naming the first empty field when the
/// nine-field contract is violated. Neither is retried by the caller.
pub fn parse_canvas(text: &str) -> Result<BusinessModelCanvas, GenerateError> {
    let cleaned = strip_fence(text);
    let canvas: BusinessModelCanvas =
        serde_json::from_str(cleaned).map_err(|e| GenerateError::Parse(e.to_string()))?;
    canvas.validate()?;
    Ok(canvas)
}
