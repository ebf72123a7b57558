//! Template rendering
//!
//! Pure functions that turn a rename template plus per-file metadata into
//! a target file name. Tokens are expanded textually; unknown tokens are
//! left verbatim so a typo shows up in the preview instead of silently
//! vanishing.

use chrono::NaiveDate;

use crate::model::types::RenameTemplate;

/// Per-file values available to token substitution. Assembled by the
/// caller so rendering stays free of filesystem and clock access.
#[derive(Debug, Clone)]
pub struct TokenContext {
    /// File stem (name without the final extension)
    pub stem: String,
    /// Extension without the dot, empty when the file has none
    pub ext: String,
    /// File size in bytes
    pub size: u64,
    /// Modified date of the file, if known
    pub mtime: Option<NaiveDate>,
    /// Name of the parent directory ("" at filesystem root)
    pub parent: String,
    /// Current date, passed in for testability
    pub today: NaiveDate,
}

/// Render the target file name for one entry.
///
/// The body pattern (default `{name}`) is expanded, wrapped in prefix and
/// suffix, and the original extension is re-attached unless the body
/// already placed an `{ext}` token.
pub fn render_target_name(template: &RenameTemplate, ctx: &TokenContext, counter: u64) -> String {
    let body = template.body.as_deref().unwrap_or("{name}");
    let expanded = expand_tokens(body, template, ctx, counter);

    let mut name = String::new();
    name.push_str(&expand_tokens(&template.prefix, template, ctx, counter));
    name.push_str(&expanded);
    name.push_str(&expand_tokens(&template.suffix, template, ctx, counter));

    if !body.contains("{ext}") && !ctx.ext.is_empty() {
        name.push('.');
        name.push_str(&ctx.ext);
    }

    name
}

/// Expand every known `{token}` in `pattern`. Scans left to right; an
/// unmatched `{` or an unknown token is copied through unchanged.
fn expand_tokens(
    pattern: &str,
    template: &RenameTemplate,
    ctx: &TokenContext,
    counter: u64,
) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        match tail.find('}') {
            Some(close) => {
                let token = &tail[1..close];
                match expand_one(token, template, ctx, counter) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

fn expand_one(
    token: &str,
    template: &RenameTemplate,
    ctx: &TokenContext,
    counter: u64,
) -> Option<String> {
    match token {
        "name" => Some(ctx.stem.clone()),
        "ext" => Some(ctx.ext.clone()),
        "counter" => Some(format!(
            "{:0width$}",
            counter,
            width = template.counter_pad as usize
        )),
        "date" => Some(ctx.today.format("%Y-%m-%d").to_string()),
        "mtime" => Some(
            ctx.mtime
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ),
        "size" => Some(ctx.size.to_string()),
        "parent" => Some(ctx.parent.clone()),
        _ => None,
    }
}
