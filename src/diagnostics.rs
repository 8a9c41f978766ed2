//! User-facing diagnostics shared by the pipeline stages.

/// Emit a non-fatal warning.
pub fn warn(msg: impl AsRef<str>) {
    tracing::warn!("{}", msg.as_ref());
}

/// Prefix used for fatal error contexts.
pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("reasoning-graph: {}", msg.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_message_is_prefixed() {
        assert_eq!(
            error_message("read log file x.jsonl"),
            "reasoning-graph: read log file x.jsonl"
        );
    }
}
