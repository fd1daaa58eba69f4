//! Target statement parsing as the engine performs it.
//!
//! A statement is `kind[:offset[:value]]`. Unlike source tags the value keeps
//! any further colons, and kinds are matched case-insensitively.

/// Statement kinds the engine interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Deref,
    InitNull,
    MaybeInitNull,
    AllocSource,
    Free,
    TaintOutput,
    TaintPropagation,
    TaintSink,
    Unknown,
}

impl TargetKind {
    pub fn parse(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "deref" => Self::Deref,
            "initnull" => Self::InitNull,
            "maybeinitnull" => Self::MaybeInitNull,
            "allocsource" => Self::AllocSource,
            "freesource" | "freesink" => Self::Free,
            "taintoutput" => Self::TaintOutput,
            "taintpropagation" => Self::TaintPropagation,
            "taintsink" => Self::TaintSink,
            _ => Self::Unknown,
        }
    }

    pub fn is_taint(&self) -> bool {
        matches!(
            self,
            Self::TaintOutput | Self::TaintPropagation | Self::TaintSink
        )
    }
}

/// A statement split into kind, offset and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetStatement<'a> {
    pub raw: &'a str,
    pub kind: TargetKind,
    pub offset: &'a str,
    pub value: &'a str,
}

impl<'a> TargetStatement<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let (kind, offset, value) = match raw.split_once(':') {
            None => (raw, "", ""),
            Some((kind, rest)) => match rest.split_once(':') {
                None => (kind, rest, ""),
                Some((offset, value)) => (kind, offset, value),
            },
        };
        Self {
            raw,
            kind: TargetKind::parse(kind),
            offset,
            value,
        }
    }

    /// Taint type: the value up to its first colon.
    pub fn taint_type(&self) -> &'a str {
        self.value.split(':').next().unwrap_or_default()
    }

    /// Propagation data: the value after its first colon.
    pub fn taint_data(&self) -> &'a str {
        self.value
            .split_once(':')
            .map(|(_, data)| data)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_keeps_trailing_colons() {
        let statement = TargetStatement::parse("TaintPropagation::UntrustedSource:2");
        assert_eq!(statement.kind, TargetKind::TaintPropagation);
        assert_eq!(statement.offset, "");
        assert_eq!(statement.value, "UntrustedSource:2");
        assert_eq!(statement.taint_type(), "UntrustedSource");
        assert_eq!(statement.taint_data(), "2");
    }

    #[test]
    fn kinds_are_case_insensitive() {
        assert_eq!(TargetStatement::parse("initNull:*").kind, TargetKind::InitNull);
        assert_eq!(TargetStatement::parse("FreeSink::1").kind, TargetKind::Free);
        assert_eq!(TargetStatement::parse("Custom").kind, TargetKind::Unknown);
    }
}
