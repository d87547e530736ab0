use std::fmt;

use crate::rubifier::annotation::AnnotationMethod;

// 変換を止めない不整合
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    // ルビテキストが区切り文字のみ
    ParseFailure {
        text: String,
    },
    // ベース文字数とルビ要素数が一致しない
    AlignmentMismatch {
        method: AnnotationMethod,
        base: String,
        text: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ParseFailure { text } => write!(f, "Failed to parse ruby text: {:?}", text),
            Diagnostic::AlignmentMismatch { method, base, text } => {
                write!(f, "Wrong {} [{}] for base [{}]", method, text, base)
            }
        }
    }
}
