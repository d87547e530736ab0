use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::rubifier::diagnostic::Diagnostic;

// ルビの振り方
// Mono-ruby:   ｜日本語《に.ほん.ご》 ベース 1 文字ずつ
// Jukugo-ruby: ｜日本語《に,ほん,ご》 1 文字ずつ対応させるがまとめて表示する
// Group-ruby:  ｜日本語《にほんご》 ベース全体に
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationMethod {
    Mono,
    Jukugo,
    Group,
    Invalid,
}

impl AnnotationMethod {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl fmt::Display for AnnotationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mono => "Mono-ruby",
            Self::Jukugo => "Jukugo-ruby",
            Self::Group => "Group-ruby",
            Self::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub method: AnnotationMethod,
    pub segments: Vec<String>,
}

impl Annotation {
    // ルビテキストを "." または "," で分解する
    // 最初の区切り文字が "." なら Mono-ruby、"," なら Jukugo-ruby
    pub fn parse(text: &str) -> Self {
        static REGEX_SEGMENT: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"(?P<segment>[^.,]+)(?P<delimiter>[.,]?)").unwrap());

        let mut segments = Vec::new();
        let mut first_delimiter = None;
        for captures in REGEX_SEGMENT.captures_iter(text) {
            if segments.is_empty() {
                first_delimiter = captures.name("delimiter").map(|m| m.as_str());
            }
            segments.push(captures["segment"].to_owned());
        }

        let method = match segments.len() {
            0 => {
                warn!("{}", Diagnostic::ParseFailure { text: text.to_owned() });
                AnnotationMethod::Invalid
            }
            1 => AnnotationMethod::Group,
            _ if first_delimiter == Some(".") => AnnotationMethod::Mono,
            _ => AnnotationMethod::Jukugo,
        };

        Self { method, segments }
    }

    // 分解できなければルビテキストをそのまま Group-ruby として扱う
    pub fn parse_or_group(text: &str) -> (Self, Option<Diagnostic>) {
        let annotation = Self::parse(text);
        if annotation.method.is_valid() {
            (annotation, None)
        } else {
            (
                Self::group(text),
                Some(Diagnostic::ParseFailure {
                    text: text.to_owned(),
                }),
            )
        }
    }

    pub fn group(text: &str) -> Self {
        Self {
            method: AnnotationMethod::Group,
            segments: vec![text.to_owned()],
        }
    }
}

pub fn parse(text: &str) -> (AnnotationMethod, Vec<String>) {
    let Annotation { method, segments } = Annotation::parse(text);
    (method, segments)
}
