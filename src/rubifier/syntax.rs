// 構文解析中にルビ記法を処理する (rubify = syntax)
//
// ホストの字句解析器は lexer_patterns() のパターンで一致した文字列を handle() に渡し、
// 結果を保持しておいて描画時に render() を呼ぶ

use serde::{Deserialize, Serialize};

use crate::{
    config::{InvocationMode, RubifierConfig},
    rubifier::{
        annotation::Annotation,
        tokenizer::{tokenize_rubified_text, RubifierToken},
        Rubifier,
    },
    utility::html::escape_html,
};

pub const SYNTAX_TYPE: &str = "substition";
// テーブル (60) より先に処理する
pub const SYNTAX_SORT: usize = 59;

pub const FORMAT_XHTML: &str = "xhtml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxMode {
    Bracketed,   // base《text》
    Alternative, // \|base<<text>>
}

pub fn lexer_pattern(mode: SyntaxMode) -> &'static str {
    match mode {
        SyntaxMode::Bracketed => r"(?:｜[^\n\p{P}]*|[\p{Han}仝々〆〇ヶ]+|\p{Latin}+)《[^\s》]+》",
        SyntaxMode::Alternative => r"\\?\|[^\n|<>]*<<[^\n<>]+>>",
    }
}

// 《》 形式は rubify に syntax が含まれる場合のみ、ASCII 形式は常に登録する
pub fn lexer_patterns(config: &RubifierConfig) -> Vec<(SyntaxMode, &'static str)> {
    let mut patterns = Vec::new();
    if config.is_enabled(InvocationMode::Syntax) {
        patterns.push((
            SyntaxMode::Bracketed,
            lexer_pattern(SyntaxMode::Bracketed),
        ));
    }
    patterns.push((
        SyntaxMode::Alternative,
        lexer_pattern(SyntaxMode::Alternative),
    ));
    patterns
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum SyntaxData {
    // そのまま出力する文字列
    Cdata { value: String },
    Ruby { base: String, annotation: Annotation },
}

// 字句解析器が一致させた文字列全体を受け取る
pub fn handle(matched: &str) -> Option<SyntaxData> {
    match tokenize_rubified_text(matched).as_slice() {
        [RubifierToken::Ruby { base, text }] => Some(SyntaxData::Ruby {
            base: base.clone(),
            annotation: Annotation::parse_or_group(text).0,
        }),
        [RubifierToken::Literal { value }] => Some(SyntaxData::Cdata {
            value: value.clone(),
        }),
        _ => None,
    }
}

pub fn render(rubifier: &Rubifier, format: &str, data: &SyntaxData) -> String {
    match data {
        SyntaxData::Cdata { value } if format == FORMAT_XHTML => escape_html(value),
        SyntaxData::Cdata { value } => value.clone(),
        SyntaxData::Ruby { base, annotation } if format == FORMAT_XHTML => {
            rubifier.build_html_with(base, &annotation.segments, annotation.method)
        }
        SyntaxData::Ruby { .. } => String::new(),
    }
}
