use serde::{Deserialize, Serialize};

use crate::utility::{str::unescape_backslashes, CharType};

// ベースが空のルビ記法を再出力するときの接頭辞
// 出力が再び変換されるのを防ぐ
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum RubifierToken {
    // ルビ記法以外の文字列
    String { value: String },

    // base《text》, |base<<text>>
    Ruby { base: String, text: String },

    // ベースが空のルビ記法 (｜《text》)
    Literal { value: String },
}

// 字句解析
//
// 1. base《text》
//    base は「｜」から始まる約物・改行を含まない文字列、漢字の連続、ラテン文字の連続のいずれか
// 2. \|base<<text>>
//    行頭の「|」がテーブルと認識される場合のためにバックスラッシュでエスケープできる
pub fn tokenize_rubified_text(source: &str) -> Vec<RubifierToken> {
    let chars: Vec<char> = source.chars().collect();
    let mut scanner = Scanner::new(&chars);

    let mut tokens = Vec::new();
    let mut string_buffer = String::new();

    while !scanner.is_finished() {
        match scanner.scan() {
            Scanned::Span(span) => {
                if !string_buffer.is_empty() {
                    tokens.push(RubifierToken::String {
                        value: string_buffer,
                    });
                    string_buffer = String::new();
                }

                tokens.push(span.into_token());
            }

            Scanned::Skip(skipped) => {
                string_buffer.extend(skipped);
            }
        }
    }

    if !string_buffer.is_empty() {
        tokens.push(RubifierToken::String {
            value: string_buffer,
        });
    }

    tokens
}

struct RubySpan {
    base: String,
    text: String,
    // 括弧を含むルビテキスト部分（そのままの形）
    enclosed: String,
}

impl RubySpan {
    fn into_token(self) -> RubifierToken {
        if self.base.is_empty() {
            RubifierToken::Literal {
                value: format!("{}{}", ZERO_WIDTH_SPACE, self.enclosed),
            }
        } else {
            RubifierToken::Ruby {
                base: self.base,
                text: self.text,
            }
        }
    }
}

enum Scanned<'a> {
    Span(RubySpan),
    Skip(&'a [char]),
}

struct Scanner<'a> {
    chars: &'a [char],
    position: usize,

    // ここより前から始まる 《》 形式は一致しないことが分かっている
    // （同じベース終端で失敗するため）
    bracketed_failed_until: usize,

    // 「》」のないルビテキストの終端
    // ここまでに始まるルビテキストも同じ位置で終わるので一致しない
    annotation_failed_until: Option<usize>,
}

impl<'a> Scanner<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            position: 0,
            bracketed_failed_until: 0,
            annotation_failed_until: None,
        }
    }

    fn is_finished(&self) -> bool {
        self.chars.len() <= self.position
    }

    fn scan(&mut self) -> Scanned<'a> {
        let chars = self.chars;
        let start = self.position;

        let span = match chars[start] {
            '\\' if chars.get(start + 1) == Some(&'|') => {
                self.scan_alternative(start + 1).ok_or(start + 2)
            }
            '|' => self.scan_alternative(start).ok_or(start + 1),

            '｜' if self.bracketed_failed_until <= start => {
                let base_end = self.run_end(start + 1, |c| {
                    !matches!(CharType::from(c), CharType::NewLine | CharType::Punctuation)
                });
                self.scan_bracketed(start, base_end).ok_or(start + 1)
            }

            c if self.bracketed_failed_until <= start
                && CharType::from(c).is_implicit_ruby_base() =>
            {
                let char_type = CharType::from(c);
                let base_end = self.run_end(start, |c| CharType::from(c) == char_type);
                // 途中から始めても同じ位置で失敗するので飛ばす
                self.scan_bracketed(start, base_end).ok_or(base_end)
            }

            _ => Err(start + 1),
        };

        match span {
            Ok((end, span)) => {
                self.position = end;
                Scanned::Span(span)
            }
            Err(next) => {
                self.position = next;
                Scanned::Skip(&chars[start..next])
            }
        }
    }

    // base《text》
    fn scan_bracketed(&mut self, start: usize, base_end: usize) -> Option<(usize, RubySpan)> {
        let span = self.scan_bracketed_text(start, base_end);
        if span.is_none() {
            self.bracketed_failed_until = base_end;
        }
        span
    }

    fn scan_bracketed_text(&mut self, start: usize, base_end: usize) -> Option<(usize, RubySpan)> {
        if self.chars.get(base_end) != Some(&'《') {
            return None;
        }

        let text_start = base_end + 1;
        if matches!(self.annotation_failed_until, Some(end) if text_start <= end) {
            return None;
        }

        let text_end = self.run_end(text_start, |c| !c.is_whitespace() && c != '》');
        if self.chars.get(text_end) != Some(&'》') {
            self.annotation_failed_until = Some(text_end);
            return None;
        }
        if text_end == text_start {
            return None;
        }

        let base: String = self.chars[start..base_end].iter().collect();
        let base = base.trim_start_matches('｜').to_owned();

        Some((
            text_end + 1,
            RubySpan {
                base,
                text: self.chars[text_start..text_end].iter().collect(),
                enclosed: self.chars[base_end..=text_end].iter().collect(),
            },
        ))
    }

    // |base<<text>>
    fn scan_alternative(&self, bar: usize) -> Option<(usize, RubySpan)> {
        let base_start = bar + 1;
        let base_end = self.run_end(base_start, |c| !matches!(c, '\n' | '|' | '<' | '>'));
        if !self.starts_with(base_end, "<<") {
            return None;
        }

        let text_start = base_end + 2;
        let text_end = self.run_end(text_start, |c| !matches!(c, '\n' | '<' | '>'));
        if text_end == text_start || !self.starts_with(text_end, ">>") {
            return None;
        }

        let base: String = self.chars[base_start..base_end].iter().collect();
        let text: String = self.chars[text_start..text_end].iter().collect();

        Some((
            text_end + 2,
            RubySpan {
                base: unescape_backslashes(&base),
                text: unescape_backslashes(&text),
                enclosed: self.chars[base_end..text_end + 2].iter().collect(),
            },
        ))
    }

    fn run_end(&self, from: usize, predicate: impl Fn(char) -> bool) -> usize {
        self.chars[from.min(self.chars.len())..]
            .iter()
            .position(|&c| !predicate(c))
            .map_or(self.chars.len(), |len| from + len)
    }

    fn starts_with(&self, index: usize, pattern: &str) -> bool {
        let mut index = index;
        for p in pattern.chars() {
            if self.chars.get(index) != Some(&p) {
                return false;
            }
            index += 1;
        }
        true
    }
}
