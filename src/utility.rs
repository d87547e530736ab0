use once_cell::sync::Lazy;
use regex::Regex;

pub mod html;
pub mod str;

// ルビ記法に向けた文字種別
// 仝々〆〇ヶ は漢字扱い (https://www.aozora.gr.jp/annotation/etc.html#ruby)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    Kanji,
    Latin,
    Punctuation, // \p{P}
    NewLine,
    Other,
}

impl CharType {
    pub fn from(c: char) -> Self {
        static REGEX_KANJI: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[\p{Han}仝々〆〇ヶ]$").unwrap());
        static REGEX_LATIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Latin}$").unwrap());
        static REGEX_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{P}$").unwrap());

        if c == '\n' {
            return Self::NewLine;
        }

        let mut buffer = [0; 4];
        let c = c.encode_utf8(&mut buffer);

        if REGEX_KANJI.is_match(c) {
            Self::Kanji
        } else if REGEX_LATIN.is_match(c) {
            Self::Latin
        } else if REGEX_PUNCTUATION.is_match(c) {
            Self::Punctuation
        } else {
            Self::Other
        }
    }

    // 縦棒なしでルビベースになれる文字種別
    pub fn is_implicit_ruby_base(&self) -> bool {
        matches!(self, Self::Kanji | Self::Latin)
    }
}
