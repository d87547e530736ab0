// HTML5 の ruby 要素を組み立てる
// ruby 要素内の </rb>, </rt>, </rp> は省略する
// https://www.w3.org/TR/html-ruby-extensions/

use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    rubifier::{
        annotation::{Annotation, AnnotationMethod},
        diagnostic::Diagnostic,
    },
    utility::html::escape_html,
};

// ルビ非対応のブラウザ向けの括弧 (<rp>)
// 設定から一度だけ作る
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackParentheses {
    open: String,
    close: String,
}

impl FallbackParentheses {
    pub fn of(parentheses: &str) -> Self {
        let mut chars = parentheses.chars();
        match (chars.next(), chars.next()) {
            (Some(open), Some(close)) => Self {
                open: format!("<rp>{}", escape_html(open.encode_utf8(&mut [0; 4]))),
                close: format!("<rp>{}", escape_html(close.encode_utf8(&mut [0; 4]))),
            },
            _ => Self::default(),
        }
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRuby {
    pub html: String,
    pub diagnostic: Option<Diagnostic>,
}

// エスケープ済みのベースとルビテキスト
enum Aligned {
    Mono(Vec<(String, String)>),
    Jukugo { bases: Vec<String>, texts: Vec<String> },
    Group { base: String, text: String },
}

pub fn render_ruby(
    parentheses: &FallbackParentheses,
    base: &str,
    annotation: &Annotation,
) -> RenderedRuby {
    // ベーステキストが空の場合はルビ扱いにせず、二重山括弧ごと出力
    if base.is_empty() {
        let text: String = annotation.segments.iter().map(|s| escape_html(s)).collect();
        return RenderedRuby {
            html: format!("《{}》", text),
            diagnostic: None,
        };
    }

    let mut diagnostic = None;

    let aligned = match annotation.method {
        method @ (AnnotationMethod::Mono | AnnotationMethod::Jukugo) => {
            let bases: Vec<_> = base.graphemes(true).map(escape_html).collect();
            let texts: Vec<_> = annotation.segments.iter().map(|s| escape_html(s)).collect();

            if bases.len() != texts.len() {
                // ベース文字数とルビ要素数が一致していない場合、Group-ruby として扱う
                let mismatch = Diagnostic::AlignmentMismatch {
                    method,
                    base: bases.concat(),
                    text: texts.join("-"),
                };
                warn!("{}", mismatch);

                let aligned = Aligned::Group {
                    base: bases.concat(),
                    text: texts.join("-"),
                };
                diagnostic = Some(mismatch);
                aligned
            } else if method == AnnotationMethod::Mono {
                Aligned::Mono(bases.into_iter().zip(texts).collect())
            } else {
                Aligned::Jukugo { bases, texts }
            }
        }
        AnnotationMethod::Group => Aligned::Group {
            base: escape_html(base),
            text: escape_html(annotation.segments.first().map_or("", String::as_str)),
        },
        AnnotationMethod::Invalid => Aligned::Group {
            base: escape_html(base),
            text: escape_html(&annotation.segments.concat()),
        },
    };

    let (rp_open, rp_close) = (parentheses.open(), parentheses.close());

    let mut html = String::from("<ruby>");
    match aligned {
        Aligned::Mono(pairs) => {
            for (base, text) in pairs {
                html.push_str("<rb>");
                html.push_str(&base);
                html.push_str(rp_open);
                html.push_str("<rt>");
                html.push_str(&text);
                html.push_str(rp_close);
            }
        }
        Aligned::Jukugo { bases, texts } => {
            for base in bases {
                html.push_str("<rb>");
                html.push_str(&base);
            }
            html.push_str(rp_open);
            for text in texts {
                html.push_str("<rt>");
                html.push_str(&text);
            }
            html.push_str(rp_close);
        }
        Aligned::Group { base, text } => {
            html.push_str("<rb>");
            html.push_str(&base);
            html.push_str(rp_open);
            html.push_str("<rt>");
            html.push_str(&text);
            html.push_str(rp_close);
        }
    }
    html.push_str("</ruby>");

    RenderedRuby { html, diagnostic }
}
