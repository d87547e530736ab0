// 青空文庫形式のルビ記法を HTML5 の ruby 要素に変換する
// https://www.aozora.gr.jp/aozora-manual/index-input.html#markup
//
// 1. Mono-ruby
//    ｜日本語《に.ほん.ご》
//    <ruby><rb>日<rp>(<rt>に<rp>)<rb>本<rp>(<rt>ほん<rp>)<rb>語<rp>(<rt>ご<rp>)</ruby>
// 2. Jukugo-ruby
//    ｜日本語《に,ほん,ご》
//    <ruby><rb>日<rb>本<rb>語<rp>(<rt>に<rt>ほん<rt>ご<rp>)</ruby>
// 3. Group-ruby
//    ｜日本語《にほんご》
//    <ruby><rb>日本語<rp>(<rt>にほんご<rp>)</ruby>

pub mod action;
pub mod annotation;
pub mod diagnostic;
pub mod html;
pub mod syntax;
pub mod tokenizer;

use tracing::{debug, warn};

use crate::{
    config::RubifierConfig,
    rubifier::{
        annotation::{Annotation, AnnotationMethod},
        html::{render_ruby, FallbackParentheses, RenderedRuby},
        tokenizer::{tokenize_rubified_text, RubifierToken},
    },
};

pub use annotation::parse;

// 括弧は生成時に設定から一度だけ求める
#[derive(Debug, Clone)]
pub struct Rubifier {
    config: RubifierConfig,
    parentheses: FallbackParentheses,
}

impl Rubifier {
    pub fn new(config: RubifierConfig) -> Self {
        let parentheses = FallbackParentheses::of(&config.parentheses);
        Self {
            config,
            parentheses,
        }
    }

    pub fn config(&self) -> &RubifierConfig {
        &self.config
    }

    pub fn tokenize(&self, source: &str) -> Vec<RubifierToken> {
        tokenize_rubified_text(source)
    }

    // ルビ記法以外はそのまま出力する
    pub fn convert(&self, source: &str) -> String {
        let mut html = String::with_capacity(source.len());
        for token in self.tokenize(source) {
            match token {
                RubifierToken::String { value } | RubifierToken::Literal { value } => {
                    html.push_str(&value)
                }
                RubifierToken::Ruby { base, text } => {
                    debug!(base = %base, text = %text, "ruby");
                    html.push_str(&self.build_html(&base, &text));
                }
            }
        }
        html
    }

    pub fn render(&self, base: &str, text: &str) -> RenderedRuby {
        let (annotation, parse_failure) = Annotation::parse_or_group(text);
        let rendered = render_ruby(&self.parentheses, base, &annotation);
        RenderedRuby {
            html: rendered.html,
            diagnostic: parse_failure.or(rendered.diagnostic),
        }
    }

    pub fn build_html(&self, base: &str, text: &str) -> String {
        self.render(base, text).html
    }

    // 分解済みのルビテキスト (syntax::handle) から作る
    // 不正な method は Group-ruby として扱う
    pub fn build_html_with(
        &self,
        base: &str,
        segments: &[String],
        method: AnnotationMethod,
    ) -> String {
        let annotation = if method.is_valid() {
            Annotation {
                method,
                segments: segments.to_vec(),
            }
        } else {
            warn!(?segments, "Invalid ruby method, treated as Group-ruby");
            Annotation::group(&segments.concat())
        };

        render_ruby(&self.parentheses, base, &annotation).html
    }
}

impl Default for Rubifier {
    fn default() -> Self {
        Self::new(RubifierConfig::default())
    }
}
