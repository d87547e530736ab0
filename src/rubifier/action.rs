// 描画済みの文書全体を後処理する (rubify = action)
// 見出し文字列などにも適用される

use crate::{
    config::InvocationMode,
    rubifier::{syntax::FORMAT_XHTML, Rubifier},
};

pub fn is_registered(rubifier: &Rubifier) -> bool {
    rubifier.config().is_enabled(InvocationMode::Action)
}

// 変換しない場合は None
pub fn postprocess(rubifier: &Rubifier, format: &str, document: &str) -> Option<String> {
    if !is_registered(rubifier) || format != FORMAT_XHTML {
        return None;
    }

    Some(rubifier.convert(document))
}
