use anyhow::Result;
use regex::Regex;

use aozora_rubifier::{
    config::RubifierConfig,
    rubifier::{
        action,
        annotation::{Annotation, AnnotationMethod},
        syntax::{self, SyntaxData, SyntaxMode},
        Rubifier,
    },
};

#[test]
fn test_lexer_patterns() -> Result<()> {
    let bracketed = Regex::new(syntax::lexer_pattern(SyntaxMode::Bracketed))?;
    let alternative = Regex::new(syntax::lexer_pattern(SyntaxMode::Alternative))?;

    let found: Vec<_> = bracketed
        .find_iter("これは漢字《かんじ》で、｜日本語《に.ほん.ご》とRuby《ルビ》です")
        .map(|m| m.as_str())
        .collect();
    assert_eq!(
        found,
        vec!["漢字《かんじ》", "｜日本語《に.ほん.ご》", "Ruby《ルビ》"]
    );

    let found: Vec<_> = alternative
        .find_iter("foo \\|漢字<<かんじ>> bar |青空<<あおぞら>>")
        .map(|m| m.as_str())
        .collect();
    assert_eq!(found, vec!["\\|漢字<<かんじ>>", "|青空<<あおぞら>>"]);

    Ok(())
}

#[test]
fn test_lexer_patterns_by_config() -> Result<()> {
    let modes: Vec<_> = syntax::lexer_patterns(&RubifierConfig::default())
        .into_iter()
        .map(|(mode, _)| mode)
        .collect();
    assert_eq!(modes, vec![SyntaxMode::Alternative]);

    let config = RubifierConfig::from_json(r#"{ "rubify": "action,syntax" }"#)?;
    let modes: Vec<_> = syntax::lexer_patterns(&config)
        .into_iter()
        .map(|(mode, _)| mode)
        .collect();
    assert_eq!(modes, vec![SyntaxMode::Bracketed, SyntaxMode::Alternative]);

    Ok(())
}

#[test]
fn test_handle() {
    assert_eq!(
        syntax::handle("｜日本語《に,ほん,ご》"),
        Some(SyntaxData::Ruby {
            base: "日本語".to_owned(),
            annotation: Annotation {
                method: AnnotationMethod::Jukugo,
                segments: vec!["に".to_owned(), "ほん".to_owned(), "ご".to_owned()],
            },
        })
    );
    assert_eq!(
        syntax::handle("\\|青空<<あおぞら>>"),
        Some(SyntaxData::Ruby {
            base: "青空".to_owned(),
            annotation: Annotation::group("あおぞら"),
        })
    );
    assert_eq!(
        syntax::handle("｜《かっこ》"),
        Some(SyntaxData::Cdata {
            value: "\u{200b}《かっこ》".to_owned()
        })
    );
    assert_eq!(syntax::handle("漢字《,,》").map(|data| match data {
        SyntaxData::Ruby { annotation, .. } => annotation,
        SyntaxData::Cdata { .. } => unreachable!(),
    }), Some(Annotation::group(",,")));

    assert_eq!(syntax::handle("ひらがな"), None);
    assert_eq!(syntax::handle("漢字《かんじ》です"), None);
}

#[test]
fn test_render() {
    let rubifier = Rubifier::default();

    let data = syntax::handle("｜日本語《に,ほん,ご》").unwrap();
    assert_eq!(
        syntax::render(&rubifier, syntax::FORMAT_XHTML, &data),
        "<ruby><rb>日<rb>本<rb>語<rp>(<rt>に<rt>ほん<rt>ご<rp>)</ruby>"
    );
    assert_eq!(syntax::render(&rubifier, "metadata", &data), "");

    let data = syntax::handle("|<<a&b>>").unwrap();
    assert_eq!(
        syntax::render(&rubifier, syntax::FORMAT_XHTML, &data),
        "\u{200b}&lt;&lt;a&amp;b&gt;&gt;"
    );
    assert_eq!(
        syntax::render(&rubifier, "metadata", &data),
        "\u{200b}<<a&b>>"
    );
}

#[test]
fn test_action() -> Result<()> {
    let rubifier = Rubifier::default();
    assert!(action::is_registered(&rubifier));
    assert_eq!(
        action::postprocess(&rubifier, "xhtml", "<p>｜日本語《にほんご》</p>"),
        Some("<p><ruby><rb>日本語<rp>(<rt>にほんご<rp>)</ruby></p>".to_owned())
    );
    assert_eq!(
        action::postprocess(&rubifier, "metadata", "｜日本語《にほんご》"),
        None
    );

    let rubifier = Rubifier::new(RubifierConfig::from_json(r#"{ "rubify": "syntax" }"#)?);
    assert!(!action::is_registered(&rubifier));
    assert_eq!(
        action::postprocess(&rubifier, "xhtml", "｜日本語《にほんご》"),
        None
    );

    Ok(())
}
