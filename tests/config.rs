use std::collections::HashSet;

use anyhow::Result;

use aozora_rubifier::config::{InvocationMode, RubifierConfig};

#[test]
fn test_config() -> Result<()> {
    let config =
        RubifierConfig::from_json(r#"{ "rubify": "action, syntax", "parentheses": "（）" }"#)?;
    assert_eq!(
        config.modes,
        HashSet::from([InvocationMode::Action, InvocationMode::Syntax])
    );
    assert_eq!(config.parentheses, "（）");
    assert!(config.is_enabled(InvocationMode::Syntax));

    let config = RubifierConfig::from_json(r#"{ "rubify": "", "parentheses": "" }"#)?;
    assert!(config.modes.is_empty());
    assert_eq!(config.parentheses, "");

    Ok(())
}

#[test]
fn test_config_default() -> Result<()> {
    assert_eq!(RubifierConfig::from_json("{}")?, RubifierConfig::default());

    let config = RubifierConfig::default();
    assert!(config.is_enabled(InvocationMode::Action));
    assert!(!config.is_enabled(InvocationMode::Syntax));
    assert_eq!(config.parentheses, "()");

    Ok(())
}

#[test]
fn test_config_invalid() {
    assert!(RubifierConfig::from_json(r#"{ "rubify": "render" }"#).is_err());
    assert!(RubifierConfig::from_json(r#"{ "parentheses": "(" }"#).is_err());
    assert!(RubifierConfig::from_json(r#"{ "parentheses": "(()" }"#).is_err());
    assert!(RubifierConfig::from_json("[]").is_err());
}
