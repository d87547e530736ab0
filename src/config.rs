use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

// ルビ記法を処理するタイミング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvocationMode {
    Action, // 描画済みの文書全体を後処理する
    Syntax, // 構文解析中にルビ記法を処理する
}

impl InvocationMode {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "action" => Ok(Self::Action),
            "syntax" => Ok(Self::Syntax),
            name => bail!("Unknown invocation mode: {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRubifierConfig")]
pub struct RubifierConfig {
    pub modes: HashSet<InvocationMode>,

    // 空、または 2 文字（開き・閉じ）
    pub parentheses: String,
}

impl RubifierConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_enabled(&self, mode: InvocationMode) -> bool {
        self.modes.contains(&mode)
    }
}

impl Default for RubifierConfig {
    fn default() -> Self {
        Self {
            modes: HashSet::from([InvocationMode::Action]),
            parentheses: DEFAULT_PARENTHESES.to_owned(),
        }
    }
}

const DEFAULT_RUBIFY: &str = "action";
const DEFAULT_PARENTHESES: &str = "()";

// 設定ファイル上の表現 ("rubify": "action,syntax")
#[derive(Debug, Deserialize)]
struct RawRubifierConfig {
    #[serde(default = "default_rubify")]
    rubify: String,
    #[serde(default = "default_parentheses")]
    parentheses: String,
}

fn default_rubify() -> String {
    DEFAULT_RUBIFY.to_owned()
}

fn default_parentheses() -> String {
    DEFAULT_PARENTHESES.to_owned()
}

impl TryFrom<RawRubifierConfig> for RubifierConfig {
    type Error = anyhow::Error;

    fn try_from(raw: RawRubifierConfig) -> Result<Self> {
        let modes = raw
            .rubify
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(InvocationMode::of)
            .collect::<Result<HashSet<_>>>()?;

        let len = raw.parentheses.chars().count();
        ensure!(
            len == 0 || len == 2,
            "parentheses must be empty or 2 characters: {:?}",
            raw.parentheses
        );

        Ok(Self {
            modes,
            parentheses: raw.parentheses,
        })
    }
}
