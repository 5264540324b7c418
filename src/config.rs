use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::comparison::Normalization;

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TOML 카탈로그 경로. 없으면 내장 카탈로그를 쓴다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_path: Option<PathBuf>,
    /// 비교할 재료 이름. 비어 있으면 전체.
    pub materials: Vec<String>,
    /// 비교 축으로 쓸 물성 키. 비어 있으면 스키마 전체.
    pub properties: Vec<String>,
    /// CSV 표 기본 저장 경로
    pub table_path: PathBuf,
    /// 차트 시리즈 JSON 기본 저장 경로
    pub series_path: PathBuf,
    pub normalization: Normalization,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            materials: Vec::new(),
            properties: Vec::new(),
            table_path: PathBuf::from("materials.csv"),
            series_path: PathBuf::from("comparison.json"),
            normalization: Normalization::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 값 범위 오류
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Invalid(msg) => write!(f, "잘못된 설정 값: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

const DEFAULT_PATH: &str = "config.toml";

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(DEFAULT_PATH);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 읽고 검증한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 정규화 상수를 검증한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.normalization;
        if !n.scale.is_finite() || n.scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "normalization.scale은 양수여야 합니다: {}",
                n.scale
            )));
        }
        if !n.offset.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "normalization.offset은 유한한 값이어야 합니다: {}",
                n.offset
            )));
        }
        Ok(())
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
