//! 재료 목록 구성. 업데이트 명세(데이터)를 받아 불변 재료 목록을 만든다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::material::MaterialRecord;
use crate::property::InvalidRangeError;
use crate::schema::PropertySchema;

/// 물성 하나에 대한 갱신 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyUpdate {
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl PropertyUpdate {
    pub fn range(property: &str, lower: f64, upper: f64) -> Self {
        Self {
            property: property.to_string(),
            lower_bound: Some(lower),
            upper_bound: Some(upper),
            value: None,
        }
    }

    pub fn single(property: &str, value: f64) -> Self {
        Self {
            property: property.to_string(),
            lower_bound: None,
            upper_bound: None,
            value: Some(value),
        }
    }
}

/// 재료 한 개를 만드는 데 필요한 데이터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyUpdate>,
}

/// TOML 카탈로그 파일 형식. `[[material]]` 테이블 배열을 쓴다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueFile {
    #[serde(default, rename = "material")]
    pub materials: Vec<MaterialSpec>,
}

impl CatalogueFile {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogueError> {
        Ok(toml::from_str(content)?)
    }
}

/// 카탈로그 구성/로드 오류.
#[derive(Debug)]
pub enum CatalogueError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 같은 이름의 재료가 두 번 등장
    DuplicateMaterial(String),
    /// 선택한 재료가 목록에 없음
    UnknownMaterial(String),
    /// 같은 재료를 비교 대상으로 두 번 선택
    RepeatedSelection(String),
    /// 스키마에 없는 물성 갱신
    UnknownProperty { material: String, property: String },
    /// 한 재료에서 같은 물성을 두 번 갱신
    DuplicateUpdate { material: String, property: String },
    /// 범위 확정 실패
    Property {
        material: String,
        source: InvalidRangeError,
    },
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogueError::Io(e) => write!(f, "카탈로그 파일 입출력 오류: {e}"),
            CatalogueError::Parse(e) => write!(f, "카탈로그 파싱 오류: {e}"),
            CatalogueError::DuplicateMaterial(m) => write!(f, "중복된 재료 이름: {m}"),
            CatalogueError::UnknownMaterial(m) => write!(f, "알 수 없는 재료: {m}"),
            CatalogueError::RepeatedSelection(m) => write!(f, "재료가 두 번 선택되었습니다: {m}"),
            CatalogueError::UnknownProperty { material, property } => {
                write!(f, "{material}: 알 수 없는 물성 {property}")
            }
            CatalogueError::DuplicateUpdate { material, property } => {
                write!(f, "{material}: 물성 {property}이(가) 두 번 지정되었습니다")
            }
            CatalogueError::Property { material, source } => write!(f, "{material}: {source}"),
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogueError::Io(e) => Some(e),
            CatalogueError::Parse(e) => Some(e),
            CatalogueError::Property { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogueError {
    fn from(value: std::io::Error) -> Self {
        CatalogueError::Io(value)
    }
}

impl From<toml::de::Error> for CatalogueError {
    fn from(value: toml::de::Error) -> Self {
        CatalogueError::Parse(value)
    }
}

/// 구성이 끝난 재료 목록. 생성 후에는 읽기만 가능하다.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    schema: PropertySchema,
    materials: Vec<MaterialRecord>,
}

impl Catalogue {
    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    pub fn materials(&self) -> &[MaterialRecord] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(MaterialRecord::name)
    }

    /// 이름으로 재료를 찾는다 (대소문자 무시).
    pub fn find(&self, name: &str) -> Option<&MaterialRecord> {
        self.materials
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// 이름 목록 순서대로 재료를 고른다. 빈 목록이면 전체를 카탈로그 순서로 돌려준다.
    ///
    /// 한 비교 안에서 재료 이름은 유일해야 하므로 같은 재료를 두 번 고르면 오류이다.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&MaterialRecord>, CatalogueError> {
        if names.is_empty() {
            return Ok(self.materials.iter().collect());
        }
        let mut picked: Vec<&MaterialRecord> = Vec::with_capacity(names.len());
        for n in names {
            let name = n.as_ref();
            let material = self
                .find(name)
                .ok_or_else(|| CatalogueError::UnknownMaterial(name.to_string()))?;
            if picked.iter().any(|m| std::ptr::eq(*m, material)) {
                return Err(CatalogueError::RepeatedSelection(name.to_string()));
            }
            picked.push(material);
        }
        Ok(picked)
    }
}

/// 스키마와 재료별 갱신 명세로 카탈로그를 만든다.
///
/// 재료 이름은 카탈로그 안에서 유일해야 하며(대소문자 무시),
/// 각 물성은 재료당 한 번만 갱신할 수 있다.
pub fn build_catalogue(
    schema: &PropertySchema,
    specs: &[MaterialSpec],
) -> Result<Catalogue, CatalogueError> {
    let mut materials: Vec<MaterialRecord> = Vec::with_capacity(specs.len());
    for spec in specs {
        if materials
            .iter()
            .any(|m| m.name().eq_ignore_ascii_case(&spec.name))
        {
            return Err(CatalogueError::DuplicateMaterial(spec.name.clone()));
        }
        let material = build_material(schema, spec)?;
        debug!(
            material = %material.name(),
            updates = spec.properties.len(),
            "재료 구성 완료"
        );
        materials.push(material);
    }
    info!(
        materials = materials.len(),
        properties = schema.len(),
        "카탈로그 구성 완료"
    );
    Ok(Catalogue {
        schema: schema.clone(),
        materials,
    })
}

fn build_material(
    schema: &PropertySchema,
    spec: &MaterialSpec,
) -> Result<MaterialRecord, CatalogueError> {
    let mut material = MaterialRecord::with_schema(&spec.name, spec.composition.as_deref(), schema);
    for (i, upd) in spec.properties.iter().enumerate() {
        if spec.properties[..i]
            .iter()
            .any(|prev| prev.property == upd.property)
        {
            return Err(CatalogueError::DuplicateUpdate {
                material: spec.name.clone(),
                property: upd.property.clone(),
            });
        }
        let found = material
            .update(&upd.property, upd.lower_bound, upd.upper_bound, upd.value)
            .map_err(|source| CatalogueError::Property {
                material: spec.name.clone(),
                source,
            })?;
        if !found {
            return Err(CatalogueError::UnknownProperty {
                material: spec.name.clone(),
                property: upd.property.clone(),
            });
        }
    }
    Ok(material)
}

/// TOML 카탈로그 파일을 읽어 카탈로그를 만든다.
pub fn load_catalogue(path: &Path, schema: &PropertySchema) -> Result<Catalogue, CatalogueError> {
    let content = fs::read_to_string(path)?;
    let file = CatalogueFile::from_toml_str(&content)?;
    info!(path = %path.display(), "카탈로그 파일 로드");
    build_catalogue(schema, &file.materials)
}
