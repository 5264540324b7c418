use serde::Serialize;

use crate::property::{InvalidRangeError, PropertyRecord};
use crate::schema::{PropertySchema, ValueKind};

/// 재료 한 개: 이름, 조성, 스키마 순서대로 나열된 물성 레코드.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    name: String,
    composition: Option<String>,
    properties: Vec<PropertyRecord>,
}

/// 평탄화된 행의 한 칸 (물성 키 → 대표값).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowCell {
    pub key: String,
    pub value: Option<f64>,
}

/// `MaterialRecord::to_row` 결과. 칸 순서는 스키마 순서이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialRow {
    pub name: String,
    pub composition: Option<String>,
    pub cells: Vec<RowCell>,
}

impl MaterialRow {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.cells.iter().find(|c| c.key == key).and_then(|c| c.value)
    }

    /// `name`, `composition` 다음에 물성 키가 이어지는 열 이름 목록.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names = vec!["name", "composition"];
        names.extend(self.cells.iter().map(|c| c.key.as_str()));
        names
    }
}

/// 물성 하나의 전체 통계 스냅샷.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySnapshot {
    pub key: String,
    pub label: String,
    pub units: Option<String>,
    pub kind: ValueKind,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub representative_value: Option<f64>,
    pub dispersion: Option<f64>,
}

impl From<&PropertyRecord> for PropertySnapshot {
    fn from(p: &PropertyRecord) -> Self {
        Self {
            key: p.key().to_string(),
            label: p.name().to_string(),
            units: p.units().map(str::to_string),
            kind: p.kind(),
            lower_bound: p.lower_bound(),
            upper_bound: p.upper_bound(),
            representative_value: p.representative_value(),
            dispersion: p.dispersion(),
        }
    }
}

impl MaterialRecord {
    /// 기본 스키마 전체를 갖춘 빈 재료를 만든다.
    pub fn new(name: &str, composition: Option<&str>) -> Self {
        Self::with_schema(name, composition, &PropertySchema::standard())
    }

    pub fn with_schema(name: &str, composition: Option<&str>, schema: &PropertySchema) -> Self {
        Self {
            name: name.to_string(),
            composition: composition.map(str::to_string),
            properties: schema
                .descriptors()
                .iter()
                .map(PropertyRecord::from_descriptor)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn composition(&self) -> Option<&str> {
        self.composition.as_deref()
    }

    pub fn properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&PropertyRecord> {
        self.properties.iter().find(|p| p.key() == key)
    }

    pub fn property_mut(&mut self, key: &str) -> Option<&mut PropertyRecord> {
        self.properties.iter_mut().find(|p| p.key() == key)
    }

    pub fn property_keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(PropertyRecord::key)
    }

    /// 키로 물성을 찾아 갱신한다. 키가 없으면 `Ok(false)`.
    pub fn update(
        &mut self,
        key: &str,
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
        value: Option<f64>,
    ) -> Result<bool, InvalidRangeError> {
        match self.property_mut(key) {
            Some(p) => {
                p.update(lower_bound, upper_bound, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 비교표가 소비하는 평탄화 행. 현재 필드 상태를 그대로 반영한다.
    pub fn to_row(&self) -> MaterialRow {
        MaterialRow {
            name: self.name.clone(),
            composition: self.composition.clone(),
            cells: self
                .properties
                .iter()
                .map(|p| RowCell {
                    key: p.key().to_string(),
                    value: p.representative_value(),
                })
                .collect(),
        }
    }

    /// 하한/상한/대표값/분산폭/단위를 모두 담은 행.
    pub fn to_detailed_row(&self) -> Vec<PropertySnapshot> {
        self.properties.iter().map(PropertySnapshot::from).collect()
    }
}
