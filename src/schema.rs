use serde::{Deserialize, Serialize};

/// 물성값의 성격. 수치형만 중앙값·분산폭 계산과 정규화 대상이 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// 범위/대표값이 모두 의미 있는 수치
    #[default]
    Numeric,
    /// 비교 축으로 쓰지 않는 범주형/불투명 값
    Opaque,
}

impl ValueKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Numeric)
    }
}

/// 스키마 한 칸: 안정적인 키, 표시 이름, 단위, 값 종류.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub kind: ValueKind,
}

impl PropertyDescriptor {
    pub fn numeric(key: &str, label: &str, units: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            units: Some(units.to_string()),
            kind: ValueKind::Numeric,
        }
    }
}

/// 스키마 구성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// 같은 키가 두 번 등장함
    DuplicateKey(String),
    /// 스키마에 없는 물성 키
    UnknownProperty(String),
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::DuplicateKey(k) => write!(f, "중복된 물성 키: {k}"),
            SchemaError::UnknownProperty(k) => write!(f, "알 수 없는 물성: {k}"),
        }
    }
}

impl std::error::Error for SchemaError {}

/// 모든 재료가 공유하는 순서 고정 물성 목록.
///
/// 재료 레코드는 생성 시 이 목록으로부터 물성 레코드를 만들고,
/// 비교표의 열 순서도 이 순서를 그대로 따른다.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    descriptors: Vec<PropertyDescriptor>,
}

impl PropertySchema {
    /// 키 중복을 검사한 뒤 스키마를 만든다.
    pub fn new(descriptors: Vec<PropertyDescriptor>) -> Result<Self, SchemaError> {
        for (i, d) in descriptors.iter().enumerate() {
            if descriptors[..i].iter().any(|prev| prev.key == d.key) {
                return Err(SchemaError::DuplicateKey(d.key.clone()));
            }
        }
        Ok(Self { descriptors })
    }

    /// 기본 28개 물성 스키마 (가격 → 재활용 비율 순).
    pub fn standard() -> Self {
        let descriptors = STANDARD_PROPERTIES
            .iter()
            .map(|(key, label, units)| PropertyDescriptor::numeric(key, label, units))
            .collect();
        Self { descriptors }
    }

    /// 지정한 키만 남긴 스키마를 만든다. 순서는 호출자가 준 순서를 따른다.
    pub fn restricted<S: AsRef<str>>(&self, keys: &[S]) -> Result<Self, SchemaError> {
        let mut picked = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            let d = self
                .descriptor(key)
                .ok_or_else(|| SchemaError::UnknownProperty(key.to_string()))?;
            picked.push(d.clone());
        }
        Self::new(picked)
    }

    pub fn descriptors(&self) -> &[PropertyDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, key: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.iter().find(|d| d.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for PropertySchema {
    fn default() -> Self {
        Self::standard()
    }
}

// (키, 표시 이름, 단위)
const STANDARD_PROPERTIES: &[(&str, &str, &str)] = &[
    ("price", "Price", "USD/kg"),
    ("density", "Density", "kg/m3"),
    ("young_modulus", "Young's modulus", "GPa"),
    ("yield_strength", "Elastic limit", "MPa"),
    ("tensile_strength", "Tensile strength", "MPa"),
    ("elongation", "Elongation", "%"),
    ("hardness", "Hardness Vickers", "HV"),
    ("fatigue_strength", "Fatigue limit", "MPa"),
    ("fracture_toughness", "Fracture toughness", "MPa·m1/2"),
    ("melting_point", "Melting point", "°C"),
    ("max_service_temperature", "Maximum service temperature", "°C"),
    ("thermal_conductivity", "Thermal conductivity", "W/mK"),
    ("specific_heat_capacity", "Specific heat capacity", "J/kgK"),
    ("thermal_expansion_coefficient", "Thermal expansion coefficient", "10-6/°C"),
    ("electrical_resistivity", "Electrical resistivity", "10-6 Ohm cm"),
    ("global_production", "Global production", "t/yr"),
    ("reserves", "Reserves", "t"),
    (
        "embodied_energy_primary_production",
        "Embodied energy, primary production",
        "MJ/kg",
    ),
    (
        "co2_footprint_primary_production",
        "CO2 footprint, primary production",
        "kg/kg",
    ),
    ("water_usage", "Water usage", "l/kg"),
    ("eco_indicator", "Eco-indicator", "millipoints/kg"),
    ("casting_energy", "Casting energy", "MJ/kg"),
    ("casting_co2_footprint", "Casting CO2 footprint", "kg/kg"),
    ("deformation_energy", "Deformation energy", "MJ/kg"),
    ("deformation_co2_footprint", "Deformation CO2 footprint", "kg/kg"),
    ("embodied_energy_recycling", "Embodied energy, recycling", "MJ/kg"),
    ("co2_footprint_recycling", "CO2 footprint, recycling", "kg/kg"),
    ("recycle_fraction", "Recycle fraction", "%"),
];
