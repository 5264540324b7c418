use crate::schema::{PropertyDescriptor, ValueKind};

/// 물성 갱신 시 범위를 확정할 수 없을 때의 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidRangeError {
    /// 하한도 대표값도 주어지지 않음
    MissingLowerBound(String),
    /// 상한도 대표값도 주어지지 않음
    MissingUpperBound(String),
    /// NaN 또는 무한대 입력
    NotFinite(String),
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidRangeError::MissingLowerBound(p) => {
                write!(f, "{p}: 하한 또는 대표값이 필요합니다")
            }
            InvalidRangeError::MissingUpperBound(p) => {
                write!(f, "{p}: 상한 또는 대표값이 필요합니다")
            }
            InvalidRangeError::NotFinite(p) => write!(f, "{p}: 유한한 수치가 아닙니다"),
        }
    }
}

impl std::error::Error for InvalidRangeError {}

/// 재료 한 개가 가진 물성 하나.
///
/// 하한/상한/대표값/분산폭은 `update` 전까지 모두 `None`이다.
/// 분산폭은 `상한 - 대표값`으로 정의되며 수치형에만 계산된다.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    key: String,
    name: String,
    units: Option<String>,
    kind: ValueKind,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    representative_value: Option<f64>,
    dispersion: Option<f64>,
}

impl PropertyRecord {
    pub fn new(key: &str, name: &str, units: Option<&str>, kind: ValueKind) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            units: units.map(str::to_string),
            kind,
            lower_bound: None,
            upper_bound: None,
            representative_value: None,
            dispersion: None,
        }
    }

    pub fn from_descriptor(d: &PropertyDescriptor) -> Self {
        Self::new(&d.key, &d.label, d.units.as_deref(), d.kind)
    }

    /// 하한/상한/대표값 조합으로 네 필드를 확정한다.
    ///
    /// - 하한이 없으면 대표값을, 상한이 없으면 대표값을 쓴다.
    /// - 대표값이 없고 수치형이면 하한과 상한의 중점을 쓴다.
    /// - 수치형이면 분산폭 = 상한 - 대표값.
    ///
    /// 하한이 상한보다 커도 주어진 그대로 저장한다.
    /// 이전 상태는 참조하지 않는다. 실패하면 레코드는 바뀌지 않는다.
    pub fn update(
        &mut self,
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
        representative_value: Option<f64>,
    ) -> Result<(), InvalidRangeError> {
        let inputs = [lower_bound, upper_bound, representative_value];
        if inputs.iter().flatten().any(|v| !v.is_finite()) {
            return Err(InvalidRangeError::NotFinite(self.key.clone()));
        }

        let lower = lower_bound
            .or(representative_value)
            .ok_or_else(|| InvalidRangeError::MissingLowerBound(self.key.clone()))?;
        let upper = upper_bound
            .or(representative_value)
            .ok_or_else(|| InvalidRangeError::MissingUpperBound(self.key.clone()))?;

        let value = match representative_value {
            Some(v) => Some(v),
            // 큰 유한값끼리 더해 무한대가 되지 않도록 반씩 더한다.
            None if self.kind.is_numeric() => Some(lower / 2.0 + upper / 2.0),
            None => None,
        };

        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self.representative_value = value;
        self.dispersion = if self.kind.is_numeric() {
            value.map(|v| upper - v)
        } else {
            None
        };
        Ok(())
    }

    /// 하한~상한 범위만으로 갱신한다.
    pub fn set_range(&mut self, lower: f64, upper: f64) -> Result<(), InvalidRangeError> {
        self.update(Some(lower), Some(upper), None)
    }

    /// 단일 값으로 갱신한다. 하한 = 상한 = 대표값.
    pub fn set_value(&mut self, value: f64) -> Result<(), InvalidRangeError> {
        self.update(None, None, Some(value))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn lower_bound(&self) -> Option<f64> {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> Option<f64> {
        self.upper_bound
    }

    pub fn representative_value(&self) -> Option<f64> {
        self.representative_value
    }

    pub fn dispersion(&self) -> Option<f64> {
        self.dispersion
    }

    /// 한 번이라도 갱신되었는지 여부.
    pub fn is_set(&self) -> bool {
        self.lower_bound.is_some()
    }
}
