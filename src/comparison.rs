//! 재료 비교 파이프라인: 비교표 구성 → 수치 열 선택 → 열별 min-max 정규화 → 차트 시리즈.
//!
//! 모든 단계는 입력을 빌려 새 값을 돌려주는 순수 함수이다.
//! 정규화는 전체 행을 훑어 열 범위를 먼저 구한 뒤에만 값을 변환한다.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::material::MaterialRecord;
use crate::schema::ValueKind;

/// 비교 파이프라인 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// 재료의 물성 목록이 비교표 스키마와 다름
    SchemaMismatch {
        material: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// 열의 최솟값과 최댓값이 같아 정규화할 수 없음
    DegenerateColumn { column: String, value: f64 },
    /// 비교표에 없는 열
    UnknownColumn(String),
}

impl std::fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonError::SchemaMismatch {
                material,
                expected,
                found,
            } => write!(
                f,
                "{material}: 물성 목록이 스키마와 다릅니다 (기대 {}개, 실제 {}개)",
                expected.len(),
                found.len()
            ),
            ComparisonError::DegenerateColumn { column, value } => write!(
                f,
                "{column}: 모든 재료의 값이 {value}(으)로 같아 정규화할 수 없습니다"
            ),
            ComparisonError::UnknownColumn(c) => write!(f, "비교표에 없는 열: {c}"),
        }
    }
}

impl std::error::Error for ComparisonError {}

/// 최솟값 = 최댓값인 열의 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// `ComparisonError::DegenerateColumn`으로 중단
    #[default]
    Error,
    /// 값이 있는 칸을 목표 구간의 중앙(`offset + scale / 2`)으로 둔다
    Midpoint,
}

/// 정규화 상수. 결과는 `[offset, offset + scale]` 구간에 놓인다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalization {
    pub scale: f64,
    pub offset: f64,
    pub degenerate: DegeneratePolicy,
}

impl Normalization {
    pub const DEFAULT_SCALE: f64 = 1.0;
    pub const DEFAULT_OFFSET: f64 = 0.1;

    pub fn lower(&self) -> f64 {
        self.offset
    }

    pub fn upper(&self) -> f64 {
        self.offset + self.scale
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            offset: Self::DEFAULT_OFFSET,
            degenerate: DegeneratePolicy::Error,
        }
    }
}

/// 비교표 열 머리글.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub key: String,
    pub label: String,
    pub units: Option<String>,
    pub kind: ValueKind,
}

/// 재료 한 행. `cells`는 열 순서대로 대표값을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub composition: Option<String>,
    pub cells: Vec<Option<f64>>,
}

/// 재료(행) × 물성(열) 대표값 표.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// 주어진 키의 열만 남긴다. 열 순서는 `keys` 순서를 따른다.
    pub fn select_columns<S: AsRef<str>>(&self, keys: &[S]) -> Result<Self, ComparisonError> {
        let indices = keys
            .iter()
            .map(|k| {
                self.column_index(k.as_ref())
                    .ok_or_else(|| ComparisonError::UnknownColumn(k.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| TableRow {
                    name: r.name.clone(),
                    composition: r.composition.clone(),
                    cells: indices.iter().map(|&i| r.cells[i]).collect(),
                })
                .collect(),
        })
    }
}

/// 이름/조성/범주형 열을 뺀 순수 수치 표.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericTable {
    pub row_labels: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// 열 하나의 값 범위 (null 제외).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

/// 레이더 차트용 시리즈. 재료 하나에 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub axis_labels: Vec<String>,
    pub axis_values: Vec<Option<f64>>,
}

impl ChartSeries {
    /// 값이 있는 축만 `(축 인덱스, 값)`으로 돌려준다.
    pub fn plotted(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.axis_values
            .iter()
            .enumerate()
            .filter_map(|(axis, v)| v.map(|v| (axis, v)))
    }

    /// 값이 없는 축의 인덱스.
    pub fn missing_axes(&self) -> Vec<usize> {
        self.axis_values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(axis, _)| axis)
            .collect()
    }
}

/// 재료 목록으로 비교표를 만든다.
///
/// 열 구성은 첫 재료의 물성 순서를 따르고, 이후 재료는 같은 키 목록을
/// 같은 순서로 가져야 한다. 빈 입력이면 빈 표를 돌려준다.
pub fn build_table<'a, I>(materials: I) -> Result<ComparisonTable, ComparisonError>
where
    I: IntoIterator<Item = &'a MaterialRecord>,
{
    let mut columns: Option<Vec<ColumnHeader>> = None;
    let mut rows = Vec::new();
    for material in materials {
        let cols = columns.get_or_insert_with(|| {
            material
                .properties()
                .iter()
                .map(|p| ColumnHeader {
                    key: p.key().to_string(),
                    label: p.name().to_string(),
                    units: p.units().map(str::to_string),
                    kind: p.kind(),
                })
                .collect()
        });
        let matches = cols.len() == material.properties().len()
            && cols
                .iter()
                .zip(material.property_keys())
                .all(|(c, k)| c.key == k);
        if !matches {
            return Err(ComparisonError::SchemaMismatch {
                material: material.name().to_string(),
                expected: cols.iter().map(|c| c.key.clone()).collect(),
                found: material.property_keys().map(str::to_string).collect(),
            });
        }
        rows.push(TableRow {
            name: material.name().to_string(),
            composition: material.composition().map(str::to_string),
            cells: material
                .properties()
                .iter()
                .map(|p| p.representative_value())
                .collect(),
        });
    }
    debug!(rows = rows.len(), "비교표 구성");
    Ok(ComparisonTable {
        columns: columns.unwrap_or_default(),
        rows,
    })
}

/// 수치형 물성 열만 남긴다.
pub fn select_numeric_columns(table: &ComparisonTable) -> NumericTable {
    let keep: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.kind.is_numeric())
        .map(|(i, _)| i)
        .collect();
    NumericTable {
        row_labels: table.rows.iter().map(|r| r.name.clone()).collect(),
        columns: keep.iter().map(|&i| table.columns[i].key.clone()).collect(),
        values: table
            .rows
            .iter()
            .map(|r| keep.iter().map(|&i| r.cells[i]).collect())
            .collect(),
    }
}

/// 열별 최솟값/최댓값. 값이 하나도 없는 열은 `None`.
pub fn column_ranges(table: &NumericTable) -> Vec<Option<ColumnRange>> {
    (0..table.columns.len())
        .map(|col| {
            table
                .values
                .iter()
                .filter_map(|row| row[col])
                .fold(None, |acc: Option<ColumnRange>, v| {
                    Some(match acc {
                        None => ColumnRange { min: v, max: v },
                        Some(r) => ColumnRange {
                            min: r.min.min(v),
                            max: r.max.max(v),
                        },
                    })
                })
        })
        .collect()
}

/// 열 하나의 정규화 방식.
#[derive(Debug, Clone, Copy)]
enum ColumnScale {
    /// 값이 하나도 없음
    Empty,
    /// 최솟값 = 최댓값 (중앙값 정책)
    Flat,
    Linear(Span),
}

/// 선형 변환 기준: 축소 배율을 곱한 최솟값과 폭.
///
/// `max - min`이 f64 범위를 넘는 열은 양쪽을 반으로 줄여 계산한다.
#[derive(Debug, Clone, Copy)]
struct Span {
    min: f64,
    width: f64,
    factor: f64,
}

impl Span {
    fn of(range: ColumnRange) -> Self {
        let factor = if (range.max - range.min).is_finite() {
            1.0
        } else {
            0.5
        };
        let min = range.min * factor;
        Self {
            min,
            width: range.max * factor - min,
            factor,
        }
    }

    fn fraction(&self, v: f64) -> f64 {
        (v * self.factor - self.min) / self.width
    }
}

/// 각 열을 독립적으로 `(v - min) / (max - min) * scale + offset`으로 변환한다.
///
/// null은 null로 남는다. `max == min`인 열은 `settings.degenerate`에 따른다.
pub fn normalize(
    table: &NumericTable,
    settings: &Normalization,
) -> Result<NumericTable, ComparisonError> {
    let ranges = column_ranges(table);
    let mut scales = Vec::with_capacity(ranges.len());
    for (col, range) in table.columns.iter().zip(&ranges) {
        let scale = match range {
            None => {
                warn!(column = %col, "값이 없는 열은 정규화하지 않습니다");
                ColumnScale::Empty
            }
            Some(r) if r.max == r.min => match settings.degenerate {
                DegeneratePolicy::Error => {
                    return Err(ComparisonError::DegenerateColumn {
                        column: col.clone(),
                        value: r.min,
                    })
                }
                DegeneratePolicy::Midpoint => {
                    warn!(column = %col, value = r.min, "범위가 0인 열을 중앙값으로 둡니다");
                    ColumnScale::Flat
                }
            },
            Some(r) => {
                debug!(column = %col, min = r.min, max = r.max, "열 범위");
                ColumnScale::Linear(Span::of(*r))
            }
        };
        scales.push(scale);
    }

    let values = table
        .values
        .iter()
        .map(|row| {
            row.iter()
                .zip(&scales)
                .map(|(cell, scale)| match (cell, scale) {
                    (Some(_), ColumnScale::Flat) => Some(settings.offset + settings.scale / 2.0),
                    (Some(v), ColumnScale::Linear(span)) => {
                        Some(span.fraction(*v) * settings.scale + settings.offset)
                    }
                    _ => None,
                })
                .collect()
        })
        .collect();

    Ok(NumericTable {
        row_labels: table.row_labels.clone(),
        columns: table.columns.clone(),
        values,
    })
}

/// 정규화된 표의 각 행을 차트 시리즈로 바꾼다. 행/열 순서를 유지한다.
pub fn to_chart_series(table: &NumericTable) -> Vec<ChartSeries> {
    table
        .row_labels
        .iter()
        .zip(&table.values)
        .map(|(label, row)| ChartSeries {
            label: label.clone(),
            axis_labels: table.columns.clone(),
            axis_values: row.clone(),
        })
        .collect()
}

/// 표 구성부터 시리즈 생성까지 한 번에 수행한다.
///
/// `properties`가 비어 있으면 스키마의 모든 열을 쓴다.
pub fn compare<'a, I, S>(
    materials: I,
    properties: &[S],
    settings: &Normalization,
) -> Result<Vec<ChartSeries>, ComparisonError>
where
    I: IntoIterator<Item = &'a MaterialRecord>,
    S: AsRef<str>,
{
    let mut table = build_table(materials)?;
    if !properties.is_empty() {
        table = table.select_columns(properties)?;
    }
    let numeric = select_numeric_columns(&table);
    let normalized = normalize(&numeric, settings)?;
    Ok(to_chart_series(&normalized))
}
