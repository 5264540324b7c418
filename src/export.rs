//! 비교 결과 내보내기.
//!
//! 스프레드시트용 CSV는 재료마다 통계(하한/상한/대표값/분산폭)당 한 행을 쓰는
//! 긴 형식이며, 맨 앞에 단위 행을 한 번 둔다.
//!
//! ```text
//! material,composition,statistic,price,density,...
//! ,,units,USD/kg,kg/m3,...
//! Low carbon steel,Fe/0.02-0.3C,lower_bound,0.68,7800,...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::comparison::ChartSeries;
use crate::material::{MaterialRecord, PropertySnapshot};

/// 내보내기 오류.
#[derive(Debug)]
pub enum ExportError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "내보내기 입출력 오류: {e}"),
            ExportError::Json(e) => write!(f, "JSON 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        ExportError::Io(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        ExportError::Json(value)
    }
}

/// 재료별로 내보내는 통계 종류.
pub const STATISTICS: [&str; 4] = ["lower_bound", "upper_bound", "value", "dispersion"];

fn statistic(p: &PropertySnapshot, stat: &str) -> Option<f64> {
    match stat {
        "lower_bound" => p.lower_bound,
        "upper_bound" => p.upper_bound,
        "value" => p.representative_value,
        "dispersion" => p.dispersion,
        _ => None,
    }
}

/// 쉼표/따옴표/줄바꿈이 있으면 따옴표로 감싼다.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn csv_number(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// 재료 목록을 긴 형식 CSV로 쓴다. 열 구성은 첫 재료의 물성 순서를 따른다.
pub fn write_table_csv<'a, I>(materials: I, writer: &mut dyn Write) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a MaterialRecord>,
{
    let mut header_written = false;
    for material in materials {
        let detail = material.to_detailed_row();
        if !header_written {
            let mut header = vec![
                "material".to_string(),
                "composition".to_string(),
                "statistic".to_string(),
            ];
            header.extend(detail.iter().map(|p| csv_field(&p.key)));
            writeln!(writer, "{}", header.join(","))?;

            let mut units = vec![String::new(), String::new(), "units".to_string()];
            units.extend(
                detail
                    .iter()
                    .map(|p| csv_field(p.units.as_deref().unwrap_or(""))),
            );
            writeln!(writer, "{}", units.join(","))?;
            header_written = true;
        }

        for stat in STATISTICS {
            let mut line = vec![
                csv_field(material.name()),
                csv_field(material.composition().unwrap_or("")),
                stat.to_string(),
            ];
            line.extend(detail.iter().map(|p| csv_number(statistic(p, stat))));
            writeln!(writer, "{}", line.join(","))?;
        }
    }
    Ok(())
}

/// 차트 시리즈를 들여쓴 JSON 배열로 쓴다.
pub fn write_series_json(series: &[ChartSeries], writer: &mut dyn Write) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, series)?;
    writeln!(writer)?;
    Ok(())
}

pub fn save_table_csv<'a, I>(materials: I, path: &Path) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a MaterialRecord>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_table_csv(materials, &mut out)?;
    out.flush()?;
    info!(path = %path.display(), "재료 표 저장");
    Ok(())
}

pub fn save_series_json(series: &[ChartSeries], path: &Path) -> Result<(), ExportError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_series_json(series, &mut out)?;
    out.flush()?;
    info!(path = %path.display(), series = series.len(), "차트 시리즈 저장");
    Ok(())
}
