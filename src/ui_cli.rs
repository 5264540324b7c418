use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::catalogue::Catalogue;
use crate::comparison::ChartSeries;
use crate::material::MaterialRecord;
use crate::schema::{PropertySchema, ValueKind};

/// 재료 물성 비교 도구 (CLI).
#[derive(Debug, Parser)]
#[command(name = "material_comparison_toolbox_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    /// TOML 카탈로그 경로. 설정 파일 값을 덮어쓴다.
    #[arg(long, global = true)]
    pub catalogue: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 재료 목록
    List,
    /// 물성 스키마
    Schema,
    /// 재료 한 개의 전체 물성
    Show {
        material: String,
    },
    /// 정규화 비교 행렬 출력
    Compare {
        /// 비교할 재료 (반복 지정 가능)
        #[arg(long = "material", short = 'm')]
        materials: Vec<String>,
        /// 비교 축 물성 키 (반복 지정 가능)
        #[arg(long = "property", short = 'p')]
        properties: Vec<String>,
        /// 차트 시리즈 JSON 저장 경로
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// 재료 표를 CSV로 저장
    Export {
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Show,
    Compare,
    Export,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Material Comparison Toolbox ===");
    println!("1) 재료 목록");
    println!("2) 재료 물성 보기");
    println!("3) 재료 비교");
    println!("4) CSV 내보내기");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::List),
            "2" => return Ok(MenuChoice::Show),
            "3" => return Ok(MenuChoice::Compare),
            "4" => return Ok(MenuChoice::Export),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 쉼표로 구분된 목록을 입력받는다. 빈 입력이면 빈 목록.
pub fn read_list(prompt: &str) -> Result<Vec<String>, AppError> {
    let line = read_line(prompt)?;
    Ok(line
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

pub fn print_material_list(catalogue: &Catalogue) {
    println!("\n-- 재료 목록 ({}종) --", catalogue.len());
    for (i, m) in catalogue.materials().iter().enumerate() {
        println!("{:>2}) {}  [{}]", i + 1, m.name(), m.composition().unwrap_or("-"));
    }
}

pub fn print_schema(schema: &PropertySchema) {
    println!("\n-- 물성 스키마 ({}개) --", schema.len());
    for d in schema.descriptors() {
        let kind = match d.kind {
            ValueKind::Numeric => "numeric",
            ValueKind::Opaque => "opaque",
        };
        println!(
            "{:<36} {:<38} {:<16} {kind}",
            d.key,
            d.label,
            d.units.as_deref().unwrap_or("-")
        );
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.4}"),
        None => "-".to_string(),
    }
}

pub fn print_material(material: &MaterialRecord) {
    println!("\n-- {} --", material.name());
    println!("조성: {}", material.composition().unwrap_or("-"));
    println!(
        "{:<38} {:>14} {:>14} {:>14} {:>14}  단위",
        "물성", "하한", "상한", "대표값", "분산폭"
    );
    for p in material.properties() {
        println!(
            "{:<38} {:>14} {:>14} {:>14} {:>14}  {}",
            p.name(),
            fmt_opt(p.lower_bound()),
            fmt_opt(p.upper_bound()),
            fmt_opt(p.representative_value()),
            fmt_opt(p.dispersion()),
            p.units().unwrap_or("")
        );
    }
}

/// 정규화 결과를 물성(행) × 재료(열) 행렬로 출력한다.
pub fn print_series(series: &[ChartSeries]) {
    let Some(first) = series.first() else {
        println!("비교할 재료가 없습니다.");
        return;
    };
    println!("\n-- Material comparison (정규화) --");
    print!("{:<36}", "");
    for s in series {
        print!(" {:>12}", truncate(&s.label, 12));
    }
    println!();
    for (axis, label) in first.axis_labels.iter().enumerate() {
        print!("{label:<36}");
        for s in series {
            print!(" {:>12}", fmt_opt(s.axis_values[axis]));
        }
        println!();
    }
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}
