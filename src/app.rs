use std::path::Path;
use tracing::info;

use crate::builtin;
use crate::catalogue::{self, Catalogue, CatalogueError};
use crate::comparison::{self, ChartSeries, ComparisonError};
use crate::config::{Config, ConfigError};
use crate::export::{self, ExportError};
use crate::schema::PropertySchema;
use crate::ui_cli::{self, Cli, Command, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 카탈로그 구성 오류
    Catalogue(CatalogueError),
    /// 비교 파이프라인 오류
    Comparison(ComparisonError),
    /// 내보내기 오류
    Export(ExportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Catalogue(e) => write!(f, "카탈로그 오류: {e}"),
            AppError::Comparison(e) => write!(f, "비교 오류: {e}"),
            AppError::Export(e) => write!(f, "내보내기 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CatalogueError> for AppError {
    fn from(value: CatalogueError) -> Self {
        AppError::Catalogue(value)
    }
}

impl From<ComparisonError> for AppError {
    fn from(value: ComparisonError) -> Self {
        AppError::Comparison(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        AppError::Export(value)
    }
}

/// 설정에 지정된 카탈로그 파일을 읽거나, 없으면 내장 카탈로그를 만든다.
pub fn open_catalogue(cfg: &Config) -> Result<Catalogue, AppError> {
    let catalogue = match &cfg.catalogue_path {
        Some(path) => catalogue::load_catalogue(path, &PropertySchema::standard())?,
        None => builtin::catalogue()?,
    };
    Ok(catalogue)
}

/// 선택한 재료/물성으로 비교 시리즈를 만든다. 빈 목록은 설정값, 그것도 비면 전체.
pub fn build_series(
    catalogue: &Catalogue,
    cfg: &Config,
    materials: &[String],
    properties: &[String],
) -> Result<Vec<ChartSeries>, AppError> {
    let materials = if materials.is_empty() {
        cfg.materials.as_slice()
    } else {
        materials
    };
    let properties = if properties.is_empty() {
        cfg.properties.as_slice()
    } else {
        properties
    };
    let selected = catalogue.select(materials)?;
    let series = comparison::compare(selected, properties, &cfg.normalization)?;
    info!(series = series.len(), "비교 시리즈 생성");
    Ok(series)
}

/// 명령줄 인자에 따라 한 번 실행하거나, 명령이 없으면 메뉴 루프를 돈다.
pub fn run(cli: Cli, cfg: &mut Config) -> Result<(), AppError> {
    if let Some(path) = cli.catalogue {
        cfg.catalogue_path = Some(path);
    }
    let catalogue = open_catalogue(cfg)?;
    match cli.command {
        Some(command) => execute(&catalogue, cfg, command),
        None => interactive(&catalogue, cfg),
    }
}

fn execute(catalogue: &Catalogue, cfg: &Config, command: Command) -> Result<(), AppError> {
    match command {
        Command::List => ui_cli::print_material_list(catalogue),
        Command::Schema => ui_cli::print_schema(catalogue.schema()),
        Command::Show { material } => {
            let m = catalogue
                .find(&material)
                .ok_or(CatalogueError::UnknownMaterial(material))?;
            ui_cli::print_material(m);
        }
        Command::Compare {
            materials,
            properties,
            json,
        } => {
            let series = build_series(catalogue, cfg, &materials, &properties)?;
            ui_cli::print_series(&series);
            if let Some(path) = json {
                export::save_series_json(&series, &path)?;
                println!("저장됨: {}", path.display());
            }
        }
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| cfg.table_path.clone());
            export_table(catalogue, cfg, &path)?;
        }
    }
    Ok(())
}

fn export_table(catalogue: &Catalogue, cfg: &Config, path: &Path) -> Result<(), AppError> {
    let selected = catalogue.select(&cfg.materials)?;
    export::save_table_csv(selected, path)?;
    println!("저장됨: {}", path.display());
    Ok(())
}

fn interactive(catalogue: &Catalogue, cfg: &Config) -> Result<(), AppError> {
    loop {
        let result = match ui_cli::main_menu()? {
            MenuChoice::List => {
                ui_cli::print_material_list(catalogue);
                Ok(())
            }
            MenuChoice::Show => {
                let name = ui_cli::read_line("재료 이름: ")?;
                match catalogue.find(name.trim()) {
                    Some(m) => ui_cli::print_material(m),
                    None => println!("해당 재료가 없습니다."),
                }
                Ok(())
            }
            MenuChoice::Compare => {
                let materials = ui_cli::read_list("재료 이름(쉼표 구분, 엔터=전체): ")?;
                let properties = ui_cli::read_list("물성 키(쉼표 구분, 엔터=전체): ")?;
                build_series(catalogue, cfg, &materials, &properties)
                    .map(|series| ui_cli::print_series(&series))
            }
            MenuChoice::Export => export_table(catalogue, cfg, &cfg.table_path),
            MenuChoice::Exit => break,
        };
        // 메뉴 안의 계산 오류는 출력만 하고 루프를 유지한다.
        if let Err(e) = result {
            println!("오류: {e}");
        }
    }
    Ok(())
}
