//! 내장 참고용 재료 카탈로그 (일반 구조용 합금 9종).
//! 값은 문헌 범위의 참고치이며 설계 시 최신 데이터시트로 검증해야 한다.

use crate::catalogue::{build_catalogue, Catalogue, CatalogueError, MaterialSpec, PropertyUpdate};
use crate::schema::PropertySchema;

#[derive(Debug, Clone, Copy)]
pub struct BuiltinEntry {
    pub property: &'static str,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub value: Option<f64>,
}

impl BuiltinEntry {
    fn to_update(self) -> PropertyUpdate {
        PropertyUpdate {
            property: self.property.to_string(),
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            value: self.value,
        }
    }
}

#[derive(Debug)]
pub struct BuiltinMaterial {
    pub name: &'static str,
    pub composition: &'static str,
    pub entries: &'static [BuiltinEntry],
}

impl BuiltinMaterial {
    pub fn to_spec(&self) -> MaterialSpec {
        MaterialSpec {
            name: self.name.to_string(),
            composition: Some(self.composition.to_string()),
            properties: self.entries.iter().map(|e| e.to_update()).collect(),
        }
    }
}

pub fn materials() -> &'static [BuiltinMaterial] {
    MATERIALS
}

/// 내장 데이터를 갱신 명세 목록으로 변환한다.
pub fn specs() -> Vec<MaterialSpec> {
    MATERIALS.iter().map(BuiltinMaterial::to_spec).collect()
}

/// 기본 스키마로 내장 카탈로그를 구성한다.
pub fn catalogue() -> Result<Catalogue, CatalogueError> {
    build_catalogue(&PropertySchema::standard(), &specs())
}

const fn range(property: &'static str, lower: f64, upper: f64) -> BuiltinEntry {
    BuiltinEntry {
        property,
        lower_bound: Some(lower),
        upper_bound: Some(upper),
        value: None,
    }
}

const fn single(property: &'static str, value: f64) -> BuiltinEntry {
    BuiltinEntry {
        property,
        lower_bound: None,
        upper_bound: None,
        value: Some(value),
    }
}

// 주철(구상흑연)은 변형 가공 에너지/CO2 데이터가 없어 비워 둔다.
const MATERIALS: &[BuiltinMaterial] = &[
    BuiltinMaterial {
        name: "Low carbon steel",
        composition: "Fe/0.02-0.3C",
        entries: &[
            range("density", 7800.0, 7900.0),
            range("price", 0.68, 0.74),
            range("young_modulus", 200.0, 215.0),
            range("yield_strength", 250.0, 395.0),
            range("tensile_strength", 345.0, 580.0),
            range("elongation", 26.0, 47.0),
            range("hardness", 107.0, 172.0),
            range("fatigue_strength", 203.0, 293.0),
            range("fracture_toughness", 41.0, 82.0),
            range("melting_point", 1480.0, 1530.0),
            range("max_service_temperature", 350.0, 400.0),
            range("thermal_conductivity", 49.0, 54.0),
            range("specific_heat_capacity", 460.0, 505.0),
            range("thermal_expansion_coefficient", 11.5, 13.0),
            range("electrical_resistivity", 15.0, 20.0),
            single("global_production", 2.3e9),
            single("reserves", 1.6e11),
            range("embodied_energy_primary_production", 25.0, 28.0),
            range("co2_footprint_primary_production", 1.7, 1.9),
            range("water_usage", 23.0, 69.0),
            single("eco_indicator", 106.0),
            range("casting_energy", 11.0, 12.2),
            range("casting_co2_footprint", 0.8, 0.9),
            range("deformation_energy", 3.0, 6.0),
            range("deformation_co2_footprint", 0.22, 0.46),
            range("embodied_energy_recycling", 6.6, 8.0),
            range("co2_footprint_recycling", 0.4, 0.48),
            range("recycle_fraction", 40.0, 44.0),
        ],
    },
    BuiltinMaterial {
        name: "Low alloy steel",
        composition: "Fe/1.0 C/<2.5 Cr/<2.5 Ni/<2.5Mo/<2.5 V",
        entries: &[
            range("density", 7800.0, 7900.0),
            range("price", 0.9, 1.1),
            range("young_modulus", 205.0, 217.0),
            range("yield_strength", 400.0, 1500.0),
            range("tensile_strength", 550.0, 1760.0),
            range("elongation", 3.0, 38.0),
            range("hardness", 140.0, 692.0),
            range("fatigue_strength", 248.0, 700.0),
            range("fracture_toughness", 14.0, 200.0),
            range("melting_point", 1380.0, 1530.0),
            range("max_service_temperature", 500.0, 530.0),
            range("thermal_conductivity", 34.0, 55.0),
            range("specific_heat_capacity", 410.0, 530.0),
            range("thermal_expansion_coefficient", 10.5, 13.5),
            range("electrical_resistivity", 15.0, 35.0),
            single("global_production", 2.3e9),
            single("reserves", 1.59e11),
            range("embodied_energy_primary_production", 31.0, 34.0),
            range("co2_footprint_primary_production", 1.9, 2.1),
            range("water_usage", 37.0, 111.0),
            single("eco_indicator", 200.0),
            range("casting_energy", 10.9, 12.0),
            range("casting_co2_footprint", 0.8, 0.9),
            range("deformation_energy", 7.0, 14.0),
            range("deformation_co2_footprint", 0.5, 1.1),
            range("embodied_energy_recycling", 7.7, 9.5),
            range("co2_footprint_recycling", 0.47, 0.57),
            range("recycle_fraction", 40.0, 44.0),
        ],
    },
    BuiltinMaterial {
        name: "Stainless steel",
        composition: "Fe/0.25 C/<16-30 Cr/3.5 - 37 Ni/<10 Mo + Si,P,S,N",
        entries: &[
            range("density", 7600.0, 8100.0),
            range("price", 8.2, 9.1),
            range("young_modulus", 189.0, 210.0),
            range("yield_strength", 170.0, 1000.0),
            range("tensile_strength", 480.0, 2240.0),
            range("elongation", 5.0, 70.0),
            range("hardness", 130.0, 570.0),
            range("fatigue_strength", 175.0, 753.0),
            range("fracture_toughness", 62.0, 150.0),
            range("melting_point", 1370.0, 1450.0),
            range("max_service_temperature", 750.0, 820.0),
            range("thermal_conductivity", 12.0, 24.0),
            range("specific_heat_capacity", 450.0, 530.0),
            range("thermal_expansion_coefficient", 13.0, 20.0),
            range("electrical_resistivity", 64.0, 107.0),
            single("global_production", 3.0e7),
            single("reserves", 2.5e9),
            range("embodied_energy_primary_production", 81.0, 88.0),
            range("co2_footprint_primary_production", 4.7, 5.2),
            range("water_usage", 112.0, 336.0),
            single("eco_indicator", 310.0),
            range("casting_energy", 10.0, 12.0),
            range("casting_co2_footprint", 0.8, 0.9),
            range("deformation_energy", 5.0, 11.4),
            range("deformation_co2_footprint", 0.4, 0.8),
            range("embodied_energy_recycling", 11.0, 13.0),
            range("co2_footprint_recycling", 0.65, 0.8),
            range("recycle_fraction", 35.0, 40.0),
        ],
    },
    BuiltinMaterial {
        name: "Cast iron, ductile (nodular)",
        composition: "Fe/3.2-4.1%C/1.8-2.8% Si/<0.8% Mn/<0.1% P/<0.03% S",
        entries: &[
            range("density", 7050.0, 7250.0),
            range("price", 0.5, 0.65),
            range("young_modulus", 165.0, 180.0),
            range("yield_strength", 250.0, 680.0),
            range("tensile_strength", 410.0, 830.0),
            range("elongation", 3.0, 18.0),
            range("hardness", 115.0, 320.0),
            range("fatigue_strength", 180.0, 330.0),
            range("fracture_toughness", 22.0, 54.0),
            range("melting_point", 1130.0, 1250.0),
            range("max_service_temperature", 350.0, 745.0),
            range("thermal_conductivity", 29.0, 44.0),
            range("specific_heat_capacity", 460.0, 495.0),
            range("thermal_expansion_coefficient", 10.0, 12.5),
            range("electrical_resistivity", 49.0, 56.0),
            single("global_production", 2.3e9),
            single("reserves", 1.59e11),
            range("embodied_energy_primary_production", 16.0, 20.0),
            range("co2_footprint_primary_production", 1.4, 1.6),
            range("water_usage", 13.0, 39.0),
            single("eco_indicator", 80.0),
            range("casting_energy", 10.0, 11.0),
            range("casting_co2_footprint", 0.75, 0.83),
            range("embodied_energy_recycling", 10.0, 11.0),
            range("co2_footprint_recycling", 0.48, 0.55),
            range("recycle_fraction", 66.0, 72.0),
        ],
    },
    BuiltinMaterial {
        name: "Aluminium alloys",
        composition: "Al + Mg, Mn, Cr, Cu, Zn, Zr, Li",
        entries: &[
            range("density", 2500.0, 2900.0),
            range("price", 2.4, 2.7),
            range("young_modulus", 68.0, 82.0),
            range("yield_strength", 30.0, 550.0),
            range("tensile_strength", 58.0, 550.0),
            range("elongation", 1.0, 44.0),
            range("hardness", 12.0, 150.0),
            range("fatigue_strength", 22.0, 160.0),
            range("fracture_toughness", 22.0, 35.0),
            range("melting_point", 495.0, 640.0),
            range("max_service_temperature", 120.0, 200.0),
            range("thermal_conductivity", 76.0, 240.0),
            range("specific_heat_capacity", 860.0, 990.0),
            range("thermal_expansion_coefficient", 21.0, 24.0),
            range("electrical_resistivity", 2.5, 6.0),
            single("global_production", 3.7e7),
            single("reserves", 2.0e9),
            range("embodied_energy_primary_production", 200.0, 220.0),
            range("co2_footprint_primary_production", 11.0, 13.0),
            range("water_usage", 495.0, 1490.0),
            single("eco_indicator", 710.0),
            range("casting_energy", 11.0, 12.2),
            range("casting_co2_footprint", 0.82, 0.91),
            range("deformation_energy", 3.3, 6.8),
            range("deformation_co2_footprint", 0.19, 0.23),
            range("embodied_energy_recycling", 22.0, 30.0),
            range("co2_footprint_recycling", 1.9, 2.3),
            range("recycle_fraction", 41.0, 45.0),
        ],
    },
    BuiltinMaterial {
        name: "Magnesium alloys",
        composition: "Mg + Al, Mn, Si, Zn, Cu, Li, rare elements",
        entries: &[
            range("density", 1740.0, 1950.0),
            range("price", 4.7, 5.1),
            range("young_modulus", 42.0, 47.0),
            range("yield_strength", 70.0, 400.0),
            range("tensile_strength", 185.0, 475.0),
            range("elongation", 3.5, 18.0),
            range("hardness", 35.0, 135.0),
            range("fatigue_strength", 60.0, 225.0),
            range("fracture_toughness", 12.0, 18.0),
            range("melting_point", 447.0, 649.0),
            range("max_service_temperature", 120.0, 200.0),
            range("thermal_conductivity", 50.0, 156.0),
            range("specific_heat_capacity", 955.0, 1060.0),
            range("thermal_expansion_coefficient", 24.6, 28.0),
            range("electrical_resistivity", 4.15, 15.0),
            single("global_production", 600000.0),
            single("reserves", 1.0e9),
            range("embodied_energy_primary_production", 300.0, 330.0),
            range("co2_footprint_primary_production", 34.0, 38.0),
            range("water_usage", 500.0, 1500.0),
            single("eco_indicator", 1500.0),
            range("casting_energy", 11.1, 12.3),
            range("casting_co2_footprint", 0.83, 0.92),
            range("deformation_energy", 3.8, 6.6),
            range("deformation_co2_footprint", 0.3, 0.5),
            range("embodied_energy_recycling", 23.0, 26.0),
            range("co2_footprint_recycling", 2.6, 3.2),
            range("recycle_fraction", 36.0, 41.0),
        ],
    },
    BuiltinMaterial {
        name: "Titanium alloys",
        composition: "Ti + Al, Zr, Cr, Mo, Si, Sn, Ni, Fe, V",
        entries: &[
            range("density", 4400.0, 4800.0),
            range("price", 57.0, 63.0),
            range("young_modulus", 110.0, 120.0),
            range("yield_strength", 750.0, 1200.0),
            range("tensile_strength", 800.0, 1450.0),
            range("elongation", 5.0, 10.0),
            range("hardness", 267.0, 380.0),
            range("fatigue_strength", 589.0, 617.0),
            range("fracture_toughness", 55.0, 70.0),
            range("melting_point", 1480.0, 1680.0),
            range("max_service_temperature", 450.0, 500.0),
            range("thermal_conductivity", 7.0, 14.0),
            range("specific_heat_capacity", 645.0, 655.0),
            range("thermal_expansion_coefficient", 8.9, 9.6),
            range("electrical_resistivity", 100.0, 170.0),
            single("global_production", 200000.0),
            single("reserves", 7.2e8),
            range("embodied_energy_primary_production", 650.0, 720.0),
            range("co2_footprint_primary_production", 44.0, 49.0),
            range("water_usage", 470.0, 1410.0),
            single("eco_indicator", 3450.0),
            range("casting_energy", 12.6, 13.9),
            range("casting_co2_footprint", 0.9, 1.0),
            range("deformation_energy", 14.0, 15.0),
            range("deformation_co2_footprint", 1.1, 1.2),
            range("embodied_energy_recycling", 78.0, 96.0),
            range("co2_footprint_recycling", 4.7, 5.7),
            range("recycle_fraction", 21.0, 24.0),
        ],
    },
    BuiltinMaterial {
        name: "Nickel-chromium alloys",
        composition: "Ni+ 10 to 30% Cr+ 0 to 10% Fe",
        entries: &[
            range("density", 8300.0, 8500.0),
            range("price", 33.0, 36.0),
            range("young_modulus", 200.0, 220.0),
            range("yield_strength", 365.0, 460.0),
            range("tensile_strength", 615.0, 760.0),
            range("elongation", 20.0, 35.0),
            range("hardness", 160.0, 200.0),
            range("fatigue_strength", 245.0, 380.0),
            range("fracture_toughness", 80.0, 110.0),
            range("melting_point", 1350.0, 1430.0),
            range("max_service_temperature", 900.0, 1000.0),
            range("thermal_conductivity", 9.0, 15.0),
            range("specific_heat_capacity", 430.0, 450.0),
            range("thermal_expansion_coefficient", 12.0, 14.0),
            range("electrical_resistivity", 102.0, 114.0),
            single("global_production", 1.5e6),
            single("reserves", 6.3e7),
            range("embodied_energy_primary_production", 173.0, 190.0),
            range("co2_footprint_primary_production", 11.0, 12.0),
            range("water_usage", 564.0, 620.0),
            single("eco_indicator", 2800.0),
            range("casting_energy", 10.4, 11.5),
            range("casting_co2_footprint", 0.78, 0.85),
            range("deformation_energy", 3.3, 6.5),
            range("deformation_co2_footprint", 0.25, 0.53),
            range("embodied_energy_recycling", 30.0, 36.0),
            range("co2_footprint_recycling", 1.8, 2.2),
            range("recycle_fraction", 29.0, 32.0),
        ],
    },
    BuiltinMaterial {
        name: "Nickel-based super alloys",
        composition: "Ni+ 10 to 25% Cr+ Ti,Al,Co,Mo,Zr,B,Fe",
        entries: &[
            range("density", 7750.0, 8650.0),
            range("price", 31.0, 33.0),
            range("young_modulus", 150.0, 245.0),
            range("yield_strength", 300.0, 1900.0),
            range("tensile_strength", 400.0, 2100.0),
            range("elongation", 0.5, 60.0),
            range("hardness", 200.0, 600.0),
            range("fatigue_strength", 135.0, 900.0),
            range("fracture_toughness", 65.0, 110.0),
            range("melting_point", 1280.0, 1410.0),
            range("max_service_temperature", 900.0, 1200.0),
            range("thermal_conductivity", 8.0, 17.0),
            range("specific_heat_capacity", 380.0, 490.0),
            range("thermal_expansion_coefficient", 9.0, 16.0),
            range("electrical_resistivity", 84.0, 240.0),
            single("global_production", 1.5e6),
            single("reserves", 7.0e7),
            range("embodied_energy_primary_production", 221.0, 244.0),
            range("co2_footprint_primary_production", 11.0, 12.1),
            range("water_usage", 134.0, 484.0),
            single("eco_indicator", 2830.0),
            range("casting_energy", 10.0, 11.0),
            range("casting_co2_footprint", 0.75, 0.8),
            range("deformation_energy", 4.2, 4.5),
            range("deformation_co2_footprint", 0.31, 0.34),
            range("embodied_energy_recycling", 33.8, 37.5),
            range("co2_footprint_recycling", 1.97, 2.3),
            range("recycle_fraction", 22.0, 26.0),
        ],
    },
];
