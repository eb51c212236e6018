//! Built-in profiles
//!
//! The benchmark extensions embed their queries, reference answers and
//! schema DDL this way. Paths are relative to the repository root.

use std::path::{Path, PathBuf};

use super::types::{ArtifactConfig, ConstantConfig, GroupConfig, Profile};

/// Provenance name the benchmark headers have always carried
const LEGACY_GENERATOR: &str = "generate_csv_header.py";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// TPC-H queries and answers
    Tpch,
    /// TPC-DS queries, answers and schema
    Tpcds,
    /// Both benchmark headers
    All,
}

impl Preset {
    pub fn profile(self) -> Profile {
        let artifacts = match self {
            Preset::Tpch => vec![tpch()],
            Preset::Tpcds => vec![tpcds()],
            Preset::All => vec![tpch(), tpcds()],
        };

        Profile {
            generated_by: LEGACY_GENERATOR.to_string(),
            artifacts,
            ..Profile::default()
        }
    }
}

fn tpch() -> ArtifactConfig {
    let base = Path::new("extension/tpch/dbgen");
    ArtifactConfig {
        name: "tpch".to_string(),
        output: base.join("include/tpch_constants.hpp"),
        constants: vec![constant("TPCH_QUERIES_COUNT", 22, "TPCH_QUERIES")],
        groups: vec![
            group("TPCH_QUERIES", base.join("queries")),
            group("TPCH_ANSWERS_SF0_01", base.join("answers/sf0.01")),
            group("TPCH_ANSWERS_SF0_1", base.join("answers/sf0.1")),
            group("TPCH_ANSWERS_SF1", base.join("answers/sf1")),
        ],
    }
}

fn tpcds() -> ArtifactConfig {
    let base = Path::new("extension/tpcds/dsdgen");
    ArtifactConfig {
        name: "tpcds".to_string(),
        output: base.join("include/tpcds_constants.hpp"),
        constants: vec![
            constant("TPCDS_QUERIES_COUNT", 99, "TPCDS_QUERIES"),
            constant("TPCDS_TABLE_COUNT", 24, "TPCDS_TABLE_DDL_NOKEYS"),
        ],
        groups: vec![
            group("TPCDS_QUERIES", base.join("queries")),
            group("TPCDS_ANSWERS_SF0_01", base.join("answers/sf0.01")),
            group("TPCDS_ANSWERS_SF1", base.join("answers/sf1")),
            group("TPCDS_TABLE_DDL_NOKEYS", base.join("schema")),
        ],
    }
}

fn constant(name: &str, value: i32, counts: &str) -> ConstantConfig {
    ConstantConfig {
        name: name.to_string(),
        value,
        counts: Some(counts.to_string()),
    }
}

fn group(name: &str, path: PathBuf) -> GroupConfig {
    GroupConfig {
        name: name.to_string(),
        path,
        terminator: true,
    }
}
