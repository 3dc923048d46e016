use std::fmt;

use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::Serialize;

static FORCE_TABLE: Lazy<bool> =
    Lazy::new(|| std::env::var("HARNESS_LOG_STAT_FORMAT").as_deref() == Ok("table"));

static BANNER_START: Lazy<String> = Lazy::new(|| {
    std::env::var("HARNESS_LOG_STAT_BANNER_START").unwrap_or_else(|_| {
        "============================ Harness Statistics Totals ============================"
            .to_owned()
    })
});

static BANNER_END: Lazy<String> = Lazy::new(|| {
    std::env::var("HARNESS_LOG_STAT_BANNER_END").unwrap_or_else(|_| {
        "------------------------------ End Harness Statistics -----------------------------"
            .to_owned()
    })
});

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab_case")]
pub enum StatPrintFormat {
    Table,
    Yaml,
    Json,
}

/// A reported statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Int(v as i64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Statistics of one timing iteration. `time` always comes first.
pub(crate) struct Record {
    pub format: StatPrintFormat,
    pub stats: Vec<(String, Value)>,
}

impl Record {
    fn ordered_stats(&self) -> Vec<&(String, Value)> {
        let mut stats = self.stats.iter().collect::<Vec<_>>();
        stats.sort_by_key(|(name, _)| (name != "time", name.clone()));
        stats
    }

    fn render(&self, format: StatPrintFormat) -> anyhow::Result<String> {
        let stats = self.ordered_stats();
        let mut out = String::new();
        match format {
            StatPrintFormat::Table => {
                for (name, _) in &stats {
                    out += &format!("{name}\t");
                }
                out += "\n";
                for (_, value) in &stats {
                    out += &format!("{value}\t");
                }
                out += "\n";
            }
            StatPrintFormat::Yaml => {
                for (name, value) in &stats {
                    out += &format!("{name}: {value}\n");
                }
            }
            StatPrintFormat::Json => {
                let mut map = serde_json::Map::new();
                for (name, value) in &stats {
                    map.insert(name.clone(), serde_json::to_value(value)?);
                }
                out += &serde_json::to_string(&map)?;
                out += "\n";
            }
        }
        Ok(out)
    }

    pub fn dump_values(self) -> anyhow::Result<()> {
        let format = if *FORCE_TABLE {
            StatPrintFormat::Table
        } else {
            self.format
        };
        let body = self.render(format)?;
        eprintln!("{}", *BANNER_START);
        eprint!("{body}");
        eprintln!("{}", *BANNER_END);
        Ok(())
    }
}
