use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::Context as _;

use crate::data::series::{Attribute, Sample, Series};
use crate::foundation::error::{ChartError, ChartResult};

/// Raw entity as it appears in the input JSON, before validation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDef {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub income: Vec<Sample>,
    #[serde(default)]
    pub population: Vec<Sample>,
    #[serde(default)]
    pub life_expectancy: Vec<Sample>,
}

/// A nation with validated series. Identity (`name`, `region`) never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    name: String,
    region: String,
    income: Series,
    population: Series,
    life_expectancy: Series,
}

impl Entity {
    pub fn from_def(def: EntityDef) -> ChartResult<Self> {
        let income = Series::new(&def.name, Attribute::Income, def.income)?;
        let population = Series::new(&def.name, Attribute::Population, def.population)?;
        let life_expectancy =
            Series::new(&def.name, Attribute::LifeExpectancy, def.life_expectancy)?;
        Ok(Self {
            name: def.name,
            region: def.region,
            income,
            population,
            life_expectancy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn series(&self, attribute: Attribute) -> &Series {
        match attribute {
            Attribute::Income => &self.income,
            Attribute::Population => &self.population,
            Attribute::LifeExpectancy => &self.life_expectancy,
        }
    }
}

/// Read-only collection of entities in input order.
///
/// Entities whose series are malformed are skipped at construction time; the errors are kept in
/// [`Dataset::skipped`] so callers can report them.
#[derive(Debug, Default)]
pub struct Dataset {
    entities: Vec<Entity>,
    skipped: Vec<ChartError>,
}

impl Dataset {
    #[tracing::instrument(skip(defs), fields(count = defs.len()))]
    pub fn from_defs(defs: Vec<EntityDef>) -> Self {
        let mut seen = HashSet::with_capacity(defs.len());
        let mut entities = Vec::with_capacity(defs.len());
        let mut skipped = Vec::new();

        for def in defs {
            if seen.contains(&def.name) {
                tracing::warn!(entity = %def.name, "duplicate entity name, skipping");
                skipped.push(ChartError::validation(format!(
                    "duplicate entity name \"{}\"",
                    def.name
                )));
                continue;
            }

            match Entity::from_def(def) {
                Ok(entity) => {
                    seen.insert(entity.name.clone());
                    entities.push(entity);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping entity");
                    skipped.push(err);
                }
            }
        }

        Self { entities, skipped }
    }

    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        let defs: Vec<EntityDef> = serde_json::from_str(s)?;
        Ok(Self::from_defs(defs))
    }

    pub fn from_reader(r: impl Read) -> ChartResult<Self> {
        let defs: Vec<EntityDef> = serde_json::from_reader(r)?;
        Ok(Self::from_defs(defs))
    }

    pub fn from_path(path: &Path) -> ChartResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open dataset '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn skipped(&self) -> &[ChartError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Distinct regions in order of first appearance.
    pub fn regions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in &self.entities {
            if !out.contains(&e.region()) {
                out.push(e.region());
            }
        }
        out
    }
}
