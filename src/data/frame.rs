use crate::data::dataset::{Dataset, Entity};
use crate::data::series::Attribute;

/// One entity's interpolated values at a single year.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEntry {
    pub name: String,
    pub region: String,
    pub income: f64,
    pub population: f64,
    pub life_expectancy: f64,
}

impl FrameEntry {
    pub fn sample(entity: &Entity, year: f64) -> Self {
        Self {
            name: entity.name().to_owned(),
            region: entity.region().to_owned(),
            income: entity.series(Attribute::Income).value_at(year),
            population: entity.series(Attribute::Population).value_at(year),
            life_expectancy: entity.series(Attribute::LifeExpectancy).value_at(year),
        }
    }
}

/// Interpolated snapshot of every entity at one fractional year, in dataset order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    pub year: f64,
    pub entries: Vec<FrameEntry>,
}

impl Frame {
    /// Sample every entity at `year`. Costs one bisection per entity and attribute.
    pub fn interpolate(dataset: &Dataset, year: f64) -> Self {
        let entries = dataset
            .entities()
            .iter()
            .map(|e| FrameEntry::sample(e, year))
            .collect();
        Self { year, entries }
    }

    pub fn get(&self, name: &str) -> Option<&FrameEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
