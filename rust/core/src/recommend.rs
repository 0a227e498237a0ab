// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixture recommendation engine
//!
//! Sizes every catalog fixture type against the required lumens and
//! attaches energy and cost figures. Fixture types that would need more
//! than [`MAX_RECOMMENDED_FIXTURES`] units are dropped silently.

use crate::catalog::{
    FixtureSpec, FixtureType, DAYS_PER_YEAR, DEFAULT_DAILY_USAGE_HOURS,
    DEFAULT_ENERGY_COST_PER_KWH, MAX_RECOMMENDED_FIXTURES,
};
use crate::error::{self, Error};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// How the installation is used and what electricity costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageProfile {
    /// Hours per day the lights are on
    pub daily_hours: f64,
    /// Electricity price per kWh
    pub cost_per_kwh: f64,
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self {
            daily_hours: DEFAULT_DAILY_USAGE_HOURS,
            cost_per_kwh: DEFAULT_ENERGY_COST_PER_KWH,
        }
    }
}

impl UsageProfile {
    /// Daily hours must be finite and within (0, 24], the tariff finite and
    /// not negative.
    pub fn validate(&self) -> error::Result<()> {
        if !(self.daily_hours > 0.0 && self.daily_hours <= 24.0) {
            return Err(Error::InvalidUsage {
                name: "daily_hours",
                value: self.daily_hours,
            });
        }
        if !(self.cost_per_kwh.is_finite() && self.cost_per_kwh >= 0.0) {
            return Err(Error::InvalidUsage {
                name: "cost_per_kwh",
                value: self.cost_per_kwh,
            });
        }
        Ok(())
    }
}

/// Energy and cost figures for one sized fixture type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyMetrics {
    pub daily_energy_kwh: f64,
    pub annual_energy_kwh: f64,
    pub annual_cost: f64,
    pub lifetime_years: f64,
    pub initial_cost: f64,
    /// Labour for fitting the fixtures, kept out of `total_cost`
    pub installation_cost: f64,
    /// Initial cost plus energy cost over the fixture lifetime
    pub total_cost: f64,
    /// Lumens per watt of the fixture type
    pub energy_efficiency: f64,
}

/// Number of fixtures of `spec` needed for `required_lumens`, never below 1.
///
/// Shared by the recommendation table and the placement heuristic so both
/// always agree on the count.
pub fn fixture_count(spec: &FixtureSpec, required_lumens: f64) -> u32 {
    let needed = (required_lumens / spec.lumens_per_fixture()).ceil();
    (needed as u32).max(1)
}

/// Energy use and cost of running `num_fixtures` of `spec`
pub fn energy_metrics(spec: &FixtureSpec, num_fixtures: u32, usage: &UsageProfile) -> EnergyMetrics {
    let count = num_fixtures as f64;
    let daily_energy_kwh = spec.average_wattage() * count * usage.daily_hours / 1000.0;
    let annual_energy_kwh = daily_energy_kwh * DAYS_PER_YEAR;
    let annual_cost = annual_energy_kwh * usage.cost_per_kwh;

    let lifetime_years = spec.lifetime_hours / (usage.daily_hours * DAYS_PER_YEAR);
    let lifetime_energy_cost = annual_cost * lifetime_years;

    let initial_cost = count * spec.cost_per_unit;

    EnergyMetrics {
        daily_energy_kwh,
        annual_energy_kwh,
        annual_cost,
        lifetime_years,
        initial_cost,
        installation_cost: count * spec.installation_cost,
        total_cost: initial_cost + lifetime_energy_cost,
        energy_efficiency: spec.efficacy,
    }
}

/// One recommended fixture configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEntry {
    #[serde(skip)]
    pub fixture_type: FixtureType,
    pub count: u32,
    /// e.g. "3 x LED Bulbs"
    pub description: String,
    pub specs: FixtureSpec,
    pub energy_metrics: EnergyMetrics,
}

/// Recommendations in catalog order.
///
/// Serializes as a JSON object keyed by fixture display name, preserving
/// catalog order so reports lay out the same way every time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    entries: Vec<RecommendationEntry>,
}

impl Recommendations {
    pub fn get(&self, fixture_type: FixtureType) -> Option<&RecommendationEntry> {
        self.entries.iter().find(|e| e.fixture_type == fixture_type)
    }

    pub fn contains(&self, fixture_type: FixtureType) -> bool {
        self.get(fixture_type).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecommendationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cheapest entry over the fixture lifetime
    pub fn lowest_total_cost(&self) -> Option<&RecommendationEntry> {
        self.entries.iter().min_by(|a, b| {
            a.energy_metrics
                .total_cost
                .total_cmp(&b.energy_metrics.total_cost)
        })
    }
}

impl<'a> IntoIterator for &'a Recommendations {
    type Item = &'a RecommendationEntry;
    type IntoIter = std::slice::Iter<'a, RecommendationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Recommendations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.fixture_type.as_str(), entry)?;
        }
        map.end()
    }
}

/// Size every catalog fixture type for `required_lumens`
pub fn recommend_fixtures(required_lumens: f64, usage: &UsageProfile) -> Recommendations {
    let mut entries = Vec::with_capacity(FixtureType::ALL.len());

    for &fixture_type in FixtureType::ALL {
        let spec = fixture_type.spec();
        let count = fixture_count(spec, required_lumens);

        if count > MAX_RECOMMENDED_FIXTURES {
            tracing::debug!(
                fixture = %fixture_type,
                count,
                "Skipping fixture type, installation too large"
            );
            continue;
        }

        entries.push(RecommendationEntry {
            fixture_type,
            count,
            description: format!("{} x {}s", count, fixture_type),
            specs: spec.clone(),
            energy_metrics: energy_metrics(spec, count, usage),
        });
    }

    Recommendations { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_usage_profile_validation() {
        assert!(UsageProfile::default().validate().is_ok());
        assert!(UsageProfile { daily_hours: 24.0, cost_per_kwh: 0.0 }.validate().is_ok());

        for daily_hours in [0.0, -1.0, 24.5, f64::NAN, f64::INFINITY] {
            let usage = UsageProfile { daily_hours, ..UsageProfile::default() };
            assert!(matches!(
                usage.validate(),
                Err(Error::InvalidUsage { name: "daily_hours", .. })
            ));
        }
        for cost_per_kwh in [-0.5, f64::NAN, f64::INFINITY] {
            let usage = UsageProfile { cost_per_kwh, ..UsageProfile::default() };
            assert!(matches!(
                usage.validate(),
                Err(Error::InvalidUsage { name: "cost_per_kwh", .. })
            ));
        }
    }

    #[test]
    fn test_fixture_count_rounds_up() {
        let bulb = FixtureType::LedBulb.spec();
        assert_eq!(fixture_count(bulb, 1000.0), 1);
        assert_eq!(fixture_count(bulb, 1000.1), 2);
        assert_eq!(fixture_count(bulb, 5500.0), 6);
        assert_eq!(fixture_count(bulb, 6000.0), 6);
    }

    #[test]
    fn test_zero_lumens_needs_one_of_each() {
        let recs = recommend_fixtures(0.0, &UsageProfile::default());
        assert_eq!(recs.len(), FixtureType::ALL.len());
        for entry in &recs {
            assert_eq!(entry.count, 1);
        }
    }

    #[test]
    fn test_large_installations_are_excluded() {
        // bulb 10, panel 3, strip 9, downlight 8
        let recs = recommend_fixtures(10_000.0, &UsageProfile::default());
        assert!(!recs.contains(FixtureType::LedBulb));
        assert!(!recs.contains(FixtureType::LedStrip));
        assert_eq!(recs.get(FixtureType::LedPanel).unwrap().count, 3);
        assert_eq!(recs.get(FixtureType::LedDownlight).unwrap().count, 8);
    }

    #[test]
    fn test_nothing_fits_huge_rooms() {
        let recs = recommend_fixtures(1.0e6, &UsageProfile::default());
        assert!(recs.is_empty());
        assert!(recs.lowest_total_cost().is_none());
    }

    #[test]
    fn test_catalog_order_is_kept() {
        let recs = recommend_fixtures(2000.0, &UsageProfile::default());
        let order: Vec<_> = recs.iter().map(|e| e.fixture_type).collect();
        assert_eq!(order, FixtureType::ALL.to_vec());
    }

    #[test]
    fn test_energy_metrics_for_three_bulbs() {
        let usage = UsageProfile {
            daily_hours: 5.0,
            cost_per_kwh: 8.0,
        };
        let m = energy_metrics(FixtureType::LedBulb.spec(), 3, &usage);

        // 10 W * 3 * 5 h = 150 Wh per day
        assert_relative_eq!(m.daily_energy_kwh, 0.15, epsilon = 1e-12);
        assert_relative_eq!(m.annual_energy_kwh, 54.75, epsilon = 1e-9);
        assert_relative_eq!(m.annual_cost, 438.0, epsilon = 1e-9);
        assert_relative_eq!(m.lifetime_years, 25_000.0 / 1825.0, epsilon = 1e-12);
        assert_relative_eq!(m.initial_cost, 1350.0);
        assert_relative_eq!(m.installation_cost, 600.0);
        assert_relative_eq!(m.total_cost, 1350.0 + 438.0 * 25_000.0 / 1825.0, epsilon = 1e-6);
        assert_eq!(m.energy_efficiency, 100.0);
    }

    #[test]
    fn test_description_and_lowest_cost() {
        let recs = recommend_fixtures(2373.6, &UsageProfile::default());
        let bulb = recs.get(FixtureType::LedBulb).unwrap();
        assert_eq!(bulb.count, 3);
        assert_eq!(bulb.description, "3 x LED Bulbs");

        let cheapest = recs.lowest_total_cost().unwrap();
        for entry in &recs {
            assert!(cheapest.energy_metrics.total_cost <= entry.energy_metrics.total_cost);
        }
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let recs = recommend_fixtures(0.0, &UsageProfile::default());
        let json = serde_json::to_string(&recs).unwrap();
        let bulb = json.find("\"LED Bulb\"").unwrap();
        let panel = json.find("\"LED Panel\"").unwrap();
        let strip = json.find("\"LED Strip\"").unwrap();
        let downlight = json.find("\"LED Downlight\"").unwrap();
        assert!(bulb < panel && panel < strip && strip < downlight);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["LED Panel"]["count"], 1);
        assert_eq!(value["LED Panel"]["specs"]["efficacy"], 120.0);
        assert!(value["LED Panel"]["energy_metrics"]["total_cost"].is_number());
    }
}
