//! The dugong survival timeline.
//!
//! A fixed yearly series and a single scrubber position over it. The
//! scrubber owns no charting: renderers pull the prefix view and the
//! current record and draw whatever they like.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One year of the crisis series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    /// Seagrass meadow health, percent coverage remaining
    pub seagrass_health: f64,
    /// Surveyed dugong population
    pub dugong_population: u32,
    /// Recorded dugong deaths that year
    pub annual_deaths: u32,
}

/// Rejected dataset shapes.
///
/// The scrubber's current-record lookup is total only because every year
/// between the dataset's bounds is present, so construction enforces it.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("timeline dataset is empty")]
    Empty,
    #[error("years must be consecutive and increasing, got {prev} followed by {next}")]
    BrokenSequence { prev: i32, next: i32 },
}

/// The crisis year on and after which renderers show the starvation alert.
pub const CRISIS_THRESHOLD_YEAR: i32 = 2023;

/// Immutable, ordered, gap-free yearly dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrisisDataset {
    records: Vec<YearRecord>,
}

impl CrisisDataset {
    /// Validate and wrap a yearly series. Years must be consecutive and
    /// strictly increasing.
    pub fn new(records: Vec<YearRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for pair in records.windows(2) {
            if pair[1].year != pair[0].year + 1 {
                return Err(DatasetError::BrokenSequence {
                    prev: pair[0].year,
                    next: pair[1].year,
                });
            }
        }
        Ok(Self { records })
    }

    /// The reference series: Andaman Sea observations, 2019 through 2024.
    pub fn andaman_sea() -> Self {
        let record = |year, seagrass_health, dugong_population, annual_deaths| YearRecord {
            year,
            seagrass_health,
            dugong_population,
            annual_deaths,
        };
        Self {
            records: vec![
                record(2019, 90.0, 260, 10),
                record(2020, 85.0, 255, 12),
                record(2021, 70.0, 250, 20),
                record(2022, 45.0, 220, 25),
                record(2023, 20.0, 180, 42),
                record(2024, 5.0, 120, 45),
            ],
        }
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn min_year(&self) -> i32 {
        self.records[0].year
    }

    pub fn max_year(&self) -> i32 {
        self.records[self.records.len() - 1].year
    }

    /// The record for a year, if the year is inside the series.
    pub fn get(&self, year: i32) -> Option<&YearRecord> {
        if year < self.min_year() || year > self.max_year() {
            return None;
        }
        Some(&self.records[(year - self.min_year()) as usize])
    }
}

/// A bounded position over the dataset with derived prefix and
/// current-record views.
#[derive(Clone, Debug)]
pub struct TimelineScrubber {
    dataset: CrisisDataset,
    position: i32,
    crisis_from: i32,
}

impl Default for TimelineScrubber {
    /// The reference timeline with the starvation alert from 2023 on.
    fn default() -> Self {
        Self::new(CrisisDataset::andaman_sea(), CRISIS_THRESHOLD_YEAR)
    }
}

impl TimelineScrubber {
    /// Scrub over a dataset, starting at its first year.
    pub fn new(dataset: CrisisDataset, crisis_from: i32) -> Self {
        let position = dataset.min_year();
        Self {
            dataset,
            position,
            crisis_from,
        }
    }

    pub fn dataset(&self) -> &CrisisDataset {
        &self.dataset
    }

    /// The selected year. Always a member of the dataset's year range.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Move the scrubber. Out-of-range years are clamped to the dataset
    /// bounds, never rejected.
    pub fn set_position(&mut self, year: i32) {
        self.position = year.clamp(self.dataset.min_year(), self.dataset.max_year());
    }

    /// The records up to and including the selected year, in year order.
    /// Recomputed on every call.
    pub fn prefix(&self) -> impl Iterator<Item = &YearRecord> {
        let position = self.position;
        self.dataset
            .records()
            .iter()
            .take_while(move |record| record.year <= position)
    }

    /// The record at the selected year. Total: the clamped position and
    /// the gap-free dataset guarantee it exists.
    pub fn current(&self) -> &YearRecord {
        &self.dataset.records()[(self.position - self.dataset.min_year()) as usize]
    }

    /// Whether the selected year is at or past the crisis threshold. Used
    /// by renderers to switch into the alert presentation.
    pub fn crisis_alert(&self) -> bool {
        self.position >= self.crisis_from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_dataset_spans_the_crisis_years() {
        let dataset = CrisisDataset::andaman_sea();
        assert_eq!(dataset.min_year(), 2019);
        assert_eq!(dataset.max_year(), 2024);
        assert_eq!(dataset.records().len(), 6);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            CrisisDataset::new(Vec::new()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn gapped_or_reordered_years_are_rejected() {
        let record = |year| YearRecord {
            year,
            seagrass_health: 50.0,
            dugong_population: 100,
            annual_deaths: 5,
        };

        assert!(matches!(
            CrisisDataset::new(vec![record(2019), record(2021)]),
            Err(DatasetError::BrokenSequence { prev: 2019, next: 2021 })
        ));
        assert!(matches!(
            CrisisDataset::new(vec![record(2020), record(2019)]),
            Err(DatasetError::BrokenSequence { .. })
        ));
    }

    #[test]
    fn scrubber_starts_at_the_first_year() {
        let scrubber = TimelineScrubber::default();
        assert_eq!(scrubber.position(), 2019);
        assert_eq!(scrubber.current().year, 2019);
    }

    #[test]
    fn set_position_clamps_to_the_dataset_bounds() {
        let mut scrubber = TimelineScrubber::default();

        scrubber.set_position(1990);
        assert_eq!(scrubber.position(), 2019);

        scrubber.set_position(2050);
        assert_eq!(scrubber.position(), 2024);

        scrubber.set_position(2022);
        assert_eq!(scrubber.position(), 2022);
    }

    #[test]
    fn prefix_grows_with_the_position() {
        let mut scrubber = TimelineScrubber::default();

        assert_eq!(scrubber.prefix().count(), 1);

        scrubber.set_position(2021);
        let years: Vec<i32> = scrubber.prefix().map(|r| r.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);

        scrubber.set_position(2024);
        assert_eq!(scrubber.prefix().count(), 6);
    }

    #[test]
    fn current_record_tracks_the_position() {
        let mut scrubber = TimelineScrubber::default();
        scrubber.set_position(2023);

        let record = scrubber.current();
        assert_eq!(record.year, 2023);
        assert_eq!(record.seagrass_health, 20.0);
        assert_eq!(record.dugong_population, 180);
        assert_eq!(record.annual_deaths, 42);
    }

    #[test]
    fn alert_fires_at_and_after_the_threshold() {
        let mut scrubber = TimelineScrubber::default();

        scrubber.set_position(2022);
        assert!(!scrubber.crisis_alert());

        scrubber.set_position(2023);
        assert!(scrubber.crisis_alert());

        scrubber.set_position(2024);
        assert!(scrubber.crisis_alert());
    }

    #[test]
    fn dataset_lookup_by_year() {
        let dataset = CrisisDataset::andaman_sea();
        assert_eq!(dataset.get(2020).map(|r| r.dugong_population), Some(255));
        assert!(dataset.get(2018).is_none());
        assert!(dataset.get(2025).is_none());
    }
}
