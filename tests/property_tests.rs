//! Property-based tests for the scenario engine.
//!
//! These tests use proptest to verify the documented properties hold
//! across many randomly generated inputs.

use proptest::prelude::*;
use seagrass_guardian::calculator::{AreaUnit, CalculatorConfig, CarbonCalculator, CarbonEstimate};
use seagrass_guardian::nav::{Navigator, Scenario, TABS};
use seagrass_guardian::quadrat::{evaluate, QuadratGame, Species, SurveyAttempt, SurveyReference};
use seagrass_guardian::timeline::TimelineScrubber;
use seagrass_guardian::wizard::{Depth, Method, Pick, RestorationSim, Substrate};

prop_compose! {
    fn arbitrary_unit()(variant in 0..2u8) -> AreaUnit {
        match variant {
            0 => AreaUnit::Hectares,
            _ => AreaUnit::FootballFields,
        }
    }
}

prop_compose! {
    fn arbitrary_species()(variant in 0..3u8) -> Option<Species> {
        match variant {
            0 => None,
            1 => Some(Species::Enhalus),
            _ => Some(Species::Halophila),
        }
    }
}

prop_compose! {
    fn arbitrary_scenario()(variant in 0..5usize) -> Scenario {
        TABS[variant]
    }
}

prop_compose! {
    fn arbitrary_walk()(d in 0..3u8, m in 0..2u8, s in 0..2u8) -> (Depth, Method, Substrate) {
        let depth = match d {
            0 => Depth::Shallow,
            1 => Depth::Optimal,
            _ => Depth::Deep,
        };
        let method = if m == 0 { Method::Seeds } else { Method::Sprigs };
        let substrate = if s == 0 { Substrate::Loose } else { Substrate::Anchored };
        (depth, method, substrate)
    }
}

fn run_walk(depth: Depth, method: Method, substrate: Substrate) -> RestorationSim {
    let mut sim = RestorationSim::new();
    sim.begin();
    sim.choose(Pick::Depth(depth));
    sim.choose(Pick::Method(method));
    sim.choose(Pick::Substrate(substrate));
    sim
}

proptest! {
    #[test]
    fn conversion_is_monotone_in_area(
        a in 0.0..1_000_000.0f64,
        b in 0.0..1_000_000.0f64,
        unit in arbitrary_unit(),
    ) {
        let calc = CarbonCalculator::default();
        let (small, large) = if a <= b { (a, b) } else { (b, a) };

        let lo = calc.convert(small, unit);
        let hi = calc.convert(large, unit);

        prop_assert!(lo.carbon_mg <= hi.carbon_mg);
        prop_assert!(lo.smartphone_charges <= hi.smartphone_charges);
    }

    #[test]
    fn negative_area_degrades_to_zero(
        quantity in -1_000_000.0..0.0f64,
        unit in arbitrary_unit(),
    ) {
        let calc = CarbonCalculator::default();
        prop_assert_eq!(calc.convert(quantity, unit), CarbonEstimate::ZERO);
    }

    #[test]
    fn football_fields_round_trip_exactly(quantity in 0.0..1_000_000.0f64) {
        let config = CalculatorConfig::default();
        let calc = CarbonCalculator::new(config);

        let via_fields = calc.convert(quantity, AreaUnit::FootballFields);
        let via_hectares =
            calc.convert(quantity * config.football_field_in_hectares, AreaUnit::Hectares);

        prop_assert_eq!(via_fields, via_hectares);
    }

    #[test]
    fn scoring_is_deterministic(
        cover in 0..=100u8,
        species in arbitrary_species(),
    ) {
        let reference = SurveyReference::default();
        let attempt = SurveyAttempt {
            estimated_cover: cover,
            species,
        };

        prop_assert_eq!(
            evaluate(&attempt, &reference),
            evaluate(&attempt, &reference)
        );
    }

    #[test]
    fn tolerance_matches_the_absolute_difference(cover in 0..=100u8) {
        let reference = SurveyReference::default();
        let attempt = SurveyAttempt {
            estimated_cover: cover,
            species: None,
        };

        let verdict = evaluate(&attempt, &reference);
        let expected = cover.abs_diff(reference.actual_cover) <= 10;
        prop_assert_eq!(verdict.within_tolerance, expected);
    }

    #[test]
    fn slider_input_always_lands_in_range(value in any::<i32>()) {
        let mut game = QuadratGame::default();
        game.set_estimate(value);

        let cover = game.attempt().estimated_cover;
        prop_assert!(cover <= 100);
        prop_assert_eq!(cover, value.clamp(0, 100) as u8);
    }

    #[test]
    fn scrub_position_is_always_a_dataset_year(year in any::<i32>()) {
        let mut scrubber = TimelineScrubber::default();
        scrubber.set_position(year);

        let position = scrubber.position();
        prop_assert!(position >= scrubber.dataset().min_year());
        prop_assert!(position <= scrubber.dataset().max_year());
        prop_assert_eq!(scrubber.current().year, position);
    }

    #[test]
    fn prefix_counts_exactly_the_years_reached(year in 1990..2050i32) {
        let mut scrubber = TimelineScrubber::default();
        scrubber.set_position(year);

        let expected = scrubber
            .dataset()
            .records()
            .iter()
            .filter(|record| record.year <= scrubber.position())
            .count();
        prop_assert_eq!(scrubber.prefix().count(), expected);
    }

    #[test]
    fn prefix_length_is_monotone(a in 1990..2050i32, b in 1990..2050i32) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let mut scrubber = TimelineScrubber::default();

        scrubber.set_position(early);
        let early_len = scrubber.prefix().count();

        scrubber.set_position(late);
        let late_len = scrubber.prefix().count();

        prop_assert!(early_len <= late_len);
    }

    #[test]
    fn reselecting_a_tab_never_adds_log_entries(scenario in arbitrary_scenario()) {
        let mut nav = Navigator::new();

        nav.select(scenario);
        let entries_after_first = nav.log().entries().len();

        nav.select(scenario);

        prop_assert_eq!(nav.current(), scenario);
        prop_assert_eq!(nav.log().entries().len(), entries_after_first);
    }

    #[test]
    fn wizard_success_requires_the_exact_combination(walk in arbitrary_walk()) {
        let (depth, method, substrate) = walk;
        let sim = run_walk(depth, method, substrate);

        let outcome = sim.outcome().unwrap();
        let expected = depth == Depth::Optimal
            && method == Method::Sprigs
            && substrate == Substrate::Anchored;
        prop_assert_eq!(outcome.success, expected);
    }

    #[test]
    fn wizard_replay_reproduces_the_outcome(walk in arbitrary_walk()) {
        let (depth, method, substrate) = walk;
        let mut sim = run_walk(depth, method, substrate);
        let first = sim.outcome().unwrap();

        sim.reset();
        sim.begin();
        sim.choose(Pick::Depth(depth));
        sim.choose(Pick::Method(method));
        sim.choose(Pick::Substrate(substrate));

        prop_assert_eq!(sim.outcome().unwrap(), first);
    }

    #[test]
    fn failed_walks_always_name_a_reason(walk in arbitrary_walk()) {
        let (depth, method, substrate) = walk;
        let sim = run_walk(depth, method, substrate);

        let outcome = sim.outcome().unwrap();
        if !outcome.success {
            prop_assert!(outcome
                .narrative
                .starts_with("Unfortunately, your conditions weren't right."));
        }
    }
}
