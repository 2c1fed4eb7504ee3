//! Structural invariants of a finished plan.
//!
//! Checks that built highways form a forest once the port clique is merged,
//! that a successful plan uses exactly `remaining_components - 1` highways,
//! that every port is charged, that planning is idempotent and that adding a
//! free highway never makes a feasible plan more expensive.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{BuildStatus, DisjointSet, MstStrategy, Plan, PlanOutcome, PortClique};

use super::equivalence::plan_with;
use super::types::NetworkFixture;

pub(super) fn run_structural_invariants_property(fixture: &NetworkFixture) -> TestCaseResult {
    let network = fixture
        .network()
        .map_err(|err| TestCaseError::fail(format!("fixture rejected: {err}")))?;

    for strategy in [MstStrategy::Kruskal, MstStrategy::Boruvka] {
        let outcome = plan_with(fixture, strategy)?;
        let PlanOutcome::Success(plan) = outcome else {
            continue;
        };

        let mut set = DisjointSet::new(network.city_count());
        let clique = PortClique::link(&network, &mut set)
            .map_err(|err| TestCaseError::fail(format!("link failed: {err}")))?;
        let expected_highways = clique
            .remaining_components(network.city_count())
            .saturating_sub(1);
        if plan.highways_used() != expected_highways {
            return Err(TestCaseError::fail(format!(
                "{strategy} used {} highways, expected {expected_highways} ({})",
                plan.highways_used(),
                fixture.describe(),
            )));
        }
        if plan.ports_built() != network.ports_built() {
            return Err(TestCaseError::fail(format!(
                "{strategy} built {} ports, network has {} ({})",
                plan.ports_built(),
                network.ports_built(),
                fixture.describe(),
            )));
        }

        for id in plan.highways() {
            let highway = network.highway(*id).ok_or_else(|| {
                TestCaseError::fail(format!("{strategy} built unknown highway {id}"))
            })?;
            let (first, second) = highway.endpoints();
            let merged = set
                .union(first, second)
                .map_err(|err| TestCaseError::fail(format!("union failed: {err}")))?;
            if !merged {
                return Err(TestCaseError::fail(format!(
                    "{strategy} built highway {id} inside one component ({})",
                    fixture.describe(),
                )));
            }
        }
        if set.component_count() != 1 {
            return Err(TestCaseError::fail(format!(
                "{strategy} left {} components after replaying the plan ({})",
                set.component_count(),
                fixture.describe(),
            )));
        }

        check_statuses(&plan, network.highways().len(), strategy)?;
    }
    Ok(())
}

fn check_statuses(plan: &Plan, highway_count: usize, strategy: MstStrategy) -> TestCaseResult {
    let statuses = plan.statuses();
    let built = statuses
        .iter()
        .filter(|status| **status == BuildStatus::Built)
        .count();
    if statuses.len() != highway_count || built != plan.highways_used() {
        return Err(TestCaseError::fail(format!(
            "{strategy} statuses report {built} built of {}, plan used {} of {highway_count}",
            statuses.len(),
            plan.highways_used(),
        )));
    }
    Ok(())
}

pub(super) fn run_idempotence_property(fixture: &NetworkFixture) -> TestCaseResult {
    for strategy in [MstStrategy::Kruskal, MstStrategy::Boruvka] {
        let first = plan_with(fixture, strategy)?;
        let second = plan_with(fixture, strategy)?;
        if first != second {
            return Err(TestCaseError::fail(format!(
                "{strategy} is not idempotent: {first:?} then {second:?} ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

pub(super) fn run_free_highway_monotonicity_property(fixture: &NetworkFixture) -> TestCaseResult {
    let before = plan_with(fixture, MstStrategy::Kruskal)?;
    let mut extended = fixture.clone();
    extended.highways.push((1, fixture.city_count, 0));
    let after = plan_with(&extended, MstStrategy::Kruskal)?;

    match (before.plan(), after.plan()) {
        (Some(old), Some(new)) if new.total_cost() > old.total_cost() => {
            Err(TestCaseError::fail(format!(
                "free highway raised cost from {} to {} ({})",
                old.total_cost(),
                new.total_cost(),
                fixture.describe(),
            )))
        }
        (Some(_), None) => Err(TestCaseError::fail(format!(
            "free highway made a feasible network infeasible ({})",
            fixture.describe(),
        ))),
        _ => Ok(()),
    }
}
