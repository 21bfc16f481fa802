use sidewalk::{
    assign::{AssignIF, AssignPhaseIF, AssignStack},
    cdb::{ClauseDB, ClauseDBIF, ClauseIF},
    config::Config,
    state::State,
    types::*,
    walk::{WalkIF, WalkResult},
};

fn build(num_vars: usize, clauses: &[&[i32]]) -> (AssignStack, ClauseDB, State) {
    let cnf = CNFDescription::new(num_vars, clauses.len());
    let config = Config::default();
    let asg = AssignStack::instantiate(&config, &cnf);
    let mut cdb = ClauseDB::instantiate(&config, &cnf);
    let state = State::instantiate(&config, &cnf);
    for c in clauses {
        let lits = c.iter().map(|i| Lit::from(*i)).collect::<Vec<_>>();
        cdb.new_clause(lits, false).expect("invalid clause");
    }
    (asg, cdb, state)
}

fn run(
    cdb: &mut ClauseDB,
    asg: &mut AssignStack,
    state: &mut State,
    limit: usize,
) -> WalkResult {
    cdb.walk(asg, state, limit, &mut || false)
        .expect("walker declined a small formula")
}

/// the number of live irredundant clauses unsatisfied under root-level
/// values and saved phases; what the walker's minimum promises on exit.
fn unsat_count(cdb: &ClauseDB, asg: &AssignStack) -> usize {
    let value = |l: &Lit| {
        asg.root_value(*l).unwrap_or_else(|| {
            let phase = asg.saved(l.vi());
            if l.as_bool() {
                phase
            } else {
                !phase
            }
        })
    };
    let mut unsat = 0;
    for pair in cdb.binaries() {
        if !pair.iter().any(value) {
            unsat += 1;
        }
    }
    for c in cdb.iter() {
        if c.is_dead() || c.is(FlagClause::LEARNT) {
            continue;
        }
        if !c.iter().any(value) {
            unsat += 1;
        }
    }
    unsat
}

/// deterministic pseudo-random 3-SAT instance for reproducible tests
fn random_3sat(num_vars: usize, num_clauses: usize, mut seed: u64) -> Vec<Vec<i32>> {
    let mut next = move || {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };
    let mut clauses = Vec::new();
    for _ in 0..num_clauses {
        let mut vars: Vec<usize> = Vec::new();
        while vars.len() < 3 {
            let vi = next() % num_vars + 1;
            if !vars.contains(&vi) {
                vars.push(vi);
            }
        }
        clauses.push(
            vars.iter()
                .map(|vi| if next() % 2 == 0 { *vi as i32 } else { -(*vi as i32) })
                .collect(),
        );
    }
    clauses
}

// `{(x v y), (-x v -y)}` with both phases saved true starts with exactly
// one unsatisfied clause and one flip reaches a model, which must land in
// the saved phases.
#[test]
fn test_one_flip_reaches_model() {
    let (mut asg, mut cdb, mut state) = build(2, &[&[1, 2], &[-1, -2]]);
    let res = run(&mut cdb, &mut asg, &mut state, 10_000);
    assert_eq!(res.initial, 1);
    assert_eq!(res.minimum, 0);
    assert_eq!(unsat_count(&cdb, &asg), 0);
    assert_eq!(state.num_walk, 1);
    assert_eq!(state.num_improve, 1);
    assert!(0 < state.num_flip);
}

// an unsatisfiable formula must terminate on budget exhaustion with a
// nonzero minimum instead of looping forever.
#[test]
fn test_unsatisfiable_formula_exhausts_budget() {
    let (mut asg, mut cdb, mut state) = build(2, &[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]]);
    let res = run(&mut cdb, &mut asg, &mut state, 50_000);
    assert!(1 <= res.minimum);
    assert!(res.minimum <= res.initial);
    assert!(50_000 <= state.num_walk_step);
}

// with no improvement possible the saved phases stay byte-identical.
#[test]
fn test_no_op_walk_keeps_phases() {
    let (mut asg, mut cdb, mut state) = build(2, &[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]]);
    let before = asg.saved_phases();
    let res = run(&mut cdb, &mut asg, &mut state, 20_000);
    assert_eq!(res.minimum, res.initial);
    assert_eq!(asg.saved_phases(), before);
    assert_eq!(state.num_improve, 0);
}

// a clause satisfied at root level when the index is built is excluded
// from the walk and retired for good.
#[test]
fn test_root_satisfied_clause_is_retired() {
    let (mut asg, mut cdb, mut state) = build(3, &[&[1, 2, 3], &[-2, -3]]);
    asg.assign_at_root(Lit::from(1i32)).expect("no conflict");
    let res = run(&mut cdb, &mut asg, &mut state, 10_000);
    let retired = cdb.iter().next().expect("arena must hold the clause");
    assert!(retired.is_dead());
    assert_eq!(res.initial, 1, "only the binary clause was unsatisfied");
    assert_eq!(res.minimum, 0);
    assert_eq!(unsat_count(&cdb, &asg), 0);
}

// cancellation is polled once per flip; a walk canceled up front leaves
// everything as seeded.
#[test]
fn test_cancellation_stops_before_any_flip() {
    let (mut asg, mut cdb, mut state) = build(2, &[&[1, 2], &[-1, -2]]);
    let before = asg.saved_phases();
    let res = cdb
        .walk(&mut asg, &mut state, usize::MAX, &mut || true)
        .expect("walker declined a small formula");
    assert_eq!(res.flipped, 0);
    assert_eq!(res.minimum, res.initial);
    assert_eq!(asg.saved_phases(), before);
}

// target phases take precedence over saved ones when seeding the trial
// assignment, and the import lands in the saved phases.
#[test]
fn test_target_phase_seeds_trial_assignment() {
    let (mut asg, mut cdb, mut state) = build(2, &[&[-1, -2]]);
    asg.set_target(1, false);
    let res = run(&mut cdb, &mut asg, &mut state, 1_000);
    assert_eq!(res.initial, 0);
    assert!(!asg.saved(1));
    assert!(asg.saved(2));
}

// on exit the saved phases must evaluate to exactly `minimum` unsatisfied
// clauses; this exercises the trail compaction and full-copy paths on a
// larger instance.
#[test]
fn test_saved_phases_match_reported_minimum() {
    let clauses = random_3sat(25, 100, 20240917);
    let refs: Vec<&[i32]> = clauses.iter().map(|c| c.as_slice()).collect();
    let (mut asg, mut cdb, mut state) = build(25, &refs);
    let res = run(&mut cdb, &mut asg, &mut state, 200_000);
    assert!(res.minimum <= res.initial);
    assert_eq!(unsat_count(&cdb, &asg), res.minimum);
}

// re-deriving the trial assignment from the materialized phases must
// reproduce the reported minimum.
#[test]
fn test_rederivation_is_idempotent() {
    let clauses = random_3sat(20, 80, 42);
    let refs: Vec<&[i32]> = clauses.iter().map(|c| c.as_slice()).collect();
    let (mut asg, mut cdb, mut state) = build(20, &refs);
    let first = run(&mut cdb, &mut asg, &mut state, 100_000);
    let phases = asg.saved_phases();
    // a zero-budget walk only re-derives the trial assignment
    let second = run(&mut cdb, &mut asg, &mut state, 0);
    assert_eq!(second.initial, first.minimum);
    assert_eq!(second.minimum, second.initial);
    assert_eq!(asg.saved_phases(), phases);
}

// the admissibility gate accepts everything a test can build; its failure
// needs clause references beyond the 31-bit budget.
#[test]
fn test_small_formulas_are_walkable() {
    let (_, cdb, _) = build(2, &[&[1, 2], &[-1, -2]]);
    assert!(cdb.walkable());
}

// repeated invocations stay deterministic for a fixed seed and diversify
// the score table by alternating the noise-constant branch.
#[test]
fn test_repeated_walks_are_deterministic() {
    let clauses = random_3sat(15, 60, 7);
    let refs: Vec<&[i32]> = clauses.iter().map(|c| c.as_slice()).collect();
    let (mut asg1, mut cdb1, mut state1) = build(15, &refs);
    let (mut asg2, mut cdb2, mut state2) = build(15, &refs);
    let r1 = run(&mut cdb1, &mut asg1, &mut state1, 50_000);
    let r2 = run(&mut cdb2, &mut asg2, &mut state2, 50_000);
    assert_eq!(r1, r2);
    assert_eq!(asg1.saved_phases(), asg2.saved_phases());
    assert_eq!(state1.num_walk_step, state2.num_walk_step);
}
