use common::wheel::plan_spin;
use common::{RaffleConfig, RaffleSession, Variant};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn roster(rows: usize) -> String {
    let mut text = String::from("Timestamp,Name,EmployeeId\n");
    for i in 1..=rows {
        text.push_str(&format!("2024-01-05 09:{i:02},Person {i},E{i:03}\n"));
    }
    text
}

/// Spins until the wheel is empty, the way the page does: the wheel picks a
/// segment and reports its label back to the session.
#[test]
fn elimination_draws_everyone_exactly_once() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = RaffleSession::new(RaffleConfig::default());
    session.load_csv(&roster(12), &mut rng).unwrap();

    let turns = session.config().wheel.turns;
    let mut rotation = 0.0;
    let mut drawn = Vec::new();
    while !session.available().is_empty() {
        let segments = session.segments();
        let plan = plan_spin(segments.len(), rotation, turns, &mut rng).unwrap();
        rotation = plan.rotation;

        let label = segments[plan.winner_index].clone();
        let winner = session.declare_winner(&label, &mut rng).unwrap();
        assert_eq!(winner.employee_id, label);
        drawn.push(label);
    }

    assert_eq!(drawn.len(), 12);
    let mut unique = drawn.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 12);

    let csv = session.export_csv().unwrap().unwrap();
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), drawn.len());
    for (idx, (row, id)) in rows.iter().zip(&drawn).enumerate() {
        assert!(row.starts_with(&format!("{},", idx + 1)));
        assert!(row.ends_with(id.as_str()));
    }
}

#[test]
fn results_survive_a_new_upload() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut session = RaffleSession::new(RaffleConfig::default());
    session.load_csv(&roster(3), &mut rng).unwrap();
    session.declare_winner("E001", &mut rng).unwrap();

    session.load_csv(&roster(5), &mut rng).unwrap();
    assert_eq!(session.available().len(), 5);
    assert_eq!(session.results().len(), 1);

    session.declare_winner("E001", &mut rng).unwrap();
    assert_eq!(session.results()[1].sequence, 2);
}

#[test]
fn repeat_variants_never_shrink_the_wheel() {
    for variant in [Variant::Classic, Variant::Department] {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = RaffleSession::new(RaffleConfig::for_variant(variant));
        let text = "ts,name,id,dept\nt1,A,E001,IT\nt2,B,E002,HR\n";
        session.load_csv(text, &mut rng).unwrap();

        for _ in 0..5 {
            session.declare_winner("E002", &mut rng).unwrap();
        }
        assert_eq!(session.available().len(), 2);
        assert!(session.export_csv().unwrap().is_none());
    }
}
