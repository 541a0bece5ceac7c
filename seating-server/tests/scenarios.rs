//! End-to-end seating flows against the engine

mod common;

use common::TestEnv;
use seating_server::{SeatingError, SeatingErrorKind};

#[tokio::test]
async fn test_second_party_rejected_when_table_full() {
    let env = TestEnv::new().await;
    let m = &env.seating;
    m.create_table(1, 6).await.unwrap();

    m.create_reservation("bob", 1, 5).await.unwrap();
    let err = m.create_reservation("carol", 1, 1).await.unwrap_err();
    assert_eq!(err.kind(), SeatingErrorKind::CapacityExceeded);
}

#[tokio::test]
async fn test_arrival_growth_rejected_and_value_kept() {
    let env = TestEnv::new().await;
    let m = &env.seating;
    m.create_table(1, 5).await.unwrap();
    m.create_reservation("bob", 1, 4).await.unwrap();

    let err = m.record_arrival("bob", 5).await.unwrap_err();
    assert!(matches!(
        err,
        SeatingError::CapacityExceeded {
            table_number: 1,
            requested: 1,
            remaining: 0
        }
    ));

    let reservations = m.list_reservations().await.unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].accompanying_guests, 4);
}

#[tokio::test]
async fn test_duplicate_guest_conflicts() {
    let env = TestEnv::new().await;
    let m = &env.seating;
    m.create_table(1, 10).await.unwrap();

    m.create_reservation("bob", 1, 1).await.unwrap();
    let err = m.create_reservation("bob", 1, 2).await.unwrap_err();
    assert_eq!(err.kind(), SeatingErrorKind::Conflict);

    let reservations = m.list_reservations().await.unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].accompanying_guests, 1);
}

#[tokio::test]
async fn test_empty_seats_count_only_arrived_parties() {
    let env = TestEnv::new().await;
    let m = &env.seating;
    m.create_table(1, 10).await.unwrap();
    m.create_table(2, 10).await.unwrap();

    m.create_reservation("bob", 1, 5).await.unwrap();
    m.create_reservation("taylor", 1, 2).await.unwrap();
    m.create_reservation("scott", 2, 9).await.unwrap();
    m.record_arrival("bob", 5).await.unwrap();
    m.record_arrival("taylor", 2).await.unwrap();

    assert_eq!(m.empty_seats().await.unwrap(), 11);
    assert_eq!(m.list_arrived_reservations().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_table_delete_blocked_until_reservation_removed() {
    let env = TestEnv::new().await;
    let m = &env.seating;
    m.create_table(1, 4).await.unwrap();
    m.create_reservation("bob", 1, 0).await.unwrap();

    let err = m.delete_table(1).await.unwrap_err();
    assert_eq!(err.kind(), SeatingErrorKind::Conflict);

    m.delete_reservation("bob").await.unwrap();
    m.delete_table(1).await.unwrap();
    assert_eq!(m.get_table(1).await.unwrap_err().kind(), SeatingErrorKind::NotFound);
}

#[tokio::test]
async fn test_repeated_arrival_with_same_party() {
    let env = TestEnv::new().await;
    let m = &env.seating;
    m.create_table(1, 4).await.unwrap();
    m.create_reservation("bob", 1, 3).await.unwrap();

    let first = m.record_arrival("bob", 3).await.unwrap();
    let second = m.record_arrival("bob", 3).await.unwrap();
    assert_eq!(second.accompanying_guests, 3);
    assert!(second.arrival_time >= first.arrival_time);
}

#[tokio::test]
async fn test_capacity_invariant_holds_across_mixed_operations() {
    let env = TestEnv::new().await;
    let m = &env.seating;
    m.create_table(1, 8).await.unwrap();
    m.create_table(2, 3).await.unwrap();

    let attempts = [
        ("a", 1, 3),
        ("b", 1, 3),
        ("c", 1, 1),
        ("d", 2, 2),
        ("e", 2, 0),
        ("f", 1, 0),
    ];
    for (guest, table, accompanying) in attempts {
        let _ = m.create_reservation(guest, table, accompanying).await;
    }
    let _ = m.record_arrival("a", 5).await;
    let _ = m.record_arrival("b", 2).await;
    let _ = m.create_reservation("g", 1, 0).await;

    for table in m.list_tables().await.unwrap() {
        let used: i64 = m
            .list_reservations()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.table_id == table.id)
            .map(|r| r.party_size())
            .sum();
        assert!(
            used <= i64::from(table.seats),
            "table {} over capacity: {used} > {}",
            table.number,
            table.seats
        );
    }
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let env = TestEnv::new().await;
    env.seating.create_table(1, 4).await.unwrap();
    env.seating.create_reservation("bob", 1, 1).await.unwrap();
    env.seating.db().pool.close().await;

    let path = env.dir.path().join("seating.db");
    let db = seating_server::DbService::new(path.to_str().unwrap())
        .await
        .unwrap();
    let reopened = seating_server::SeatingManager::new(db);
    let reservations = reopened.list_reservations().await.unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].guest, "bob");
    assert_eq!(reservations[0].table_number, 1);
}
