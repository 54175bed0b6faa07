//! Concurrent claim behavior of the in-memory ledger.

use std::sync::Arc;

use futures_util::future::join_all;
use ledger::{BookingKey, ClaimOutcome, InMemorySeatLedger, SeatId, SeatLedger};

fn showtime_key(showtime: &str) -> BookingKey {
    BookingKey::new("tmdb-1", "Bengaluru", "blr-pvr-orion", showtime).unwrap()
}

fn seat_block(row: char, count: usize) -> Vec<SeatId> {
    (1..=count).map(|n| SeatId::new(format!("{row}{n}"))).collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn disjoint_concurrent_claims_all_succeed() {
    let ledger = Arc::new(InMemorySeatLedger::new());
    let key = showtime_key("7:30 PM");
    let rows: Vec<char> = ('A'..='P').collect();

    let handles = rows.iter().map(|row| {
        let ledger = Arc::clone(&ledger);
        let key = key.clone();
        let seats = seat_block(*row, 8);
        tokio::spawn(async move { ledger.claim_seats(&key, &seats).await })
    });

    let outcomes: Vec<ClaimOutcome> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(outcomes.len(), rows.len());
    assert!(outcomes.iter().all(ClaimOutcome::is_confirmed));

    let mut claimed = ledger.list_claimed_seats(&key).await.unwrap();
    claimed.sort();
    let mut expected: Vec<SeatId> = rows.iter().flat_map(|row| seat_block(*row, 8)).collect();
    expected.sort();
    assert_eq!(claimed, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn overlapping_concurrent_claims_have_one_winner() {
    for round in 0..50 {
        let ledger = Arc::new(InMemorySeatLedger::new());
        let key = showtime_key("10:30 PM");
        let first = vec![SeatId::from("H1"), SeatId::from("H2")];
        let second = vec![SeatId::from("H2"), SeatId::from("H3")];

        let a = {
            let ledger = Arc::clone(&ledger);
            let key = key.clone();
            tokio::spawn(async move { ledger.claim_seats(&key, &first).await })
        };
        let b = {
            let ledger = Arc::clone(&ledger);
            let key = key.clone();
            tokio::spawn(async move { ledger.claim_seats(&key, &second).await })
        };

        let a = a.await.unwrap().unwrap();
        let b = b.await.unwrap().unwrap();
        assert_ne!(
            a.is_confirmed(),
            b.is_confirmed(),
            "round {round}: exactly one claim must win"
        );

        let loser = if a.is_confirmed() { &b } else { &a };
        assert_eq!(loser.conflicting_seats(), &[SeatId::from("H2")]);

        let claimed = ledger.list_claimed_seats(&key).await.unwrap();
        assert_eq!(claimed.len(), 2);
        assert_eq!(claimed, loser.booked_seats());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_racers_for_one_seat() {
    let ledger = Arc::new(InMemorySeatLedger::new());
    let key = showtime_key("1:30 PM");

    let handles = (0..32).map(|_| {
        let ledger = Arc::clone(&ledger);
        let key = key.clone();
        tokio::spawn(async move { ledger.claim_seats(&key, &[SeatId::from("J7")]).await })
    });

    let winners = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .filter(ClaimOutcome::is_confirmed)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(
        ledger.list_claimed_seats(&key).await.unwrap(),
        vec![SeatId::from("J7")]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn claims_on_different_showtimes_are_isolated() {
    let ledger = Arc::new(InMemorySeatLedger::new());
    let showtimes = ["10:00 AM", "1:30 PM", "4:30 PM", "7:30 PM", "10:30 PM"];

    let handles = showtimes.iter().map(|showtime| {
        let ledger = Arc::clone(&ledger);
        let key = showtime_key(showtime);
        tokio::spawn(async move { ledger.claim_seats(&key, &[SeatId::from("C5")]).await })
    });

    let outcomes: Vec<ClaimOutcome> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert!(outcomes.iter().all(ClaimOutcome::is_confirmed));
    assert_eq!(ledger.booking_count().unwrap(), showtimes.len());
}
