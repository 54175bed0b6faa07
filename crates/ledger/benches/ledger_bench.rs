use criterion::{Criterion, criterion_group, criterion_main};
use ledger::{BookingKey, InMemorySeatLedger, SeatId, SeatLedger};

fn key(showtime: &str) -> BookingKey {
    BookingKey::new("tmdb-1", "Mumbai", "mum-pvr-icon", showtime).unwrap()
}

fn bench_claim_fresh_key(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let seats: Vec<SeatId> = ["A1", "A2", "A3", "A4"].map(SeatId::from).to_vec();

    c.bench_function("ledger/claim_fresh_key", |b| {
        b.iter(|| {
            rt.block_on(async {
                let ledger = InMemorySeatLedger::new();
                ledger.claim_seats(&key("7:30 PM"), &seats).await.unwrap();
            });
        });
    });
}

fn bench_claim_conflict(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ledger = InMemorySeatLedger::new();
    let key = key("10:30 PM");

    // Pre-populate a full 10x12 hall
    let hall: Vec<SeatId> = ('A'..='J')
        .flat_map(|row| (1..=12).map(move |n| SeatId::new(format!("{row}{n}"))))
        .collect();
    rt.block_on(async {
        ledger.claim_seats(&key, &hall).await.unwrap();
    });

    let request: Vec<SeatId> = ["E6", "E7"].map(SeatId::from).to_vec();
    c.bench_function("ledger/claim_conflict_full_hall", |b| {
        b.iter(|| {
            rt.block_on(async {
                ledger.claim_seats(&key, &request).await.unwrap();
            });
        });
    });
}

fn bench_list_claimed(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ledger = InMemorySeatLedger::new();
    let key = key("4:30 PM");

    rt.block_on(async {
        for row in 'A'..='J' {
            let seats: Vec<SeatId> = (1..=12).map(|n| SeatId::new(format!("{row}{n}"))).collect();
            ledger.claim_seats(&key, &seats).await.unwrap();
        }
    });

    c.bench_function("ledger/list_claimed_seats", |b| {
        b.iter(|| {
            rt.block_on(async {
                ledger.list_claimed_seats(&key).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_claim_fresh_key,
    bench_claim_conflict,
    bench_list_claimed
);
criterion_main!(benches);
