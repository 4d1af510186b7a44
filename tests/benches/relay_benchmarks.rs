//! # Risk Relay Benchmarks
//!
//! | Path | Operation |
//! |------|-----------|
//! | codec | payload encode/decode, fingerprint |
//! | rr-01 | single send, batch send |
//! | rr-02 | ingest, replay rejection, tier read |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use primitive_types::U256;
use rr_01_rating_producer::RatingProducerApi;
use rr_02_rating_receiver::{score_to_ltv, RatingReceiverApi};
use rr_tests::fixtures::*;
use shared_types::{Address, RatingPayload};

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let payload = RatingPayload::new(borrower(1), 85, T0);
    let bytes = payload.encode();

    group.bench_function("encode", |b| b.iter(|| black_box(payload.encode())));
    group.bench_function("decode", |b| {
        b.iter(|| black_box(RatingPayload::decode(&bytes)))
    });
    group.bench_function("fingerprint", |b| {
        b.iter(|| black_box(payload.fingerprint(SOURCE_DOMAIN)))
    });
    group.finish();
}

fn bench_producer(c: &mut Criterion) {
    let mut group = c.benchmark_group("rr-01-rating-producer");

    group.bench_function("send_rating", |b| {
        let mut relay = Relay::new();
        b.iter(|| {
            relay.send(borrower(1), 85);
            relay.transport.drain();
        })
    });

    for size in [10usize, 100, 500] {
        let subjects: Vec<Address> = (0..size as u64).map(Address::from_low_u64_be).collect();
        let scores: Vec<u8> = (0..size).map(|i| (i % 101) as u8).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("send_rating_batch", size), &size, |b, _| {
            let mut relay = Relay::new();
            b.iter(|| {
                relay
                    .producer
                    .send_rating_batch(
                        producer_admin(),
                        DEST_DOMAIN,
                        &subjects,
                        &scores,
                        U256::from(1_000_000u64),
                    )
                    .ok();
                relay.transport.drain();
            })
        });
    }
    group.finish();
}

fn bench_receiver(c: &mut Criterion) {
    let mut group = c.benchmark_group("rr-02-rating-receiver");

    group.bench_function("handle_fresh", |b| {
        let mut relay = Relay::new();
        let sender = relay.trusted_sender();
        let mut n: u64 = 0;
        b.iter(|| {
            n += 1;
            let payload = RatingPayload::new(Address::from_low_u64_be(n), 70, T0).encode();
            black_box(
                relay
                    .receiver
                    .handle(mailbox(), SOURCE_DOMAIN, sender, &payload)
                    .ok(),
            )
        })
    });

    group.bench_function("handle_replay", |b| {
        let mut relay = Relay::new();
        relay.send(borrower(1), 70);
        let envelope = relay.transport.drain().remove(0);
        relay.deliver(&envelope).ok();
        b.iter(|| black_box(relay.deliver(&envelope).ok()))
    });

    group.bench_function("borrower_ltv", |b| {
        let mut relay = Relay::new();
        relay.send(borrower(1), 85);
        relay.deliver_all();
        b.iter(|| black_box(relay.receiver.borrower_ltv(borrower(1))))
    });

    group.bench_function("score_to_ltv_sweep", |b| {
        b.iter(|| (0..=100u8).map(|s| score_to_ltv(black_box(s)) as u32).sum::<u32>())
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_producer, bench_receiver);
criterion_main!(benches);
