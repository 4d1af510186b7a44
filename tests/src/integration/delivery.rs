//! # Delivery Semantics
//!
//! The transport may duplicate, reorder or delay. The receiver's ledger and
//! freshness window must absorb all three.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use primitive_types::U256;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rr_01_rating_producer::RatingProducerApi;
    use rr_02_rating_receiver::{RatingReceiverApi, ReceiverEvent, Rejection};

    #[test]
    fn test_duplicate_delivery_is_replay() {
        let mut relay = Relay::new();
        relay.send(borrower(1), 85);
        let envelope = relay.transport.drain().remove(0);

        let first = relay.deliver(&envelope).unwrap();
        relay.clock.advance(60);
        let second = relay.deliver(&envelope).unwrap();

        assert!(first.is_accepted());
        assert_eq!(second.rejection(), Some(Rejection::Replay));
        assert_eq!(relay.receiver.processed_count(), 1);
        assert_eq!(relay.receiver.borrower_rating(borrower(1)).received_at, T0);
        assert!(matches!(
            relay.receiver_audit.events()[1],
            ReceiverEvent::ReplayRejected { .. }
        ));
    }

    #[test]
    fn test_identical_rating_in_same_second_collapses() {
        let mut relay = Relay::new();
        relay.send(borrower(1), 70);
        relay.send(borrower(1), 70);

        let results = relay.deliver_all();
        assert!(results[0].as_ref().unwrap().is_accepted());
        assert_eq!(
            results[1].as_ref().unwrap().rejection(),
            Some(Rejection::Replay)
        );
        assert_eq!(relay.producer.total_ratings_sent(), 2);
    }

    #[test]
    fn test_reordered_updates_last_delivery_wins() {
        let mut relay = Relay::new();
        relay.send(borrower(1), 90);
        relay.clock.advance(HOUR);
        relay.send(borrower(1), 20);

        let mut pending = relay.transport.drain();
        pending.reverse();
        for envelope in &pending {
            assert!(relay.deliver(envelope).unwrap().is_accepted());
        }

        // No ordering guarantee: the older update landed last and stays.
        let view = relay.receiver.borrower_rating(borrower(1));
        assert_eq!(view.score, 90);
        assert_eq!(view.source_timestamp, T0);
    }

    #[test]
    fn test_delayed_delivery_within_window() {
        let mut relay = Relay::new();
        relay.send(borrower(1), 85);
        relay.clock.advance(23 * HOUR);

        assert!(relay.deliver_all()[0].as_ref().unwrap().is_accepted());
        assert_eq!(relay.receiver.borrower_ltv(borrower(1)), 75);

        relay.clock.advance(2 * HOUR);
        assert_eq!(relay.receiver.borrower_ltv(borrower(1)), 40);
    }

    #[test]
    fn test_delayed_past_window_is_dropped_for_good() {
        let mut relay = Relay::new();
        relay.send(borrower(1), 85);
        let envelope = relay.transport.drain().remove(0);

        relay.clock.advance(24 * HOUR + 1);
        let late = relay.deliver(&envelope).unwrap();
        assert!(matches!(late.rejection(), Some(Rejection::Stale { .. })));
        assert_eq!(relay.receiver.borrower_ltv(borrower(1)), 40);

        relay
            .receiver
            .set_freshness_window(receiver_admin(), 48 * HOUR)
            .unwrap();
        let retry = relay.deliver(&envelope).unwrap();
        assert_eq!(retry.rejection(), Some(Rejection::Replay));
        assert_eq!(relay.receiver.borrower_ltv(borrower(1)), 40);
    }

    #[test]
    fn test_stale_redelivery_keeps_existing_rating() {
        let mut relay = Relay::new();
        relay.send(borrower(1), 30);
        let old = relay.transport.drain().remove(0);

        relay.clock.advance(30 * HOUR);
        relay.send(borrower(1), 85);
        relay.deliver_all();

        let stale = relay.deliver(&old).unwrap();
        assert!(matches!(stale.rejection(), Some(Rejection::Stale { .. })));
        assert_eq!(relay.receiver.borrower_ltv(borrower(1)), 75);
    }

    #[test]
    fn test_shuffled_duplicated_batch() {
        let mut relay = Relay::new();
        let subjects: Vec<_> = (1..=20u8).map(borrower).collect();
        let scores: Vec<u8> = (0..20u8).map(|i| i * 5).collect();
        relay
            .producer
            .send_rating_batch(producer_admin(), DEST_DOMAIN, &subjects, &scores, U256::zero())
            .unwrap();

        let mut pending = relay.transport.drain();
        let copies = pending.clone();
        pending.extend(copies);
        pending.shuffle(&mut StdRng::seed_from_u64(7));

        let mut accepted = 0;
        let mut replays = 0;
        for envelope in &pending {
            match relay.deliver(envelope).unwrap().rejection() {
                None => accepted += 1,
                Some(Rejection::Replay) => replays += 1,
                Some(other) => panic!("unexpected rejection {other:?}"),
            }
        }

        assert_eq!(accepted, 20);
        assert_eq!(replays, 20);
        assert_eq!(relay.receiver.processed_count(), 20);
        for (subject, score) in subjects.iter().zip(&scores) {
            assert_eq!(relay.receiver.borrower_rating(*subject).score, *score);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_delivery_order_does_not_change_ledger(seed in any::<u64>(), copies in 1usize..4) {
            let mut relay = Relay::new();
            let subjects: Vec<_> = (1..=8u8).map(borrower).collect();
            let scores = [5u8, 15, 35, 55, 65, 85, 95, 100];
            relay
                .producer
                .send_rating_batch(producer_admin(), DEST_DOMAIN, &subjects, &scores, U256::zero())
                .unwrap();

            let unique = relay.transport.drain();
            let mut pending = Vec::new();
            for _ in 0..copies {
                pending.extend(unique.iter().cloned());
            }
            pending.shuffle(&mut StdRng::seed_from_u64(seed));

            let accepted = pending
                .iter()
                .filter(|e| relay.deliver(e).unwrap().is_accepted())
                .count();

            prop_assert_eq!(accepted, unique.len());
            prop_assert_eq!(relay.receiver.processed_count(), unique.len());
            for (subject, score) in subjects.iter().zip(scores) {
                prop_assert_eq!(relay.receiver.borrower_rating(*subject).score, score);
            }
        }
    }
}
