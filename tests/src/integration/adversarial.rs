//! # Adversarial Delivery
//!
//! Forged origins, senders and transport callers must bounce off the receiver
//! without touching the ledger, so the genuine message still lands afterwards.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use primitive_types::U256;
    use rr_01_rating_producer::{ProducerError, RatingProducerApi};
    use rr_02_rating_receiver::{RatingReceiverApi, ReceiverError, Rejection};
    use shared_types::{address_to_word, Address, RatingPayload, Word};

    fn pending(relay: &mut Relay, subject: Address, score: u8) -> rr_01_rating_producer::Envelope {
        relay.send(subject, score);
        relay.transport.drain().remove(0)
    }

    #[test]
    fn test_forged_sender_rejected_before_ledger() {
        let mut relay = Relay::new();
        let envelope = pending(&mut relay, borrower(1), 85);

        let forged = relay.receiver.handle(
            mailbox(),
            SOURCE_DOMAIN,
            address_to_word(Address::repeat_byte(0x66)),
            &envelope.payload,
        );
        assert!(matches!(
            forged,
            Err(ReceiverError::UnauthorizedSender { .. })
        ));
        assert_eq!(relay.receiver.processed_count(), 0);
        assert!(relay.receiver_audit.is_empty());

        assert!(relay.deliver(&envelope).unwrap().is_accepted());
    }

    #[test]
    fn test_wrong_origin_rejected() {
        let mut relay = Relay::new();
        let envelope = pending(&mut relay, borrower(1), 85);

        let result = relay
            .receiver
            .handle(mailbox(), 99, envelope.sender, &envelope.payload);
        assert!(matches!(
            result,
            Err(ReceiverError::UnauthorizedSender {
                origin: 99,
                expected: None,
                ..
            })
        ));
        assert_eq!(relay.receiver.borrower_ltv(borrower(1)), 40);
    }

    #[test]
    fn test_direct_call_bypassing_transport() {
        let mut relay = Relay::new();
        let payload = RatingPayload::new(borrower(1), 100, T0).encode();
        let sender = relay.trusted_sender();

        let result = relay
            .receiver
            .handle(producer_identity(), SOURCE_DOMAIN, sender, &payload);
        assert!(matches!(
            result,
            Err(ReceiverError::UnauthorizedTransport { .. })
        ));
        assert_eq!(relay.receiver.processed_count(), 0);
    }

    #[test]
    fn test_garbage_from_trusted_sender() {
        let mut relay = Relay::new();
        let sender = relay.trusted_sender();

        for bytes in [vec![], vec![0u8; 95], vec![0xFFu8; 96], vec![0u8; 128]] {
            let result = relay.receiver.handle(mailbox(), SOURCE_DOMAIN, sender, &bytes);
            assert!(matches!(result, Err(ReceiverError::MalformedPayload(_))));
        }
        assert_eq!(relay.receiver.processed_count(), 0);
    }

    #[test]
    fn test_out_of_range_score_consumes_fingerprint() {
        let mut relay = Relay::new();
        let sender = relay.trusted_sender();
        let payload = RatingPayload::new(borrower(1), 255, T0).encode();

        let first = relay
            .receiver
            .handle(mailbox(), SOURCE_DOMAIN, sender, &payload)
            .unwrap();
        assert_eq!(
            first.rejection(),
            Some(Rejection::InvalidScore { score: 255 })
        );

        let second = relay
            .receiver
            .handle(mailbox(), SOURCE_DOMAIN, sender, &payload)
            .unwrap();
        assert_eq!(second.rejection(), Some(Rejection::Replay));
        assert_eq!(relay.receiver.borrower_ltv(borrower(1)), 40);
    }

    #[test]
    fn test_future_dated_payload_fails_cleanly() {
        let mut relay = Relay::new();
        let sender = relay.trusted_sender();
        let payload = RatingPayload::new(borrower(1), 85, T0 + HOUR).encode();

        assert!(matches!(
            relay
                .receiver
                .handle(mailbox(), SOURCE_DOMAIN, sender, &payload),
            Err(ReceiverError::FutureTimestamp { .. })
        ));
        assert_eq!(relay.receiver.processed_count(), 0);

        relay.clock.advance(HOUR);
        assert!(relay
            .receiver
            .handle(mailbox(), SOURCE_DOMAIN, sender, &payload)
            .unwrap()
            .is_accepted());
    }

    #[test]
    fn test_revoked_anchor_blocks_in_flight_messages() {
        let mut relay = Relay::new();
        let envelope = pending(&mut relay, borrower(1), 85);

        relay
            .receiver
            .set_authorized_sender(receiver_admin(), SOURCE_DOMAIN, Word::zero())
            .unwrap();
        assert!(relay.deliver(&envelope).is_err());

        let sender = relay.trusted_sender();
        relay
            .receiver
            .set_authorized_sender(receiver_admin(), SOURCE_DOMAIN, sender)
            .unwrap();
        assert!(relay.deliver(&envelope).unwrap().is_accepted());
    }

    #[test]
    fn test_revoked_rater_cannot_send() {
        let mut relay = Relay::new();
        let rater = Address::repeat_byte(0xB2);

        relay.producer.authorize_rater(producer_admin(), rater).unwrap();
        relay
            .producer
            .send_rating(rater, DEST_DOMAIN, borrower(1), 70, U256::zero())
            .unwrap();

        relay.producer.revoke_rater(producer_admin(), rater).unwrap();
        assert!(matches!(
            relay
                .producer
                .send_rating(rater, DEST_DOMAIN, borrower(2), 70, U256::zero()),
            Err(ProducerError::NotRater { .. })
        ));
        assert_eq!(relay.deliver_all().len(), 1);
    }

    #[test]
    fn test_non_owner_cannot_rewire_either_side() {
        let mut relay = Relay::new();
        let attacker = Address::repeat_byte(0x66);

        assert!(relay
            .producer
            .set_destination_recipient(attacker, DEST_DOMAIN, Word::repeat_byte(0x66))
            .is_err());
        assert!(relay
            .receiver
            .set_authorized_sender(attacker, SOURCE_DOMAIN, address_to_word(attacker))
            .is_err());
        assert!(relay
            .receiver
            .set_transport_endpoint(attacker, attacker)
            .is_err());

        relay.send(borrower(1), 85);
        assert!(relay.deliver_all()[0].as_ref().unwrap().is_accepted());
    }
}
