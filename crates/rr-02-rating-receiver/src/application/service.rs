//! # Rating Receiver Service
//!
//! Application service running the ingress pipeline and serving tier reads.

use crate::algorithms::effective_ltv;
use crate::config::ReceiverConfig;
use crate::domain::{
    invariant_not_future, invariant_tier_in_range, invariant_trusted_sender, is_stale, Delivery,
    DeliveryStatus, ProcessedLedger, Rating, RatingView, ReceiverError, ReceiverSnapshot,
    Rejection,
};
use crate::events::ReceiverEvent;
use crate::ports::{AuditSink, RatingReceiverApi, TimeSource};
use shared_types::{
    is_valid_score, AccessError, Address, DomainId, GuardedRegistry, Ownership, RatingPayload, Timestamp,
    TracingAuditSink, Word,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Rating Receiver Service - validates deliveries and stores ratings.
pub struct RatingReceiverService<C: TimeSource, A = TracingAuditSink>
where
    A: AuditSink<ReceiverEvent>,
{
    ownership: Ownership,
    /// Only identity allowed to call `handle`.
    transport_endpoint: Option<Address>,
    /// Origin domain to trusted sender.
    trusted_senders: GuardedRegistry<DomainId, Word>,
    ledger: ProcessedLedger,
    /// Latest accepted rating per subject.
    ratings: HashMap<Address, Rating>,
    freshness_window_secs: u64,
    default_tier: u8,
    clock: C,
    audit: A,
}

impl<C, A> RatingReceiverService<C, A>
where
    C: TimeSource,
    A: AuditSink<ReceiverEvent>,
{
    /// Create a receiver with no trusted senders and an empty ledger.
    pub fn new(config: ReceiverConfig, clock: C, audit: A) -> Result<Self, ReceiverError> {
        config.validate()?;

        Ok(Self {
            ownership: Ownership::new(config.owner),
            transport_endpoint: config.transport_endpoint.filter(|e| !e.is_zero()),
            trusted_senders: GuardedRegistry::new(),
            ledger: ProcessedLedger::new(),
            ratings: HashMap::new(),
            freshness_window_secs: config.freshness_window_secs,
            default_tier: config.default_tier,
            clock,
            audit,
        })
    }

    /// Rebuild a receiver from persisted state.
    pub fn from_snapshot(
        snapshot: ReceiverSnapshot,
        clock: C,
        audit: A,
    ) -> Result<Self, ReceiverError> {
        if snapshot.ownership.owner().is_zero() {
            return Err(AccessError::ZeroOwner.into());
        }
        invariant_tier_in_range(snapshot.default_tier)?;

        Ok(Self {
            ownership: snapshot.ownership,
            transport_endpoint: snapshot.transport_endpoint.filter(|e| !e.is_zero()),
            trusted_senders: snapshot.trusted_senders,
            ledger: snapshot.ledger,
            ratings: snapshot.ratings,
            freshness_window_secs: snapshot.freshness_window_secs,
            default_tier: snapshot.default_tier,
            clock,
            audit,
        })
    }

    /// Export durable state.
    pub fn snapshot(&self) -> ReceiverSnapshot {
        ReceiverSnapshot {
            ownership: self.ownership.clone(),
            transport_endpoint: self.transport_endpoint,
            trusted_senders: self.trusted_senders.clone(),
            ledger: self.ledger.clone(),
            ratings: self.ratings.clone(),
            freshness_window_secs: self.freshness_window_secs,
            default_tier: self.default_tier,
        }
    }

    /// Internal: only the transport endpoint may deliver.
    fn require_transport(&self, caller: Address) -> Result<(), ReceiverError> {
        if self.transport_endpoint != Some(caller) {
            warn!("[rr-02] Delivery from non-transport caller {:?}", caller);
            return Err(ReceiverError::UnauthorizedTransport { caller });
        }
        Ok(())
    }

    /// Internal: decide the outcome of a fresh fingerprint without writing.
    ///
    /// Only a future timestamp fails the call; every other outcome commits.
    fn evaluate(
        &self,
        payload: &RatingPayload,
        now: Timestamp,
    ) -> Result<(DeliveryStatus, Timestamp), ReceiverError> {
        if !is_valid_score(payload.score) {
            return Ok((
                DeliveryStatus::Rejected(Rejection::InvalidScore {
                    score: payload.score,
                }),
                0,
            ));
        }

        let source_timestamp = invariant_not_future(payload.source_timestamp, now)?;
        if is_stale(source_timestamp, now, self.freshness_window_secs) {
            let reason = Rejection::Stale {
                age: now - source_timestamp,
                window: self.freshness_window_secs,
            };
            return Ok((DeliveryStatus::Rejected(reason), source_timestamp));
        }
        Ok((DeliveryStatus::Accepted, source_timestamp))
    }

    /// Internal: audit event for a committed delivery.
    fn record_outcome(
        &self,
        delivery: &Delivery,
        payload: &RatingPayload,
        source_timestamp: Timestamp,
        now: Timestamp,
    ) {
        let Delivery {
            fingerprint,
            origin,
            subject,
            status,
        } = *delivery;

        let event = match status {
            DeliveryStatus::Accepted => {
                info!(
                    "[rr-02] Accepted rating {} for {:?} from domain {}",
                    payload.score, subject, origin
                );
                ReceiverEvent::RatingAccepted {
                    origin,
                    subject,
                    score: payload.score,
                    source_timestamp,
                    received_at: now,
                    fingerprint,
                }
            }
            DeliveryStatus::Rejected(Rejection::Replay) => {
                warn!(
                    "[rr-02] Replay of {:?} from domain {} rejected",
                    fingerprint, origin
                );
                ReceiverEvent::ReplayRejected {
                    origin,
                    subject,
                    fingerprint,
                }
            }
            DeliveryStatus::Rejected(Rejection::InvalidScore { score }) => {
                warn!(
                    "[rr-02] Invalid score {} for {:?} from domain {} rejected",
                    score, subject, origin
                );
                ReceiverEvent::InvalidScoreRejected {
                    origin,
                    subject,
                    score,
                    fingerprint,
                }
            }
            DeliveryStatus::Rejected(Rejection::Stale { age, window }) => {
                warn!(
                    "[rr-02] Stale rating for {:?} from domain {} rejected (age {}s > {}s)",
                    subject, origin, age, window
                );
                ReceiverEvent::StaleRatingRejected {
                    origin,
                    subject,
                    age,
                    window,
                    fingerprint,
                }
            }
        };
        self.audit.emit(event);
    }
}

impl<C, A> RatingReceiverApi for RatingReceiverService<C, A>
where
    C: TimeSource,
    A: AuditSink<ReceiverEvent>,
{
    fn handle(
        &mut self,
        caller: Address,
        origin: DomainId,
        sender: Word,
        payload: &[u8],
    ) -> Result<Delivery, ReceiverError> {
        self.require_transport(caller)?;
        invariant_trusted_sender(origin, self.trusted_senders.get(&origin), sender).inspect_err(
            |_| warn!("[rr-02] Untrusted sender {:?} for domain {}", sender, origin),
        )?;

        let payload = RatingPayload::decode(payload)?;
        let fingerprint = payload.fingerprint(origin);
        let now = self.clock.now();

        if self.ledger.contains(&fingerprint) {
            let delivery = Delivery {
                fingerprint,
                origin,
                subject: payload.subject,
                status: DeliveryStatus::Rejected(Rejection::Replay),
            };
            self.record_outcome(&delivery, &payload, 0, now);
            return Ok(delivery);
        }

        let (status, source_timestamp) = self.evaluate(&payload, now)?;

        // Consumed whatever the verdict.
        self.ledger.record(fingerprint);
        if status == DeliveryStatus::Accepted {
            self.ratings.insert(
                payload.subject,
                Rating {
                    score: payload.score,
                    source_timestamp,
                    received_at: now,
                },
            );
        }

        let delivery = Delivery {
            fingerprint,
            origin,
            subject: payload.subject,
            status,
        };
        self.record_outcome(&delivery, &payload, source_timestamp, now);
        Ok(delivery)
    }

    fn borrower_ltv(&self, subject: Address) -> u8 {
        let ltv = effective_ltv(
            self.ratings.get(&subject),
            self.clock.now(),
            self.freshness_window_secs,
            self.default_tier,
        );
        debug!("[rr-02] LTV for {:?}: {}", subject, ltv);
        ltv
    }

    fn borrower_rating(&self, subject: Address) -> RatingView {
        match self.ratings.get(&subject) {
            Some(r) => RatingView {
                score: r.score,
                source_timestamp: r.source_timestamp,
                received_at: r.received_at,
                is_valid: !is_stale(
                    r.source_timestamp,
                    self.clock.now(),
                    self.freshness_window_secs,
                ),
            },
            None => RatingView::default(),
        }
    }

    fn set_authorized_sender(
        &mut self,
        caller: Address,
        origin: DomainId,
        sender: Word,
    ) -> Result<(), ReceiverError> {
        let cap = self.ownership.authorize(caller)?;
        if sender.is_zero() {
            self.trusted_senders.remove(&cap, &origin);
            info!("[rr-02] Trusted sender for domain {} cleared", origin);
        } else {
            self.trusted_senders.insert(&cap, origin, sender);
            info!("[rr-02] Domain {} trusts sender {:?}", origin, sender);
        }
        self.audit
            .emit(ReceiverEvent::AuthorizedSenderSet { origin, sender });
        Ok(())
    }

    fn authorized_sender(&self, origin: DomainId) -> Option<Word> {
        self.trusted_senders.get(&origin).copied()
    }

    fn set_transport_endpoint(
        &mut self,
        caller: Address,
        endpoint: Address,
    ) -> Result<(), ReceiverError> {
        self.ownership.authorize(caller)?;
        self.transport_endpoint = Some(endpoint).filter(|e| !e.is_zero());
        info!("[rr-02] Transport endpoint set to {:?}", self.transport_endpoint);
        self.audit.emit(ReceiverEvent::TransportEndpointSet {
            endpoint: self.transport_endpoint,
        });
        Ok(())
    }

    fn transport_endpoint(&self) -> Option<Address> {
        self.transport_endpoint
    }

    fn set_freshness_window(&mut self, caller: Address, secs: u64) -> Result<(), ReceiverError> {
        self.ownership.authorize(caller)?;
        let previous = std::mem::replace(&mut self.freshness_window_secs, secs);
        info!("[rr-02] Freshness window {}s -> {}s", previous, secs);
        self.audit
            .emit(ReceiverEvent::FreshnessWindowSet { previous, new: secs });
        Ok(())
    }

    fn set_default_tier(&mut self, caller: Address, tier: u8) -> Result<(), ReceiverError> {
        self.ownership.authorize(caller)?;
        invariant_tier_in_range(tier)?;
        let previous = std::mem::replace(&mut self.default_tier, tier);
        info!("[rr-02] Default tier {} -> {}", previous, tier);
        self.audit
            .emit(ReceiverEvent::DefaultTierSet { previous, new: tier });
        Ok(())
    }

    fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ReceiverError> {
        let previous = self.ownership.transfer(caller, new_owner)?;
        info!("[rr-02] Ownership {:?} -> {:?}", previous, new_owner);
        self.audit.emit(ReceiverEvent::OwnershipTransferred {
            previous,
            new: new_owner,
        });
        Ok(())
    }

    fn is_processed(&self, fingerprint: &Word) -> bool {
        self.ledger.contains(fingerprint)
    }

    fn processed_count(&self) -> usize {
        self.ledger.len()
    }

    fn owner(&self) -> Address {
        self.ownership.owner()
    }

    fn freshness_window(&self) -> u64 {
        self.freshness_window_secs
    }

    fn default_tier(&self) -> u8 {
        self.default_tier
    }
}
