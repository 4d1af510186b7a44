//! # Rating Producer Service
//!
//! Application service orchestrating rater checks, routing and dispatch.

use crate::algorithms::{build_batch_payloads, split_fee};
use crate::config::ProducerConfig;
use crate::domain::{
    invariant_batch_shape, invariant_route_configured, invariant_score_in_range, BatchReceipt,
    DispatchReceipt, ProducerError, ProducerSnapshot,
};
use crate::events::ProducerEvent;
use crate::ports::{RatingProducerApi, Transport};
use shared_types::{
    Address, AuditSink, DomainId, GuardedRegistry, GuardedSet, Ownership, RatingPayload,
    TimeSource, TracingAuditSink, Word, U256,
};
use tracing::{debug, info, warn};

/// Rating Producer Service - orchestrates sends through the transport.
pub struct RatingProducerService<T: Transport, C: TimeSource, A = TracingAuditSink>
where
    A: AuditSink<ProducerEvent>,
{
    /// Single owner gating all administrative mutation.
    ownership: Ownership,
    /// Identities allowed to send.
    raters: GuardedSet<Address>,
    /// Destination domain to recipient.
    routes: GuardedRegistry<DomainId, Word>,
    /// Ratings dispatched so far.
    total_ratings_sent: u64,
    transport: T,
    clock: C,
    audit: A,
}

impl<T, C, A> RatingProducerService<T, C, A>
where
    T: Transport,
    C: TimeSource,
    A: AuditSink<ProducerEvent>,
{
    /// Create a producer. The owner starts as a rater.
    pub fn new(
        config: ProducerConfig,
        transport: T,
        clock: C,
        audit: A,
    ) -> Result<Self, ProducerError> {
        config.validate()?;

        let ownership = Ownership::new(config.owner);
        let cap = ownership.authorize(config.owner)?;
        let mut raters = GuardedSet::new();
        raters.insert(&cap, config.owner);

        Ok(Self {
            ownership,
            raters,
            routes: GuardedRegistry::new(),
            total_ratings_sent: 0,
            transport,
            clock,
            audit,
        })
    }

    /// Rebuild a producer from persisted state.
    pub fn from_snapshot(snapshot: ProducerSnapshot, transport: T, clock: C, audit: A) -> Self {
        Self {
            ownership: snapshot.ownership,
            raters: snapshot.raters,
            routes: snapshot.routes,
            total_ratings_sent: snapshot.total_ratings_sent,
            transport,
            clock,
            audit,
        }
    }

    /// Export durable state.
    pub fn snapshot(&self) -> ProducerSnapshot {
        ProducerSnapshot {
            ownership: self.ownership.clone(),
            raters: self.raters.clone(),
            routes: self.routes.clone(),
            total_ratings_sent: self.total_ratings_sent,
        }
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Internal: reject callers outside the rater set.
    fn require_rater(&self, caller: Address) -> Result<(), ProducerError> {
        if !self.raters.contains(&caller) {
            warn!("[rr-01] Send attempted by non-rater {:?}", caller);
            return Err(ProducerError::NotRater { caller });
        }
        Ok(())
    }

    /// Internal: recipient for `domain`, or zero when unset.
    fn recipient_or_zero(&self, domain: DomainId) -> Word {
        self.routes.get(&domain).copied().unwrap_or_default()
    }

    /// Internal: dispatch one payload and record it.
    fn dispatch_one(
        &mut self,
        destination: DomainId,
        recipient: Word,
        payload: &RatingPayload,
        source_timestamp: u64,
        fee: U256,
        already_dispatched: usize,
    ) -> Result<DispatchReceipt, ProducerError> {
        let message_id = self
            .transport
            .dispatch(destination, recipient, &payload.encode(), fee)
            .map_err(|source| {
                warn!(
                    "[rr-01] Transport refused dispatch to domain {}: {}",
                    destination, source
                );
                ProducerError::Transport {
                    dispatched: already_dispatched,
                    source,
                }
            })?;

        self.total_ratings_sent += 1;

        let receipt = DispatchReceipt {
            message_id,
            destination,
            recipient,
            subject: payload.subject,
            score: payload.score,
            source_timestamp,
            fee,
        };
        self.audit.emit(ProducerEvent::RatingSent {
            destination,
            subject: receipt.subject,
            score: receipt.score,
            source_timestamp,
            message_id,
            fee,
        });
        Ok(receipt)
    }
}

impl<T, C, A> RatingProducerApi for RatingProducerService<T, C, A>
where
    T: Transport,
    C: TimeSource,
    A: AuditSink<ProducerEvent>,
{
    fn authorize_rater(&mut self, caller: Address, rater: Address) -> Result<(), ProducerError> {
        let cap = self.ownership.authorize(caller)?;
        if self.raters.insert(&cap, rater) {
            info!("[rr-01] Rater {:?} authorized", rater);
            self.audit.emit(ProducerEvent::RaterAuthorized { rater });
        }
        Ok(())
    }

    fn revoke_rater(&mut self, caller: Address, rater: Address) -> Result<(), ProducerError> {
        let cap = self.ownership.authorize(caller)?;
        if self.raters.remove(&cap, &rater) {
            info!("[rr-01] Rater {:?} revoked", rater);
            self.audit.emit(ProducerEvent::RaterRevoked { rater });
        }
        Ok(())
    }

    fn set_destination_recipient(
        &mut self,
        caller: Address,
        domain: DomainId,
        recipient: Word,
    ) -> Result<(), ProducerError> {
        let cap = self.ownership.authorize(caller)?;
        if recipient.is_zero() {
            self.routes.remove(&cap, &domain);
            info!("[rr-01] Route for destination {} cleared", domain);
        } else {
            self.routes.insert(&cap, domain, recipient);
            info!(
                "[rr-01] Destination {} routed to {:?}",
                domain, recipient
            );
        }
        self.audit
            .emit(ProducerEvent::DestinationRecipientSet { domain, recipient });
        Ok(())
    }

    fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ProducerError> {
        let previous = self.ownership.transfer(caller, new_owner)?;
        info!("[rr-01] Ownership {:?} -> {:?}", previous, new_owner);
        self.audit.emit(ProducerEvent::OwnershipTransferred {
            previous,
            new: new_owner,
        });
        Ok(())
    }

    fn send_rating(
        &mut self,
        caller: Address,
        domain: DomainId,
        subject: Address,
        score: u8,
        fee: U256,
    ) -> Result<DispatchReceipt, ProducerError> {
        self.require_rater(caller)?;
        invariant_score_in_range(score)?;
        let recipient = invariant_route_configured(domain, self.routes.get(&domain))?;

        let now = self.clock.now();
        let payload = RatingPayload::new(subject, score, now);
        let receipt = self.dispatch_one(domain, recipient, &payload, now, fee, 0)?;

        info!(
            "[rr-01] Sent rating {} for {:?} to domain {} (total {})",
            score, subject, domain, self.total_ratings_sent
        );
        Ok(receipt)
    }

    fn send_rating_batch(
        &mut self,
        caller: Address,
        domain: DomainId,
        subjects: &[Address],
        scores: &[u8],
        fee: U256,
    ) -> Result<BatchReceipt, ProducerError> {
        self.require_rater(caller)?;
        invariant_batch_shape(subjects, scores)?;
        for score in scores {
            invariant_score_in_range(*score)?;
        }
        let recipient = invariant_route_configured(domain, self.routes.get(&domain))?;

        let split = split_fee(fee, subjects.len());
        let now = self.clock.now();
        let payloads = build_batch_payloads(subjects, scores, now);

        let mut receipts = Vec::with_capacity(payloads.len());
        for payload in &payloads {
            let receipt = self.dispatch_one(
                domain,
                recipient,
                payload,
                now,
                split.per_entry,
                receipts.len(),
            )?;
            receipts.push(receipt);
        }

        info!(
            "[rr-01] Sent batch of {} ratings to domain {} ({} per entry, {} unallocated)",
            receipts.len(),
            domain,
            split.per_entry,
            split.remainder
        );
        self.audit.emit(ProducerEvent::RatingBatchSent {
            destination: domain,
            count: receipts.len(),
            fee_per_entry: split.per_entry,
            unallocated_fee: split.remainder,
        });

        Ok(BatchReceipt {
            receipts,
            fee_per_entry: split.per_entry,
            unallocated_fee: split.remainder,
        })
    }

    fn quote_gas_payment(
        &self,
        domain: DomainId,
        subject: Address,
        score: u8,
    ) -> Result<U256, ProducerError> {
        let payload = RatingPayload::new(subject, score, self.clock.now());
        let quote = self
            .transport
            .quote_dispatch(domain, self.recipient_or_zero(domain), &payload.encode())
            .map_err(|source| ProducerError::Transport {
                dispatched: 0,
                source,
            })?;
        debug!("[rr-01] Quote for domain {}: {}", domain, quote);
        Ok(quote)
    }

    fn quote_gas_payment_batch(
        &self,
        domain: DomainId,
        subjects: &[Address],
        scores: &[u8],
    ) -> Result<U256, ProducerError> {
        if subjects.len() != scores.len() {
            return Err(ProducerError::ArrayMismatch {
                subjects: subjects.len(),
                scores: scores.len(),
            });
        }

        let recipient = self.recipient_or_zero(domain);
        let payloads = build_batch_payloads(subjects, scores, self.clock.now());
        let mut total = U256::zero();
        for payload in &payloads {
            let quote = self
                .transport
                .quote_dispatch(domain, recipient, &payload.encode())
                .map_err(|source| ProducerError::Transport {
                    dispatched: 0,
                    source,
                })?;
            total = total.saturating_add(quote);
        }
        debug!(
            "[rr-01] Batch quote for {} entries to domain {}: {}",
            payloads.len(),
            domain,
            total
        );
        Ok(total)
    }

    fn destination_recipient(&self, domain: DomainId) -> Word {
        self.recipient_or_zero(domain)
    }

    fn is_rater(&self, id: Address) -> bool {
        self.raters.contains(&id)
    }

    fn owner(&self) -> Address {
        self.ownership.owner()
    }

    fn total_ratings_sent(&self) -> u64 {
        self.total_ratings_sent
    }
}
