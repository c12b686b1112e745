//! In-memory repository implementations for testing
//!
//! One store implements all three repository ports so a test can seed data,
//! count the queries a service issues, and make any port fail on demand.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bandcal_core::entities::{Availability, Event, Member, NewEvent};
use bandcal_core::error::DomainError;
use bandcal_core::traits::{AvailabilityRepository, EventRepository, MemberRepository, RepoResult};
use bandcal_core::value_objects::{
    AvailabilityStatus, EventId, EventRange, MemberId, RehearsalStatus,
};
use bandcal_service::ServiceContext;
use chrono::Utc;
use parking_lot::Mutex;

/// Which port a failure switch or counter refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Members,
    Events,
    Availability,
}

/// In-memory store backing every repository port
#[derive(Default)]
pub struct MockScheduleStore {
    members: Mutex<Vec<Member>>,
    events: Mutex<Vec<Event>>,
    availability: Mutex<Vec<Availability>>,

    member_queries: AtomicUsize,
    event_queries: AtomicUsize,
    availability_queries: AtomicUsize,

    fail_members: AtomicBool,
    fail_events: AtomicBool,
    fail_availability: AtomicBool,
}

impl MockScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.get_mut().push(member);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.get_mut().extend(members);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.get_mut().push(event);
        self
    }

    pub fn with_availability(mut self, row: Availability) -> Self {
        self.availability.get_mut().push(row);
        self
    }

    /// Wrap the store and build a service context over it
    pub fn into_context(self) -> (Arc<Self>, ServiceContext) {
        let store = Arc::new(self);
        let ctx = ServiceContext::new(store.clone(), store.clone(), store.clone());
        (store, ctx)
    }

    /// Make every call on a port fail from now on
    pub fn fail(&self, port: Port) {
        self.switch(port).store(true, Ordering::SeqCst);
    }

    /// Queries issued against one port
    pub fn queries(&self, port: Port) -> usize {
        self.counter(port).load(Ordering::SeqCst)
    }

    /// Queries issued against all ports
    pub fn total_queries(&self) -> usize {
        [Port::Members, Port::Events, Port::Availability]
            .into_iter()
            .map(|port| self.queries(port))
            .sum()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn availability(&self) -> Vec<Availability> {
        self.availability.lock().clone()
    }

    fn switch(&self, port: Port) -> &AtomicBool {
        match port {
            Port::Members => &self.fail_members,
            Port::Events => &self.fail_events,
            Port::Availability => &self.fail_availability,
        }
    }

    fn counter(&self, port: Port) -> &AtomicUsize {
        match port {
            Port::Members => &self.member_queries,
            Port::Events => &self.event_queries,
            Port::Availability => &self.availability_queries,
        }
    }

    /// Count the query, then fail it if the port is switched off
    fn enter(&self, port: Port) -> RepoResult<()> {
        self.counter(port).fetch_add(1, Ordering::SeqCst);
        if self.switch(port).load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(format!("{port:?} store unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MockScheduleStore {
    async fn list(&self) -> RepoResult<Vec<Member>> {
        self.enter(Port::Members)?;
        let mut members = self.members.lock().clone();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        self.enter(Port::Members)?;
        Ok(self.members.lock().iter().find(|m| m.id == id).cloned())
    }
}

#[async_trait]
impl EventRepository for MockScheduleStore {
    async fn list(&self, range: EventRange) -> RepoResult<Vec<Event>> {
        self.enter(Port::Events)?;
        let mut events: Vec<Event> = self
            .events
            .lock()
            .iter()
            .filter(|e| range.contains(e.date))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        self.enter(Port::Events)?;
        Ok(self.events.lock().iter().find(|e| e.id == id).cloned())
    }

    async fn update_rehearsal_status(
        &self,
        id: EventId,
        status: RehearsalStatus,
    ) -> RepoResult<u64> {
        self.enter(Port::Events)?;
        let mut events = self.events.lock();
        let mut changed = 0;
        for event in events.iter_mut().filter(|e| e.id == id && e.is_rehearsal()) {
            event.rehearsal_status = Some(status);
            event.updated_at = Some(Utc::now());
            changed += 1;
        }
        Ok(changed)
    }

    async fn create_many(&self, new_events: &[NewEvent]) -> RepoResult<u64> {
        self.enter(Port::Events)?;
        for event in new_events {
            event.validate()?;
        }

        let mut events = self.events.lock();
        let mut next_id = events.iter().map(|e| e.id.into_inner()).max().unwrap_or(0);
        for new_event in new_events {
            next_id += 1;
            let mut event = Event::new(EventId::new(next_id), new_event.date, new_event.event_type);
            event.rehearsal_status = new_event.rehearsal_status;
            event.notes.clone_from(&new_event.notes);
            events.push(event);
        }
        Ok(new_events.len() as u64)
    }
}

#[async_trait]
impl AvailabilityRepository for MockScheduleStore {
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Availability>> {
        self.enter(Port::Availability)?;
        Ok(self
            .availability
            .lock()
            .iter()
            .filter(|a| a.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_event(&self, event_id: EventId) -> RepoResult<Vec<Availability>> {
        self.enter(Port::Availability)?;
        Ok(self
            .availability
            .lock()
            .iter()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn find_by_events(&self, event_ids: &[EventId]) -> RepoResult<Vec<Availability>> {
        self.enter(Port::Availability)?;
        Ok(self
            .availability
            .lock()
            .iter()
            .filter(|a| event_ids.contains(&a.event_id))
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        member_id: MemberId,
        event_id: EventId,
        status: AvailabilityStatus,
    ) -> RepoResult<u64> {
        self.enter(Port::Availability)?;
        let mut rows = self.availability.lock();
        let mut changed = 0;
        for row in rows
            .iter_mut()
            .filter(|a| a.member_id == member_id && a.event_id == event_id)
        {
            row.status = status;
            row.updated_at = Utc::now();
            changed += 1;
        }
        Ok(changed)
    }
}
