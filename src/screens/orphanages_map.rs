//! Map browser: refetches the orphanage list on every focus-gain and exposes
//! one marker per orphanage.
//!
//! Reads are not deduplicated. By default whichever response settles last
//! replaces the list, even when it answers an older request. With
//! [`ClientConfig::discard_stale_responses`] a response is dropped if a newer
//! request's response has already been applied.

use std::fmt::Display;

use crate::{
    config::ClientConfig,
    core::{
        api::{ApiError, OrphanageApi},
        model::{Orphanage, OrphanageId, Position, Region},
        navigation::Route,
    },
};

/// Sequence number of a read request, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker<'a> {
    pub id: OrphanageId,
    pub name: &'a str,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Stale,
    Failed,
}

#[derive(Debug, Clone)]
pub struct MapBrowser {
    orphanages: Vec<Orphanage>,
    issued: u64,
    applied: Option<FetchTicket>,
    discard_stale: bool,
    callout: Option<OrphanageId>,
    last_error: Option<String>,
    region: Region,
}

impl MapBrowser {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            orphanages: Vec::new(),
            issued: 0,
            applied: None,
            discard_stale: config.discard_stale_responses,
            callout: None,
            last_error: None,
            region: Region::default(),
        }
    }

    /// Focus-gain: the caller must issue exactly one read for the returned ticket.
    pub fn focus(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    pub fn requests_issued(&self) -> u64 {
        self.issued
    }

    pub fn apply_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Orphanage>, E>,
    ) -> FetchOutcome {
        // Covers failures as well as successes.
        if self.discard_stale && self.applied.is_some_and(|applied| applied > ticket) {
            tracing::debug!(ticket = ticket.0, "discarding stale orphanages response");
            return FetchOutcome::Stale;
        }

        let orphanages = match result {
            Ok(orphanages) => orphanages,
            Err(err) => {
                tracing::warn!(error = %err, ticket = ticket.0, "orphanages_fetch_failed");
                self.last_error = Some(err.to_string());
                return FetchOutcome::Failed;
            }
        };

        for orphanage in &orphanages {
            if let Err(e) = orphanage.position() {
                tracing::warn!(id = %orphanage.id, error = %e, "orphanage has no valid position");
            }
        }

        self.orphanages = orphanages;
        self.applied = Some(ticket);
        self.last_error = None;
        if let Some(id) = self.callout {
            if !self.orphanages.iter().any(|o| o.id == id) {
                self.callout = None;
            }
        }
        FetchOutcome::Applied
    }

    pub fn orphanages(&self) -> &[Orphanage] {
        &self.orphanages
    }

    pub fn count(&self) -> usize {
        self.orphanages.len()
    }

    pub fn footer_text(&self) -> String {
        match self.count() {
            1 => "1 orphanage found".to_string(),
            n => format!("{n} orphanages found"),
        }
    }

    /// Markers for every orphanage with usable coordinates, in list order.
    pub fn markers(&self) -> Vec<Marker<'_>> {
        self.orphanages
            .iter()
            .filter_map(|o| {
                o.position().ok().map(|position| Marker {
                    id: o.id,
                    name: &o.name,
                    position,
                })
            })
            .collect()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Opens the name callout for a marker. Unknown ids are ignored.
    pub fn select_marker(&mut self, id: OrphanageId) -> bool {
        let known = self.orphanages.iter().any(|o| o.id == id);
        if known {
            self.callout = Some(id);
        }
        known
    }

    pub fn close_callout(&mut self) {
        self.callout = None;
    }

    pub fn callout(&self) -> Option<&Orphanage> {
        let id = self.callout?;
        self.orphanages.iter().find(|o| o.id == id)
    }

    pub fn press_callout(&self) -> Option<Route> {
        self.callout().map(|o| Route::OrphanageDetails { id: o.id })
    }

    pub fn create_orphanage(&self) -> Route {
        Route::SelectMapPosition
    }
}

/// Performs the read for `ticket`, handing the ticket back with the result.
pub async fn fetch_orphanages<A: OrphanageApi>(
    api: &A,
    ticket: FetchTicket,
) -> (FetchTicket, Result<Vec<Orphanage>, ApiError>) {
    (ticket, api.list_orphanages().await)
}
