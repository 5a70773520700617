//! Turning a free-text query into a station.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::StationCatalog;
use crate::domain::Station;

use super::config::ResolverConfig;
use super::similarity::{RankedCandidate, rank};

/// A station query as received from the chat command.
///
/// A command sent with no arguments is `Missing`; a command whose arguments
/// join to blank text is `Text`. Both resolve to [`Outcome::NeedsQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Missing,
    Text(String),
}

impl Query {
    /// Build a query from command arguments, joined by single spaces.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        if args.is_empty() {
            return Query::Missing;
        }
        let text = args
            .iter()
            .map(|a| a.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        Query::Text(text)
    }

    /// The query text, if any was given.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Query::Missing => None,
            Query::Text(text) => Some(text),
        }
    }
}

/// Result of resolving a query.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The query was empty or blank.
    NeedsQuery,

    /// The query named a station exactly, or closely enough to accept.
    Resolved(Arc<Station>),

    /// The best candidate needs the user's confirmation. `suggestions`
    /// starts with the candidate itself and is for display only.
    ConfirmSuggestion {
        candidate: Arc<Station>,
        suggestions: Vec<RankedCandidate>,
    },

    /// Nothing was close; the user has to ask again.
    SuggestList(Vec<RankedCandidate>),
}

/// Resolves queries against a shared catalog.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<StationCatalog>,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(catalog: Arc<StationCatalog>, config: ResolverConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// Resolve a query built from command arguments.
    pub fn resolve_query(&self, query: &Query) -> Outcome {
        match query.as_str() {
            Some(text) => self.resolve(text),
            None => Outcome::NeedsQuery,
        }
    }

    /// Resolve free text to a station.
    ///
    /// An exact name wins outright. Otherwise the best-ranked station is
    /// accepted, offered for confirmation, or listed with the other
    /// suggestions, depending on its score.
    pub fn resolve(&self, query: &str) -> Outcome {
        if query.trim().is_empty() {
            return Outcome::NeedsQuery;
        }

        if let Some(station) = self.catalog.lookup(query) {
            debug!(query, station = station.name(), "exact match");
            return Outcome::Resolved(Arc::clone(station));
        }

        let mut ranked = rank(query, self.catalog.stations());
        let Some(top) = ranked.first().cloned() else {
            return Outcome::SuggestList(ranked);
        };

        ranked.truncate(self.config.max_suggestions);

        if top.score >= self.config.auto_accept {
            debug!(query, station = top.station.name(), score = top.score, "auto-accepted");
            Outcome::Resolved(top.station)
        } else if top.score >= self.config.confirm {
            debug!(query, station = top.station.name(), score = top.score, "asking to confirm");
            Outcome::ConfirmSuggestion {
                candidate: top.station,
                suggestions: ranked,
            }
        } else {
            debug!(query, score = top.score, "no close match");
            Outcome::SuggestList(ranked)
        }
    }
}
