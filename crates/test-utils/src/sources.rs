//! Station sources for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use station_common::{StationMapError, StationMapResult, StationRecord};
use station_map::{StationQuery, StationSource};

/// Serves a fixed table, filtered by the query like the real endpoint.
#[derive(Debug, Default)]
pub struct StaticStationSource {
    records: Vec<StationRecord>,
    queries: Mutex<Vec<StationQuery>>,
}

impl StaticStationSource {
    pub fn new(records: Vec<StationRecord>) -> Self {
        Self {
            records,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Every query received so far, oldest first.
    pub fn queries(&self) -> Vec<StationQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl StationSource for StaticStationSource {
    async fn fetch_stations(&self, query: &StationQuery) -> StationMapResult<Vec<StationRecord>> {
        self.queries.lock().unwrap().push(*query);
        let bounds = query.bounds();
        Ok(self
            .records
            .iter()
            .filter(|r| bounds.matches(r.price, r.commute_time))
            .cloned()
            .collect())
    }
}

/// One canned reply of a [`ScriptedSource`].
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Records(Vec<StationRecord>),
    FetchFailure(String),
    HttpStatus(u16),
    ParseFailure(String),
}

/// Replies with queued responses in order; an empty list once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    queries: Mutex<Vec<StationQuery>>,
}

impl ScriptedSource {
    pub fn new(responses: impl IntoIterator<Item = ScriptedResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<StationQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl StationSource for ScriptedSource {
    async fn fetch_stations(&self, query: &StationQuery) -> StationMapResult<Vec<StationRecord>> {
        self.queries.lock().unwrap().push(*query);
        let url = format!("scripted://api/stations?{}", query.to_query_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(ScriptedResponse::Records(records)) => Ok(records),
            Some(ScriptedResponse::FetchFailure(message)) => {
                Err(StationMapError::Fetch { url, message })
            }
            Some(ScriptedResponse::HttpStatus(status)) => {
                Err(StationMapError::HttpStatus { url, status })
            }
            Some(ScriptedResponse::ParseFailure(message)) => Err(StationMapError::Parse(message)),
            None => Ok(Vec::new()),
        }
    }
}

/// Wraps a source and sleeps before each fetch, one delay per call.
///
/// Calls beyond the configured delays are not delayed.
#[derive(Debug)]
pub struct DelayedSource<S> {
    inner: S,
    delays: Mutex<VecDeque<Duration>>,
}

impl<S> DelayedSource<S> {
    pub fn new(inner: S, delays: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            inner,
            delays: Mutex::new(delays.into_iter().collect()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: StationSource> StationSource for DelayedSource<S> {
    async fn fetch_stations(&self, query: &StationQuery) -> StationMapResult<Vec<StationRecord>> {
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.fetch_stations(query).await
    }
}
