use std::sync::Mutex;

use async_trait::async_trait;

use crate::fetch::{PageRequest, Transport};
use crate::types::Result;

type Responder = Box<dyn Fn(&PageRequest) -> Result<String> + Send + Sync>;

/// In-memory board, answers every request through `responder` and remembers what was asked
pub(crate) struct FakeTransport {
    responder: Responder,
    requests: Mutex<Vec<PageRequest>>,
}

impl FakeTransport {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&PageRequest) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn requested_urls(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.url)
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch(&self, request: &PageRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}

/// Decoded value of a query string parameter
pub(crate) fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
}
