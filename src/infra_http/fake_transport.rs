use crate::domain_model::*;
use crate::domain_port::*;
use std::sync::Mutex;

type Handler = dyn Fn(&OutboundRequest) -> Result<HttpResponse, TransportError> + Send + Sync;

/// In-process transport answering from a closure and recording every request
/// it sees, with the headers attached at send time.
pub struct FakeTransport {
    handler: Box<Handler>,
    calls: Mutex<Vec<OutboundRequest>>,
}

impl FakeTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&OutboundRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        FakeTransport {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<OutboundRequest> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|c| c.path == path).count()
    }
}

#[async_trait::async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpResponse, TransportError> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(request.clone()),
            Err(poisoned) => poisoned.into_inner().push(request.clone()),
        }
        (self.handler)(request)
    }
}
