//! Request/response analysis worker.
//!
//! [`AnalysisServer::start`] spawns a single worker that drains a bounded
//! queue of requests and answers each one synchronously, with a small
//! most-recently-used cache keyed by source identifier and content digest.
//! The returned
//! [`ServerHandle`] is the only way to talk to the worker or stop it.
//!
//! Callers wait a bounded time for each reply. An elapsed wait surfaces as
//! [`EntropyError::Timeout`] and is never retried.

pub mod cache;

use crate::config::ServerConfig;
use crate::entropy::{analyze_labeled, AnalysisResult};
use crate::error::{EntropyError, Result};
use crate::timeout::{with_timeout, TimeoutConfig};
use self::cache::{CacheStats, MruCache};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

/// Function the worker runs for each request.
pub type Analyzer = dyn Fn(&str, &[u8], usize) -> AnalysisResult + Send + Sync;

/// Identity of a request's input: its label plus a digest of its bytes.
///
/// Reusing a label for different content is a cache miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    source_id: String,
    digest: blake3::Hash,
}

impl CacheKey {
    fn new(source_id: &str, bytes: &[u8]) -> Self {
        Self {
            source_id: source_id.to_string(),
            digest: blake3::hash(bytes),
        }
    }
}

enum Message {
    Analyze {
        source_id: String,
        bytes: Vec<u8>,
        reply: oneshot::Sender<AnalysisResult>,
    },
    Stats {
        reply: oneshot::Sender<CacheStats>,
    },
    Stop,
}

/// Entry point for starting a worker.
pub struct AnalysisServer;

impl AnalysisServer {
    /// Starts a worker that analyzes with the entropy core.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: ServerConfig) -> Result<ServerHandle> {
        Self::start_with(
            config,
            Arc::new(|id: &str, bytes: &[u8], block_size: usize| {
                analyze_labeled(id, bytes, block_size)
            }),
        )
    }

    /// Starts a worker with a custom analyzer.
    pub fn start_with(config: ServerConfig, analyzer: Arc<Analyzer>) -> Result<ServerHandle> {
        config.validate()?;

        let (tx, rx) = mpsc::channel(config.queue_depth);
        let worker = tokio::task::spawn_blocking({
            let config = config.clone();
            move || run_worker(rx, config, analyzer)
        });

        info!(
            block_size = config.block_size,
            cache_capacity = config.cache_capacity,
            "analysis server started"
        );

        Ok(ServerHandle {
            client: ServerClient {
                tx,
                reply_timeout: config.reply_timeout,
            },
            worker: Some(worker),
        })
    }
}

fn run_worker(mut rx: mpsc::Receiver<Message>, config: ServerConfig, analyzer: Arc<Analyzer>) {
    let mut cache: MruCache<CacheKey, AnalysisResult> = MruCache::new(config.cache_capacity);

    while let Some(msg) = rx.blocking_recv() {
        match msg {
            Message::Analyze {
                source_id,
                bytes,
                reply,
            } => {
                let key = CacheKey::new(&source_id, &bytes);
                let result = match cache.get(&key) {
                    Some(hit) => {
                        trace!(source = %source_id, digest = %key.digest, "cache hit");
                        hit
                    }
                    None => {
                        let result = analyzer(&source_id, &bytes, config.block_size);
                        cache.insert(key, result.clone());
                        result
                    }
                };
                // The caller may have timed out and dropped its receiver
                if reply.send(result).is_err() {
                    debug!("reply dropped, caller no longer waiting");
                }
            }
            Message::Stats { reply } => {
                let _ = reply.send(cache.stats());
            }
            Message::Stop => break,
        }
    }

    rx.close();
    info!(stats = ?cache.stats(), "analysis server stopped");
}

/// Cloneable sender side of a running worker.
///
/// Each client has at most one request in flight: `analyze` borrows it
/// mutably until the reply or the timeout.
#[derive(Clone)]
pub struct ServerClient {
    tx: mpsc::Sender<Message>,
    reply_timeout: Duration,
}

impl ServerClient {
    /// Sends `bytes` for analysis and waits for the reply.
    pub async fn analyze(
        &mut self,
        source_id: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResult> {
        let source_id = source_id.into();
        let (reply, rx) = oneshot::channel();
        let tx = self.tx.clone();

        let request = async move {
            tx.send(Message::Analyze {
                source_id,
                bytes,
                reply,
            })
            .await
            .map_err(|_| EntropyError::ServerStopped)?;
            rx.await.map_err(|_| EntropyError::ServerStopped)
        };

        with_timeout(TimeoutConfig::new(self.reply_timeout, "analyze"), request).await
    }

    /// Current cache counters.
    pub async fn stats(&self) -> Result<CacheStats> {
        let (reply, rx) = oneshot::channel();
        let request = async {
            self.tx
                .send(Message::Stats { reply })
                .await
                .map_err(|_| EntropyError::ServerStopped)?;
            rx.await.map_err(|_| EntropyError::ServerStopped)
        };
        with_timeout(TimeoutConfig::new(self.reply_timeout, "stats"), request).await
    }

    pub fn reply_timeout(&self) -> Duration {
        self.reply_timeout
    }
}

/// Owning handle for a running worker.
pub struct ServerHandle {
    client: ServerClient,
    worker: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// A new client for another caller.
    pub fn client(&self) -> ServerClient {
        self.client.clone()
    }

    pub async fn analyze(
        &mut self,
        source_id: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResult> {
        self.client.analyze(source_id, bytes).await
    }

    pub async fn stats(&self) -> Result<CacheStats> {
        self.client.stats().await
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Stops the worker after it finishes requests already queued.
    ///
    /// Calling this more than once is a no-op.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };

        // A send error means the worker already exited
        let _ = self.client.tx.send(Message::Stop).await;
        worker
            .await
            .map_err(|e| EntropyError::WorkerFailed(e.to_string()))?;
        Ok(())
    }
}
