// Connection handling module
// Accepts a TCP connection and serves it with the request router

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::cell::Cell;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::pin::pin;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AppState;
use crate::handler;
use crate::logger::{self, AccessLogEntry};

/// Accept and process a connection, checking the connection limit.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment counter first, then check limit
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
}

/// How often a connection with a request in progress re-checks its timers
const IN_FLIGHT_RECHECK: Duration = Duration::from_secs(1);

/// Request activity on one connection
struct Activity {
    in_flight: Cell<bool>,
    served: Cell<bool>,
    last: Cell<Instant>,
}

impl Activity {
    fn new() -> Self {
        Self {
            in_flight: Cell::new(false),
            served: Cell::new(false),
            last: Cell::new(Instant::now()),
        }
    }

    fn start(&self) {
        self.in_flight.set(true);
        self.last.set(Instant::now());
    }

    fn finish(&self) {
        self.in_flight.set(false);
        self.served.set(true);
        self.last.set(Instant::now());
    }

    /// When the connection next needs attention: the first request is bounded
    /// by `read_timeout`, later idle periods by `keep_alive`
    fn deadline(&self, read_timeout: Duration, keep_alive: Duration) -> Instant {
        if self.in_flight.get() {
            Instant::now() + IN_FLIGHT_RECHECK
        } else if self.served.get() {
            self.last.get() + keep_alive
        } else {
            self.last.get() + read_timeout
        }
    }
}

/// Serve a single connection in a spawned task.
///
/// The first request must arrive within `read_timeout` of the accept; after
/// that, a connection idle for `keep_alive_timeout` is shut down gracefully.
/// The counter is decremented when the task ends.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let read_timeout = Duration::from_secs(performance.read_timeout);
        let keep_alive = Duration::from_secs(performance.keep_alive_timeout);

        let mut builder = http1::Builder::new();
        builder.keep_alive(!keep_alive.is_zero());

        let activity = Rc::new(Activity::new());
        let service_activity = Rc::clone(&activity);
        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                service_activity.start();
                let activity = Rc::clone(&service_activity);
                let state = Arc::clone(&service_state);
                async move {
                    let response = serve_request(req, peer_addr, state).await;
                    activity.finish();
                    response
                }
            }),
        );
        let mut conn = pin!(conn);

        let mut closing = false;
        let result = loop {
            if closing {
                break Ok(conn.as_mut().await);
            }
            let deadline = activity.deadline(read_timeout, keep_alive);
            tokio::select! {
                result = conn.as_mut() => break Ok(result),
                () = tokio::time::sleep_until(deadline.into()) => {
                    if activity.in_flight.get()
                        || Instant::now() < activity.deadline(read_timeout, keep_alive)
                    {
                        continue;
                    }
                    if activity.served.get() {
                        conn.as_mut().graceful_shutdown();
                        closing = true;
                    } else {
                        break Err(read_timeout);
                    }
                }
            }
        };

        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(timeout) => logger::log_warning(&format!(
                "Connection from {peer_addr} sent no request within {} seconds",
                timeout.as_secs()
            )),
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Route one request and write its access log line
async fn serve_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if !state.access_log() {
        return handler::handle_request(req, state).await;
    }

    let started = Instant::now();
    let mut entry = AccessLogEntry::from_request(&peer_addr, &req);
    let format = state.config.logging.access_log_format.clone();

    let response = handler::handle_request(req, state).await?;

    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or_default();
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    logger::log_access(&entry, &format);

    Ok(response)
}
