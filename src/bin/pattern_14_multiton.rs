// Pattern 14: Multiton - One Connection per Region
// A process-wide registry hands out exactly one `ServerConnection` per
// region key, creating it on first request.

use dashmap::DashMap;
use lazy_static::lazy_static;
use oop_design_patterns::console;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

lazy_static! {
    static ref INSTANCES: DashMap<String, Arc<ServerConnection>> = DashMap::new();
}

#[derive(Debug)]
struct ServerConnection {
    region: String,
    ip_address: String,
    connected: AtomicBool,
}

impl ServerConnection {
    fn new(region: &str) -> Self {
        let ip_address = format!("192.168.{}.1", rand::thread_rng().gen_range(1..255));
        println!("[System] NEW connection object created: {} ({})", region, ip_address);
        tracing::debug!(region, %ip_address, "connection constructed");
        Self {
            region: region.to_string(),
            ip_address,
            connected: AtomicBool::new(false),
        }
    }

    /// Get-or-add on the shared registry; safe to call from any thread.
    fn instance(region: &str) -> Arc<ServerConnection> {
        INSTANCES
            .entry(region.to_string())
            .or_insert_with(|| Arc::new(ServerConnection::new(region)))
            .value()
            .clone()
    }

    /// Returns true only for the call that actually opened the connection.
    fn connect(&self) -> bool {
        if self.connected.swap(true, Ordering::SeqCst) {
            println!("-> [{}] Already connected.", self.region);
            false
        } else {
            println!("-> [{}] Connecting to server...", self.region);
            true
        }
    }

    fn send_data(&self, data: &str) {
        println!("   >> [{}] Data sent: '{}'", self.region, data);
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Multiton Pattern (Server Manager)");

    println!("1. Request: TR server");
    let tr1 = ServerConnection::instance("TR");
    tr1.connect();
    tr1.send_data("Login request");

    println!("\n2. Request: EU server");
    let eu1 = ServerConnection::instance("EU");
    eu1.connect();

    println!("\n3. Request: TR server (again)");
    let tr2 = ServerConnection::instance("TR");
    tr2.connect();
    tr2.send_data("Ping");

    console::rule(40);

    if Arc::ptr_eq(&tr1, &tr2) {
        console::success("SUCCESS: tr1 and tr2 are the SAME object in memory.");
    } else {
        console::failure("ERROR: the objects differ!");
    }
    if !Arc::ptr_eq(&tr1, &eu1) {
        console::success(&format!(
            "SUCCESS: tr1 ({}) and eu1 ({}) are DIFFERENT objects.",
            tr1.ip_address, eu1.ip_address
        ));
    }

    console::pause();
}
