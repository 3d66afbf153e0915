// Pattern 15: Null Object - Analytics that May Be Absent
// When no analytics backend is supplied the player falls back to a shared
// do-nothing implementation, so gameplay code never checks for absence.

use oop_design_patterns::console;
use std::cell::RefCell;

trait AnalyticsService {
    fn track_event(&self, event: &str);
    fn track_error(&self, message: &str);
}

// ============================================================================
// Example: Real service
// ============================================================================

struct CloudAnalyticsService {
    api_key: String,
    sent: RefCell<Vec<String>>,
}

impl CloudAnalyticsService {
    fn new(api_key: &str) -> Self {
        println!("[Cloud] Service started with key {}.", api_key);
        Self {
            api_key: api_key.to_string(),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl AnalyticsService for CloudAnalyticsService {
    fn track_event(&self, event: &str) {
        println!("[Cloud] Event sent -> {}", event);
        tracing::debug!(key = %self.api_key, event, "tracked");
        self.sent.borrow_mut().push(event.to_string());
    }

    fn track_error(&self, message: &str) {
        println!("[Cloud] Error reported -> {}", message);
        self.sent.borrow_mut().push(format!("error:{}", message));
    }
}

// ============================================================================
// Example: Null object
// ============================================================================

/// Stateless, so one shared instance serves every player.
struct NullAnalyticsService;

impl AnalyticsService for NullAnalyticsService {
    fn track_event(&self, _event: &str) {}
    fn track_error(&self, _message: &str) {}
}

static NULL_ANALYTICS: NullAnalyticsService = NullAnalyticsService;

// ============================================================================
// Example: Client
// ============================================================================

struct Player<'a> {
    name: String,
    analytics: &'a dyn AnalyticsService,
}

impl<'a> Player<'a> {
    fn new(name: &str, analytics: Option<&'a dyn AnalyticsService>) -> Self {
        Self {
            name: name.to_string(),
            analytics: analytics.unwrap_or(&NULL_ANALYTICS),
        }
    }

    fn level_up(&self) {
        println!("{} levelled up!", self.name);
        self.analytics.track_event("Level_Up_Event");
    }

    fn die(&self) {
        println!("{} died.", self.name);
        self.analytics.track_event("Player_Death_Event");
    }

    fn crash(&self, reason: &str) {
        self.analytics.track_error(reason);
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Null Object Pattern (Analytics)");

    println!(">>> Game mode: ONLINE (real service)");
    let cloud = CloudAnalyticsService::new("API-XYZ-999");
    let online = Player::new("Ertugrul", Some(&cloud));
    online.level_up();

    console::rule(40);

    println!(">>> Game mode: OFFLINE / TEST (null service)");
    let offline = Player::new("TestUser", None);
    offline.level_up();
    offline.die();
    println!("(No analytics output and no error.)");

    console::pause();
}
