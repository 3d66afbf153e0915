// Pattern 19: Singleton - Two Ways to Build Exactly One
// `CustomerManager` is created lazily behind a lock with a read-side fast
// path; `GameManager` leans on `OnceLock`. A parallel fan-out proves each is
// constructed once.

use chrono::{DateTime, Local};
use oop_design_patterns::console;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

// ============================================================================
// Example: Lock-guarded lazy creation
// ============================================================================

static CUSTOMER_MANAGER: RwLock<Option<Arc<CustomerManager>>> = RwLock::new(None);

#[derive(Debug)]
struct CustomerManager {
    saved: AtomicUsize,
}

impl CustomerManager {
    fn create_as_singleton() -> Arc<CustomerManager> {
        // Fast path: most callers only need the read lock.
        if let Some(existing) = CUSTOMER_MANAGER
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(existing);
        }

        let mut slot = CUSTOMER_MANAGER
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race between the two locks.
        let manager = slot.get_or_insert_with(|| {
            tracing::debug!("CustomerManager constructed");
            Arc::new(CustomerManager {
                saved: AtomicUsize::new(0),
            })
        });
        Arc::clone(manager)
    }

    fn save(&self) {
        let count = self.saved.fetch_add(1, Ordering::SeqCst) + 1;
        println!("Saving! (save #{})", count);
    }
}

// ============================================================================
// Example: One-time initialization
// ============================================================================

static GAME_MANAGER: OnceLock<GameManager> = OnceLock::new();
static GAME_MANAGER_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct GameManager {
    started_at: DateTime<Local>,
    score: AtomicU64,
}

impl GameManager {
    fn instance() -> &'static GameManager {
        GAME_MANAGER.get_or_init(|| {
            GAME_MANAGER_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            println!("[GameManager] Instance created (this line prints once).");
            tracing::debug!("GameManager constructed");
            GameManager {
                started_at: Local::now(),
                score: AtomicU64::new(0),
            }
        })
    }

    fn add_score(&self, points: u64) -> u64 {
        self.score.fetch_add(points, Ordering::SeqCst) + points
    }
}

fn constructions() -> usize {
    GAME_MANAGER_CONSTRUCTIONS.load(Ordering::SeqCst)
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Singleton Pattern");

    console::section("Lock-guarded CustomerManager");
    let manager = CustomerManager::create_as_singleton();
    manager.save();
    CustomerManager::create_as_singleton().save();

    console::section("OnceLock GameManager, 3 parallel workers");
    let managers: Vec<&'static GameManager> = (1..=3)
        .into_par_iter()
        .map(|worker| {
            let manager = GameManager::instance();
            let total = manager.add_score(10);
            println!("Worker {} got the manager (score now {})", worker, total);
            manager
        })
        .collect();

    let first = managers[0];
    if managers.iter().all(|m| std::ptr::eq(*m, first)) && constructions() == 1 {
        console::success(&format!(
            "All workers share one GameManager, started at {}.",
            first.started_at.format("%H:%M:%S")
        ));
    } else {
        console::failure("More than one GameManager was built!");
    }

    console::pause();
}
