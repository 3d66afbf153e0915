// Pattern 18: Proxy - Lazy Loading of Heavy Assets
// `ModelProxy` stands in for `RealHighResModel`, answering cheap queries
// itself and loading the real model on the first draw only.

use oop_design_patterns::console;
use oop_design_patterns::settings::Settings;
use std::cell::OnceCell;
use std::thread;
use std::time::Duration;

trait GraphicAsset {
    fn draw(&self) -> String;
    fn name(&self) -> &str;
}

// ============================================================================
// Example: Real subject
// ============================================================================

struct RealHighResModel {
    file_name: String,
}

impl RealHighResModel {
    /// Construction is the expensive part: it reads the model from disk.
    fn load(file_name: &str, delay: Duration) -> Self {
        println!("[RealObject] Loading '{}' from disk... (expensive)", file_name);
        tracing::debug!(file_name, ?delay, "loading model");
        thread::sleep(delay);
        println!("[RealObject] '{}' loaded into memory!", file_name);
        Self {
            file_name: file_name.to_string(),
        }
    }
}

impl GraphicAsset for RealHighResModel {
    fn draw(&self) -> String {
        format!("[RealObject] Rendering '{}' to the screen.", self.file_name)
    }

    fn name(&self) -> &str {
        &self.file_name
    }
}

// ============================================================================
// Example: Proxy
// ============================================================================

struct ModelProxy {
    file_name: String,
    load_delay: Duration,
    real: OnceCell<RealHighResModel>,
}

impl ModelProxy {
    fn new(file_name: &str, load_delay: Duration) -> Self {
        Self {
            file_name: file_name.to_string(),
            load_delay,
            real: OnceCell::new(),
        }
    }

    fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }
}

impl GraphicAsset for ModelProxy {
    fn draw(&self) -> String {
        let model = self.real.get_or_init(|| {
            println!("[Proxy] Draw requested, creating the real object...");
            RealHighResModel::load(&self.file_name, self.load_delay)
        });
        model.draw()
    }

    fn name(&self) -> &str {
        &self.file_name
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Proxy Pattern (Lazy Loading)");
    let delay = Settings::global().latency(Duration::from_millis(1500));

    println!(">>> Starting the game scene...");
    let scene: Vec<ModelProxy> = ["Hero_4K_Skin.mesh", "Dragon_Boss.mesh", "Castle_Environment.mesh"]
        .iter()
        .map(|file| ModelProxy::new(file, delay))
        .collect();
    println!(">>> Scene objects listed (no memory used yet).");
    for model in &scene {
        println!("    - {} (loaded: {})", model.name(), model.is_loaded());
    }
    println!("{}", console::divider(61));

    let castle = &scene[2];
    println!("\n>>> The player looks at the castle:");
    println!("{}", castle.draw());

    println!("\n>>> The player is still looking at the castle (second frame):");
    println!("{}", castle.draw());

    console::pause();
}
