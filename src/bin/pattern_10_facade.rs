// Pattern 10: Facade - One Call to Start the Game Engine
// The client calls start_game/stop_game; the facade drives the video,
// audio and network subsystems in a fixed order.

use oop_design_patterns::console;
use oop_design_patterns::settings::Settings;
use std::thread;
use std::time::Duration;

// ============================================================================
// Example: Subsystems
// ============================================================================

#[derive(Debug, Default)]
struct AudioEngine {
    running: bool,
}

impl AudioEngine {
    fn initialize(&mut self) -> String {
        self.running = true;
        "AudioEngine: loading sound drivers...".to_string()
    }

    fn load_banks(&self) -> String {
        "AudioEngine: sound banks (SFX, Music) loaded into memory.".to_string()
    }

    fn stop(&mut self) -> String {
        self.running = false;
        "AudioEngine: audio system stopped.".to_string()
    }
}

#[derive(Debug, Default)]
struct VideoEngine {
    resolution: Option<(u32, u32)>,
    vsync: bool,
}

impl VideoEngine {
    fn set_resolution(&mut self, width: u32, height: u32) -> String {
        self.resolution = Some((width, height));
        format!("VideoEngine: resolution set to {}x{}.", width, height)
    }

    fn enable_vsync(&mut self) -> String {
        self.vsync = true;
        "VideoEngine: VSync enabled.".to_string()
    }

    fn stop(&mut self) -> String {
        self.resolution = None;
        self.vsync = false;
        "VideoEngine: graphics card resources released.".to_string()
    }
}

#[derive(Debug, Default)]
struct NetworkEngine {
    server: Option<String>,
}

impl NetworkEngine {
    fn connect(&mut self, ip: &str) -> String {
        self.server = Some(ip.to_string());
        format!("NetworkEngine: connecting to server {}...", ip)
    }

    fn disconnect(&mut self) -> String {
        self.server = None;
        "NetworkEngine: disconnected.".to_string()
    }
}

// ============================================================================
// Example: Facade
// ============================================================================

#[derive(Debug, Default)]
struct GameEngineFacade {
    audio: AudioEngine,
    video: VideoEngine,
    network: NetworkEngine,
}

impl GameEngineFacade {
    fn start_game(&mut self) -> Vec<String> {
        vec![
            self.video.set_resolution(1920, 1080),
            self.video.enable_vsync(),
            self.audio.initialize(),
            self.audio.load_banks(),
            self.network.connect("127.0.0.1"),
        ]
    }

    /// Shuts down in reverse dependency order: network, audio, video.
    fn stop_game(&mut self) -> Vec<String> {
        vec![
            self.network.disconnect(),
            self.audio.stop(),
            self.video.stop(),
        ]
    }

    fn is_running(&self) -> bool {
        self.audio.running && self.video.resolution.is_some() && self.network.server.is_some()
    }
}

fn print_block(title: &str, steps: &[String], footer: &str) {
    println!("\n[FACADE] {}", title);
    println!("{}", console::divider(32));
    steps.iter().for_each(|step| println!("{}", step));
    println!("{}", console::divider(32));
    println!("[FACADE] {}\n", footer);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_order() {
        let mut engine = GameEngineFacade::default();
        let steps = engine.start_game();
        assert!(steps[0].contains("1920x1080"));
        assert!(steps[1].contains("VSync"));
        assert!(steps[2].contains("drivers"));
        assert!(steps[3].contains("banks"));
        assert!(steps[4].contains("127.0.0.1"));
        assert!(engine.is_running());
        assert!(engine.video.vsync);
    }

    #[test]
    fn test_stop_order_and_state() {
        let mut engine = GameEngineFacade::default();
        engine.start_game();
        let steps = engine.stop_game();
        assert!(steps[0].starts_with("NetworkEngine"));
        assert!(steps[1].starts_with("AudioEngine"));
        assert!(steps[2].starts_with("VideoEngine"));
        assert!(!engine.is_running());
        assert_eq!(engine.video.resolution, None);
    }
}

fn main() {
    console::init_logging();
    console::header("Facade Pattern (Game Engine)");

    let mut engine = GameEngineFacade::default();
    let steps = engine.start_game();
    print_block("Starting the game...", &steps, "Game is ready and running!");
    tracing::debug!(running = engine.is_running(), "engine started");

    println!("... PLAYING ...");
    thread::sleep(Settings::global().latency(Duration::from_secs(1)));

    let steps = engine.stop_game();
    print_block("Shutting down the game...", &steps, "Game shut down safely.");
    tracing::debug!(running = engine.is_running(), "engine stopped");

    console::pause();
}
