// Pattern 3: Bridge - Entities and Render Backends Vary Independently
// Entities hold a reference to a `RenderApi` implementor; adding a backend
// never touches the entity types, and adding an entity never touches a backend.

use oop_design_patterns::console;

// ============================================================================
// Example: Implementor hierarchy
// ============================================================================

trait RenderApi {
    fn render_model(&self, model: &str, texture: &str) -> String;
    fn play_sound(&self, sound: &str) -> String;
}

struct DirectXRenderApi;

impl RenderApi for DirectXRenderApi {
    fn render_model(&self, model: &str, texture: &str) -> String {
        format!(
            "[DirectX - PC] Drawing '{}' with '{}' at 4K resolution. (Shader: High)",
            model, texture
        )
    }

    fn play_sound(&self, sound: &str) -> String {
        format!("[DirectX - Audio] Playing '{}' in Dolby Surround 7.1.", sound)
    }
}

struct OpenGlEsRenderApi;

impl RenderApi for OpenGlEsRenderApi {
    fn render_model(&self, model: &str, texture: &str) -> String {
        format!(
            "[OpenGL ES - Mobile] Drawing '{}' low-poly with basic '{}'. (Shader: Basic)",
            model, texture
        )
    }

    fn play_sound(&self, sound: &str) -> String {
        format!("[OpenGL ES - Audio] Playing '{}' in Mono.", sound)
    }
}

// ============================================================================
// Example: Abstraction hierarchy
// ============================================================================

trait GameEntity {
    fn draw(&self) -> Vec<String>;
}

struct Hero<'a> {
    renderer: &'a dyn RenderApi,
}

impl GameEntity for Hero<'_> {
    fn draw(&self) -> Vec<String> {
        vec![
            "--- The hero enters the stage ---".to_string(),
            self.renderer.render_model("PaladinMesh", "GoldenArmorTexture"),
            self.renderer.play_sound("HeroVoice_BattleCry"),
        ]
    }
}

struct Enemy<'a> {
    renderer: &'a dyn RenderApi,
}

impl GameEntity for Enemy<'_> {
    fn draw(&self) -> Vec<String> {
        vec![
            "--- An enemy appears ---".to_string(),
            self.renderer.render_model("OrcMesh", "DirtySkinTexture"),
            self.renderer.play_sound("Orc_Grunt"),
        ]
    }
}

fn draw_scene(platform: &str, renderer: &dyn RenderApi) {
    console::section(&format!("PLATFORM DETECTED: {}", platform));
    let entities: [&dyn GameEntity; 2] = [&Hero { renderer }, &Enemy { renderer }];
    for entity in entities {
        for line in entity.draw() {
            println!("{}", line);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Bridge Pattern Demo (Cross-Platform Rendering)");

    draw_scene("Windows PC (High Settings)", &DirectXRenderApi);
    console::rule(50);
    draw_scene("Android Mobile (Low Settings)", &OpenGlEsRenderApi);

    println!("\n--- Result ---");
    println!("Characters and render engines evolve independently.");
    println!("Adding a Vulkan backend needs no change to Hero.");

    console::pause();
}
