// Pattern 12: Mediator - Shop Components Talking Through One Hub
// Wallet, inventory, sound and UI never call each other. They post typed
// events on a channel and `ShopMediator` decides who reacts.

use oop_design_patterns::console;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, PartialEq)]
enum ShopEvent {
    BuyRequest { item: String, price: u32 },
    InsufficientFunds,
    ItemAdded(String),
}

/// A component's only link to the rest of the shop.
#[derive(Clone)]
struct MediatorLink {
    sender: Sender<ShopEvent>,
}

impl MediatorLink {
    fn notify(&self, event: ShopEvent) {
        if let Err(err) = self.sender.send(event) {
            tracing::warn!(event = ?err.0, "mediator is gone, event dropped");
        }
    }
}

// ============================================================================
// Example: Colleagues
// ============================================================================

struct WalletSystem {
    gold: u32,
    mediator: MediatorLink,
}

impl WalletSystem {
    fn try_spend_gold(&mut self, amount: u32) -> bool {
        if self.gold >= amount {
            self.gold -= amount;
            println!("[Wallet] Spent {} gold. Remaining: {}", amount, self.gold);
            true
        } else {
            println!("[Wallet] Insufficient balance!");
            self.mediator.notify(ShopEvent::InsufficientFunds);
            false
        }
    }
}

struct InventorySystem {
    items: Vec<String>,
    mediator: MediatorLink,
}

impl InventorySystem {
    fn add_item(&mut self, item: &str) {
        self.items.push(item.to_string());
        println!("[Inventory] '{}' added to the bag.", item);
        self.mediator.notify(ShopEvent::ItemAdded(item.to_string()));
    }
}

#[derive(Default)]
struct SoundSystem {
    played: Vec<String>,
}

impl SoundSystem {
    fn play_sound(&mut self, sound: &str) {
        println!("[Audio] Playing: ♫ {} ♫", sound);
        self.played.push(sound.to_string());
    }
}

struct UiSystem {
    messages: Vec<String>,
    mediator: MediatorLink,
}

impl UiSystem {
    fn show_message(&mut self, message: &str) {
        println!("[UI] On screen: >> {} <<", message);
        self.messages.push(message.to_string());
    }

    fn buy_button_clicked(&self, item: &str, price: u32) {
        println!("\n[UI] Player clicked buy for '{}'.", item);
        self.mediator.notify(ShopEvent::BuyRequest {
            item: item.to_string(),
            price,
        });
    }
}

// ============================================================================
// Example: Mediator
// ============================================================================

struct ShopMediator {
    wallet: WalletSystem,
    inventory: InventorySystem,
    sound: SoundSystem,
    ui: UiSystem,
    events: Receiver<ShopEvent>,
    /// Sounds and UI messages across components, in the order they happened.
    timeline: Vec<String>,
}

impl ShopMediator {
    fn new(starting_gold: u32) -> Self {
        let (sender, events) = mpsc::channel();
        let link = MediatorLink { sender };
        Self {
            wallet: WalletSystem {
                gold: starting_gold,
                mediator: link.clone(),
            },
            inventory: InventorySystem {
                items: Vec::new(),
                mediator: link.clone(),
            },
            sound: SoundSystem::default(),
            ui: UiSystem {
                messages: Vec::new(),
                mediator: link,
            },
            events,
            timeline: Vec::new(),
        }
    }

    /// Routes queued events until the shop is quiet again.
    fn dispatch(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.notify(event);
        }
    }

    fn notify(&mut self, event: ShopEvent) {
        tracing::debug!(?event, "routing");
        match event {
            ShopEvent::BuyRequest { item, price } => {
                if self.wallet.try_spend_gold(price) {
                    self.inventory.add_item(&item);
                    self.play("kaching.wav");
                    self.show("Purchase successful!");
                } else {
                    // The wallet's complaint reaches the UI before the buzz.
                    self.dispatch();
                    self.play("error_buzz.wav");
                }
            }
            ShopEvent::InsufficientFunds => {
                self.show("You can't afford that, my poor friend!");
            }
            // Hook for quests or achievements
            ShopEvent::ItemAdded(_) => {}
        }
    }

    fn play(&mut self, sound: &str) {
        self.sound.play_sound(sound);
        self.timeline.push(format!("sound:{}", sound));
    }

    fn show(&mut self, message: &str) {
        self.ui.show_message(message);
        self.timeline.push(format!("ui:{}", message));
    }

    fn buy(&mut self, item: &str, price: u32) {
        self.ui.buy_button_clicked(item, price);
        self.dispatch();
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Mediator Pattern (Shop System)");

    let mut shop = ShopMediator::new(500);
    shop.buy("Iron Sword", 100);
    console::rule(40);
    shop.buy("Legendary Armor", 1000);

    console::pause();
}
