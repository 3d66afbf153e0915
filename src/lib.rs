// OOP Concepts, Design Patterns and SOLID Principles
// Shared plumbing for the standalone example programs under src/bin.

pub mod console;
pub mod delegate;
pub mod error;
pub mod settings;

pub use error::PatternError;

pub mod examples {
    //! # OOP, Design Patterns and SOLID: Example Catalog
    //!
    //! Every program is independent and prints a fixed narrative.
    //!
    //! ## Language Features
    //! - Delegates (function pointers, multicast invocation lists)
    //! - `Func` / `Action` / `Predicate` (closures)
    //! - Sync vs Async (tokio)
    //!
    //! ## Design Patterns
    //! - Creational: Abstract Factory, Builder, Factory, Multiton, Prototype, Singleton
    //! - Structural: Adapter, Bridge, Composite, Decorator, Facade, Proxy
    //! - Behavioral: Chain of Responsibility, Command, Mediator, Memento,
    //!   Null Object, Observer, State, Strategy, Template Method, Visitor
    //! - Dependency Injection
    //!
    //! ## SOLID
    //! - SRP, OCP, LSP, ISP, DIP (each with a wrong and a correct half)
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin pattern_06_command
    //! PATTERNS_NO_PAUSE=1 cargo run --bin solid_05_dip
    //! RUST_LOG=debug cargo run --bin pattern_19_singleton
    //! ```
}
