// SOLID 0: Overview - Goals of OOP and the Five Principles
// Reference card printed before the individual principle programs.

use colored::Colorize;
use oop_design_patterns::console;

const OOP_GOALS: [&str; 4] = ["Sustainability", "Extensibility", "Reusability", "Readability"];

const OOP_PILLARS: [&str; 4] = ["Encapsulation", "Inheritance", "Polymorphism", "Abstraction"];

const PRINCIPLES: [(&str, &str, &str); 5] = [
    (
        "SRP",
        "Single Responsibility Principle",
        "A class or module should have exactly one responsibility, and so one reason to change.",
    ),
    (
        "OCP",
        "Open/Closed Principle",
        "Components should be open for extension but closed for modification.",
    ),
    (
        "LSP",
        "Liskov Substitution Principle",
        "A subtype must be usable anywhere its base type is expected without breaking the program.",
    ),
    (
        "ISP",
        "Interface Segregation Principle",
        "No type should be forced to depend on methods it does not use; prefer small focused interfaces.",
    ),
    (
        "DIP",
        "Dependency Inversion Principle",
        "High-level modules should not depend on low-level modules; both should depend on abstractions.",
    ),
];

const BENEFITS: [&str; 5] = [
    "More organised code",
    "Fewer bugs",
    "Fewer dependencies",
    "Easier maintenance",
    "More disciplined code",
];

fn numbered(items: &[&str]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}", i + 1, item))
        .collect()
}

fn principle_lines() -> Vec<String> {
    PRINCIPLES
        .iter()
        .enumerate()
        .map(|(i, (short, name, definition))| format!("  {}. {} ({})\n     {}", i + 1, name, short, definition))
        .collect()
}


fn main() {
    console::init_logging();
    console::header("Hello, OOP & SOLID!");

    let blocks: [(&str, Vec<String>); 4] = [
        ("Goals of OOP", numbered(&OOP_GOALS)),
        ("Pillars of OOP", numbered(&OOP_PILLARS)),
        ("SOLID principles", principle_lines()),
        ("Why use SOLID", numbered(&BENEFITS)),
    ];

    for (title, lines) in &blocks {
        println!("{}", title.bold().yellow());
        for line in lines {
            println!("{}", line);
        }
        println!();
    }

    console::pause();
}
