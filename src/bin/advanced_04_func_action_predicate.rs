// Language Feature 4: Predicate, Func and Action
// Predicate<T> = Fn(&T) -> bool, Func<T, R> = Fn(&T) -> R,
// Action<T> = Fn(&T). Actions can be chained into one invocation list.

use oop_design_patterns::console;
use oop_design_patterns::delegate::Multicast;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}

fn people() -> Vec<Person> {
    vec![
        Person::new("Alice", 30),
        Person::new("Bob", 15),
        Person::new("Charlie", 25),
        Person::new("Dave", 12),
        Person::new("Eve", 35),
    ]
}

// ============================================================================
// Example: Predicate - filter adults
// ============================================================================

fn find_all<'a>(people: &'a [Person], predicate: impl Fn(&Person) -> bool) -> Vec<&'a Person> {
    people.iter().filter(|p| predicate(*p)).collect()
}

fn is_adult(person: &Person) -> bool {
    person.age >= 18
}

fn predicate_example(people: &[Person]) {
    println!("Adults:");
    for person in find_all(people, is_adult) {
        println!("  {}", person);
    }
}

// ============================================================================
// Example: Func - build a greeting
// ============================================================================

fn create_greeting(person: &Person) -> String {
    format!("Hello, {}! You are {} years old.", person.name, person.age)
}

fn func_example(people: &[Person]) {
    let greeting: &dyn Fn(&Person) -> String = &create_greeting;
    for person in people {
        println!("  {}", greeting(person));
    }
}

// ============================================================================
// Example: Action - print, compare, chain
// ============================================================================

fn compare_ages(first: &Person, second: &Person) -> String {
    match first.age.cmp(&second.age) {
        Ordering::Greater => format!("{} is older than {}", first.name, second.name),
        Ordering::Less => format!("{} is older than {}", second.name, first.name),
        Ordering::Equal => format!("{} and {} are of the same age", first.name, second.name),
    }
}

fn chained_actions() -> Multicast<str, String> {
    let mut chain = Multicast::with(|s: &str| format!("{}!!!", s));
    chain.add(|s: &str| s.to_uppercase());
    chain
}

fn action_example(people: &[Person]) {
    let print_message = |msg: &str| println!("  {}", msg);
    print_message("This is an Action message.");

    let compare: &dyn Fn(&Person, &Person) = &|a: &Person, b: &Person| println!("  {}", compare_ages(a, b));
    if let [first, second, ..] = people {
        compare(first, second);
    }

    println!("  Chained Actions:");
    for line in chained_actions().invoke_all("Test message") {
        print_message(&line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_keeps_adults_in_order() {
        let people = people();
        let names: Vec<&str> = find_all(&people, is_adult)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Charlie", "Eve"]);
    }

    #[test]
    fn test_func_greeting() {
        assert_eq!(
            create_greeting(&Person::new("Bob", 15)),
            "Hello, Bob! You are 15 years old."
        );
    }

    #[test]
    fn test_compare_ages() {
        let alice = Person::new("Alice", 30);
        let bob = Person::new("Bob", 15);
        let twin = Person::new("Ann", 30);
        assert_eq!(compare_ages(&alice, &bob), "Alice is older than Bob");
        assert_eq!(compare_ages(&bob, &alice), "Alice is older than Bob");
        assert_eq!(compare_ages(&alice, &twin), "Alice and Ann are of the same age");
    }

    #[test]
    fn test_chained_actions() {
        assert_eq!(
            chained_actions().invoke_all("Test message"),
            vec!["Test message!!!", "TEST MESSAGE"]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Person::new("Eve", 35).to_string(), "Name: Eve, Age: 35");
    }
}

fn main() {
    console::init_logging();
    console::header("Predicate / Func / Action");
    let people = people();

    println!("=== Predicate ===");
    predicate_example(&people);
    println!();

    println!("=== Func ===");
    func_example(&people);
    println!();

    println!("=== Action ===");
    action_example(&people);

    console::pause();
}
