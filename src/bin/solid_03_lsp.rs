// SOLID 3: Liskov Substitution Principle
// A `Penguin` that must implement `fly` can only fail, so it cannot stand in
// for a `Bird`. Splitting flying birds into their own trait fixes the lie.

use oop_design_patterns::console;
use oop_design_patterns::PatternError;

mod wrong_use {
    use super::PatternError;

    pub trait Bird {
        fn fly(&self) -> Result<&'static str, PatternError>;
    }

    pub struct Penguin;

    impl Bird for Penguin {
        fn fly(&self) -> Result<&'static str, PatternError> {
            Err(PatternError::not_implemented("Penguin", "fly"))
        }
    }
}

mod correct_use {
    pub trait Bird {
        fn eat(&self) -> &'static str;
    }

    pub trait FlyingBird: Bird {
        fn fly(&self) -> &'static str;
    }

    pub struct Pigeon;
    pub struct Penguin;

    impl Bird for Pigeon {
        fn eat(&self) -> &'static str {
            "Pigeon is eating."
        }
    }

    impl FlyingBird for Pigeon {
        fn fly(&self) -> &'static str {
            "Pigeon is flying."
        }
    }

    impl Bird for Penguin {
        fn eat(&self) -> &'static str {
            "Penguin is eating."
        }
    }
}


fn main() {
    console::init_logging();
    console::header("Liskov Substitution Principle");

    console::section("Correct use");
    {
        use correct_use::{Bird, FlyingBird};
        let pigeon: &dyn FlyingBird = &correct_use::Pigeon;
        println!("{}", pigeon.fly());
        println!("{}", pigeon.eat());
        let penguin: &dyn Bird = &correct_use::Penguin;
        println!("{}", penguin.eat());
    }

    println!();
    console::section("Wrong use");
    {
        use wrong_use::Bird;
        let bird: &dyn Bird = &wrong_use::Penguin;
        match bird.fly() {
            Ok(message) => println!("{}", message),
            Err(err) => {
                tracing::warn!(%err, "substituted bird broke its contract");
                console::failure(&format!("Error: {}", err));
            }
        }
    }

    console::pause();
}
