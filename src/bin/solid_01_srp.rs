// SOLID 1: Single Responsibility Principle
// The wrong version lets `User` persist itself and send mail. The correct one
// keeps `User` as plain data and gives storage and mail their own types.

use oop_design_patterns::console;

mod wrong_use {
    pub struct User {
        pub name: String,
        pub email: String,
    }

    impl User {
        /// Storage concern living inside the data type.
        pub fn save_user(&self) -> String {
            format!("User {}, {} saved to the database.", self.name, self.email)
        }

        /// Mail concern living inside the data type.
        pub fn send_welcome_email(&self) -> String {
            format!("Welcome email sent to {}.", self.email)
        }
    }
}

mod correct_use {
    #[derive(Debug, Clone, PartialEq)]
    pub struct User {
        pub name: String,
        pub email: String,
    }

    #[derive(Default)]
    pub struct UserRepository {
        saved: Vec<User>,
    }

    impl UserRepository {
        pub fn save(&mut self, user: &User) -> String {
            self.saved.push(user.clone());
            format!("User {}, {} saved to the database.", user.name, user.email)
        }

        pub fn count(&self) -> usize {
            self.saved.len()
        }
    }

    pub struct EmailService;

    impl EmailService {
        pub fn send_welcome_email(&self, user: &User) -> String {
            format!("Welcome email sent to {}.", user.email)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct_user() -> correct_use::User {
        correct_use::User {
            name: "Ertugrul".to_string(),
            email: "ertugrul@example.com".to_string(),
        }
    }

    #[test]
    fn test_split_types_produce_the_same_output() {
        let wrong = wrong_use::User {
            name: "Ertugrul".to_string(),
            email: "ertugrul@example.com".to_string(),
        };
        let user = correct_user();
        let mut repository = correct_use::UserRepository::default();

        assert_eq!(wrong.save_user(), repository.save(&user));
        assert_eq!(wrong.send_welcome_email(), correct_use::EmailService.send_welcome_email(&user));
    }

    #[test]
    fn test_repository_keeps_saved_users() {
        let mut repository = correct_use::UserRepository::default();
        repository.save(&correct_user());
        repository.save(&correct_user());
        assert_eq!(repository.count(), 2);
    }
}

fn main() {
    console::init_logging();
    console::header("Single Responsibility Principle");

    console::section("Wrong use");
    let user = wrong_use::User {
        name: "Ertugrul".to_string(),
        email: "ertugrul@example.com".to_string(),
    };
    println!("{}", user.save_user());
    println!("{}", user.send_welcome_email());

    println!();
    console::section("Correct use");
    let user = correct_use::User {
        name: "Ertugrul".to_string(),
        email: "ertugrul@example.com".to_string(),
    };
    let mut repository = correct_use::UserRepository::default();
    println!("{}", repository.save(&user));
    println!("{}", correct_use::EmailService.send_welcome_email(&user));
    tracing::debug!(saved = repository.count(), "repository state");

    console::pause();
}
