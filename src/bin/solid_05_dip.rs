// SOLID 5: Dependency Inversion Principle
// The wrong `UserManager` builds its MySQL database itself. The correct
// managers receive a `Database` or `Logger` abstraction through the
// constructor, so storage and logging can be swapped or mocked.

use oop_design_patterns::console;

mod wrong_use {
    pub struct MySqlDatabase;

    impl MySqlDatabase {
        pub fn save(&self, user: &str) -> String {
            format!("{} saved to the MySQL database.", user)
        }
    }

    pub struct UserManager {
        database: MySqlDatabase,
    }

    impl UserManager {
        /// The concrete database is hard-wired here.
        pub fn new() -> Self {
            Self {
                database: MySqlDatabase,
            }
        }

        pub fn save_user(&self, user: &str) -> String {
            self.database.save(user)
        }
    }
}

mod correct_use {
    #[cfg_attr(test, mockall::automock)]
    pub trait Database {
        fn save(&self, user: &str) -> String;
    }

    #[cfg_attr(test, mockall::automock)]
    pub trait Logger {
        fn log(&self, message: &str) -> String;
    }

    pub struct MySqlDatabase;
    pub struct MongoDatabase;
    pub struct FileLogger;

    impl Database for MySqlDatabase {
        fn save(&self, user: &str) -> String {
            format!("{} saved to the MySQL database.", user)
        }
    }

    impl Database for MongoDatabase {
        fn save(&self, user: &str) -> String {
            format!("{} saved to the MongoDB database.", user)
        }
    }

    impl Logger for FileLogger {
        fn log(&self, message: &str) -> String {
            format!("[FileLog] {}", message)
        }
    }

    pub struct UserManager {
        database: Box<dyn Database>,
    }

    impl UserManager {
        pub fn new(database: Box<dyn Database>) -> Self {
            Self { database }
        }

        pub fn save_user(&self, user: &str) -> String {
            self.database.save(user)
        }
    }

    pub struct AiManager {
        logger: Box<dyn Logger>,
    }

    impl AiManager {
        pub fn new(logger: Box<dyn Logger>) -> Self {
            Self { logger }
        }

        pub fn save_ai(&self, name: &str) -> String {
            self.logger.log(&format!("{} saved.", name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::correct_use::*;
    use super::wrong_use;

    #[test]
    fn test_user_manager_delegates_to_injected_database() {
        let mut database = MockDatabase::new();
        database
            .expect_save()
            .withf(|user| user == "Ertugrul")
            .times(1)
            .returning(|user| format!("mock saved {}", user));

        let manager = UserManager::new(Box::new(database));
        assert_eq!(manager.save_user("Ertugrul"), "mock saved Ertugrul");
    }

    #[test]
    fn test_ai_manager_logs_through_abstraction() {
        let mut logger = MockLogger::new();
        logger
            .expect_log()
            .withf(|message| message == "AI-1 saved.")
            .times(1)
            .returning(|message| message.to_string());

        let manager = AiManager::new(Box::new(logger));
        assert_eq!(manager.save_ai("AI-1"), "AI-1 saved.");
    }

    #[test]
    fn test_databases_are_interchangeable() {
        let mysql = UserManager::new(Box::new(MySqlDatabase));
        let mongo = UserManager::new(Box::new(MongoDatabase));
        assert!(mysql.save_user("A").contains("MySQL"));
        assert!(mongo.save_user("A").contains("MongoDB"));
        assert_eq!(
            mysql.save_user("A"),
            wrong_use::UserManager::new().save_user("A")
        );
    }
}

fn main() {
    console::init_logging();
    console::header("Dependency Inversion Principle");

    console::section("Correct use");
    let user_manager = correct_use::UserManager::new(Box::new(correct_use::MySqlDatabase));
    let ai_manager = correct_use::AiManager::new(Box::new(correct_use::FileLogger));
    println!("{}", user_manager.save_user("Ertugrul"));
    println!("{}", ai_manager.save_ai("AI-1"));

    // Same manager, different storage
    let mongo_manager = correct_use::UserManager::new(Box::new(correct_use::MongoDatabase));
    println!("{}", mongo_manager.save_user("Ertugrul"));

    println!();
    console::section("Wrong use");
    let user_manager = wrong_use::UserManager::new();
    println!("{}", user_manager.save_user("Ertugrul"));

    console::pause();
}
