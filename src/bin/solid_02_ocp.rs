// SOLID 2: Open/Closed Principle
// Adding a role to the wrong version means editing the `match` in
// `ScreenManager`. The correct version adds a new `Screen` impl instead.

use oop_design_patterns::console;

mod wrong_use {
    #[derive(Debug, Clone, Copy)]
    pub enum UserRole {
        Admin,
        User,
    }

    pub struct ScreenManager;

    impl ScreenManager {
        /// Every new role is another arm here.
        pub fn show_screen(&self, role: UserRole) -> &'static str {
            match role {
                UserRole::Admin => "Admin screen shown.",
                UserRole::User => "User screen shown.",
            }
        }
    }
}

mod correct_use {
    pub trait Screen {
        fn show(&self) -> &'static str;
    }

    pub struct AdminScreen;
    pub struct UserScreen;
    pub struct ModeratorScreen;

    impl Screen for AdminScreen {
        fn show(&self) -> &'static str {
            "Admin screen shown."
        }
    }

    impl Screen for UserScreen {
        fn show(&self) -> &'static str {
            "User screen shown."
        }
    }

    impl Screen for ModeratorScreen {
        fn show(&self) -> &'static str {
            "Moderator screen shown."
        }
    }

    pub struct ScreenManager;

    impl ScreenManager {
        pub fn show_screen(&self, screen: &dyn Screen) -> &'static str {
            screen.show()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use correct_use::Screen;

    struct GuestScreen;

    impl Screen for GuestScreen {
        fn show(&self) -> &'static str {
            "Guest screen shown."
        }
    }

    #[test]
    fn test_both_versions_agree_on_existing_roles() {
        let wrong = wrong_use::ScreenManager;
        let right = correct_use::ScreenManager;
        assert_eq!(
            wrong.show_screen(wrong_use::UserRole::Admin),
            right.show_screen(&correct_use::AdminScreen)
        );
        assert_eq!(
            wrong.show_screen(wrong_use::UserRole::User),
            right.show_screen(&correct_use::UserScreen)
        );
    }

    #[test]
    fn test_new_screen_without_touching_manager() {
        assert_eq!(correct_use::ScreenManager.show_screen(&GuestScreen), "Guest screen shown.");
    }
}

fn main() {
    console::init_logging();
    console::header("Open/Closed Principle");

    console::section("Correct use");
    let manager = correct_use::ScreenManager;
    let screens: [&dyn correct_use::Screen; 3] = [
        &correct_use::AdminScreen,
        &correct_use::UserScreen,
        &correct_use::ModeratorScreen,
    ];
    for screen in screens {
        println!("{}", manager.show_screen(screen));
    }

    println!();
    console::section("Wrong use");
    let manager = wrong_use::ScreenManager;
    for role in [wrong_use::UserRole::Admin, wrong_use::UserRole::User] {
        println!("{}", manager.show_screen(role));
    }

    console::pause();
}
