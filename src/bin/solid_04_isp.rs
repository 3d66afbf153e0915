// SOLID 4: Interface Segregation Principle
// One fat printer trait forces a basic printer to stub out scan and fax.
// Small capability traits let each device implement only what it can do.

use oop_design_patterns::console;
use oop_design_patterns::PatternError;

mod wrong_use {
    use super::PatternError;

    pub trait MultiFunctionPrinter {
        fn print(&self) -> Result<&'static str, PatternError>;
        fn scan(&self) -> Result<&'static str, PatternError>;
        fn fax(&self) -> Result<&'static str, PatternError>;
    }

    pub struct BasicPrinter;

    impl MultiFunctionPrinter for BasicPrinter {
        fn print(&self) -> Result<&'static str, PatternError> {
            Ok("Printing.")
        }

        fn scan(&self) -> Result<&'static str, PatternError> {
            Err(PatternError::not_implemented("BasicPrinter", "scan"))
        }

        fn fax(&self) -> Result<&'static str, PatternError> {
            Err(PatternError::not_implemented("BasicPrinter", "fax"))
        }
    }
}

mod correct_use {
    pub trait Printer {
        fn print(&self) -> &'static str;
    }

    pub trait Scanner {
        fn scan(&self) -> &'static str;
    }

    pub trait Fax {
        fn fax(&self) -> &'static str;
    }

    pub trait MultiFunction: Printer + Scanner + Fax {}

    impl<T: Printer + Scanner + Fax> MultiFunction for T {}

    pub struct BasicPrinter;
    pub struct MultiFunctionPrinter;

    impl Printer for BasicPrinter {
        fn print(&self) -> &'static str {
            "Printing."
        }
    }

    impl Printer for MultiFunctionPrinter {
        fn print(&self) -> &'static str {
            "Printing."
        }
    }

    impl Scanner for MultiFunctionPrinter {
        fn scan(&self) -> &'static str {
            "Scanning."
        }
    }

    impl Fax for MultiFunctionPrinter {
        fn fax(&self) -> &'static str {
            "Sending a fax."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use correct_use::{MultiFunction, Printer};

    #[test]
    fn test_fat_trait_forces_failures() {
        use wrong_use::MultiFunctionPrinter as _;
        let printer = wrong_use::BasicPrinter;
        assert_eq!(printer.print(), Ok("Printing."));
        assert_eq!(printer.scan(), Err(PatternError::not_implemented("BasicPrinter", "scan")));
        assert!(printer.fax().is_err());
    }

    #[test]
    fn test_multi_function_through_one_bound() {
        fn run_all(device: &dyn MultiFunction) -> [&'static str; 3] {
            [device.print(), device.scan(), device.fax()]
        }
        assert_eq!(
            run_all(&correct_use::MultiFunctionPrinter),
            ["Printing.", "Scanning.", "Sending a fax."]
        );
    }

    #[test]
    fn test_basic_printer_only_prints() {
        let printer: &dyn Printer = &correct_use::BasicPrinter;
        assert_eq!(printer.print(), "Printing.");
    }
}

fn main() {
    console::init_logging();
    console::header("Interface Segregation Principle");

    console::section("Wrong use");
    {
        use wrong_use::MultiFunctionPrinter;
        let printer: &dyn MultiFunctionPrinter = &wrong_use::BasicPrinter;
        let calls: [(&str, fn(&dyn MultiFunctionPrinter) -> Result<&'static str, PatternError>); 3] = [
            ("print", |p: &dyn MultiFunctionPrinter| p.print()),
            ("scan", |p: &dyn MultiFunctionPrinter| p.scan()),
            ("fax", |p: &dyn MultiFunctionPrinter| p.fax()),
        ];
        for (name, call) in calls {
            match call(printer) {
                Ok(message) => println!("{}", message),
                Err(err) => {
                    tracing::warn!(%err, capability = name, "forced stub called");
                    console::failure(&format!("Error: {}", err));
                }
            }
        }
    }

    println!();
    console::section("Correct use");
    {
        use correct_use::{MultiFunction, Printer};
        let basic: &dyn Printer = &correct_use::BasicPrinter;
        println!("{}", basic.print());
        let mfp: &dyn MultiFunction = &correct_use::MultiFunctionPrinter;
        println!("{}", mfp.print());
        println!("{}", mfp.scan());
        println!("{}", mfp.fax());
    }

    console::pause();
}
