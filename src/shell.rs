//! Interactive menu loop.
//!
//! Reads a category choice and an identifier per round, prints the outcome
//! and keeps going until the user exits or input ends.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::category::Category;
use crate::validation::{Advisory, ValidationResult, Validator};

const EXIT_CHOICE: &str = "6";
const EXIT_WORD: &str = "exit";

/// Interactive validator session over any line reader and writer
pub struct Shell<R, W> {
    input: R,
    output: W,
    validator: Validator,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, validator: Validator) -> Self {
        Self {
            input,
            output,
            validator,
        }
    }

    /// Run the session until exit or end of input
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner()?;

        let mut rounds = 0usize;
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
                break;
            };
            if choice == EXIT_CHOICE || choice.eq_ignore_ascii_case(EXIT_WORD) {
                break;
            }

            let Some(category) = Category::from_menu_choice(&choice) else {
                debug!("rejected menu choice {:?}", choice);
                writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 6."
                )?;
                continue;
            };

            let Some(identifier) = self.prompt("Enter the identifier to validate: ")? else {
                break;
            };
            if identifier.eq_ignore_ascii_case(EXIT_WORD) {
                break;
            }

            let result = self.validator.validate(category, &identifier);
            write_outcome(&mut self.output, category, &identifier, &result)?;
            rounds += 1;
        }

        info!("session ended after {} validations", rounds);
        writeln!(
            self.output,
            "Thank you for using the Java Identifier Validator!"
        )?;
        self.output.flush()
    }

    /// Consume the shell and return its writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "Java Identifier Validator")?;
        writeln!(self.output, "========================")?;
        writeln!(
            self.output,
            "This program checks if a string is valid as a Java identifier"
        )?;
        writeln!(self.output, "Type 'exit' to quit")?;
        writeln!(self.output)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nWhat would you like to validate?")?;
        writeln!(self.output, "1. Class name")?;
        writeln!(self.output, "2. Method name")?;
        writeln!(self.output, "3. Variable name")?;
        writeln!(self.output, "4. Package name")?;
        writeln!(self.output, "5. Generic identifier")?;
        writeln!(self.output, "6. Exit")
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Print advisories and the success line, or the failure reason
pub fn write_outcome<W: Write>(
    output: &mut W,
    category: Category,
    identifier: &str,
    result: &ValidationResult,
) -> io::Result<()> {
    match result {
        Ok(advisories) => {
            write_advisories(output, advisories)?;
            writeln!(output, "'{}' is a valid {}.", identifier, category.noun())
        }
        Err(e) => writeln!(output, "Error: {}", e),
    }
}

fn write_advisories<W: Write>(output: &mut W, advisories: &[Advisory]) -> io::Result<()> {
    for advisory in advisories {
        writeln!(output, "Warning: {}", advisory)?;
    }
    Ok(())
}
