use crate::Examples::quiz_examples::quiz_examples;
use std::io::{self, Write};

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Formula parsing");
        println!("2. Balance checking");
        println!("3. Equation catalog");
        println!("4. Scripted quiz session");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        io::stdout().flush().unwrap();

        let choice = get_user_input();
        match choice.trim() {
            "1" => quiz_examples(0),
            "2" => quiz_examples(1),
            "3" => quiz_examples(2),
            "4" => quiz_examples(3),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
