use crate::Quiz::equation_catalog::{global_catalog, Difficulty, EquationCatalog};
use crate::Quiz::quiz_output::{atom_count_table, format_equation, history_table, stats_table};
use crate::Quiz::session::{GameStatus, QuizSession, Side};
use crate::cli::quiz_help::{QUIZ_ENG_HELPER, QUIZ_PT_HELPER};
use std::io::{self, Write};
use std::path::PathBuf;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

const ALREADY_SOLVED: &str = "A equação já está resolvida. Peça a próxima!";

pub fn quiz_menu() {
    loop {
        println!("\n=== Balanceamento Químico ===");
        println!("\x1b[33m1. Start training\x1b[0m");
        println!("\x1b[33m2. Train from equation file\x1b[0m");
        println!("\x1b[33m3. Read help (pt)\x1b[0m");
        println!("\x1b[33m4. Read help (eng)\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        io::stdout().flush().unwrap();

        let choice = get_user_input();
        match choice.trim() {
            "1" => {
                let catalog = global_catalog();
                if let Some(difficulty) = select_difficulty(catalog) {
                    run_quiz(difficulty, catalog);
                }
            }
            "2" => train_from_file(),
            "3" => show_help_portuguese(),
            "4" => show_help_english(),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Train against a user-supplied JSON equation base instead of the embedded
/// one.
fn train_from_file() {
    print!("\x1b[36mEnter file path: \x1b[0m");
    io::stdout().flush().unwrap();
    let file_path = get_user_input();
    let path = PathBuf::from(file_path.trim());

    if !path.exists() {
        println!("File not found: {}", file_path.trim());
        return;
    }
    match EquationCatalog::from_json_file(&path) {
        Ok(catalog) => {
            if let Some(difficulty) = select_difficulty(&catalog) {
                run_quiz(difficulty, &catalog);
            }
        }
        Err(err) => println!("Error loading equation base: {}", err),
    }
}

fn select_difficulty(catalog: &EquationCatalog) -> Option<Difficulty> {
    println!("\nEscolha a dificuldade:");
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let count = catalog.of_difficulty(*difficulty).count();
        println!(
            "\x1b[33m{}. {}{}{} ({} equações)\x1b[0m",
            i + 1,
            difficulty.ansi_color(),
            difficulty.label(),
            RESET,
            count
        );
    }
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();

    let choice = get_user_input();
    match choice.trim() {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Medium),
        "3" => Some(Difficulty::Hard),
        _ => {
            println!("Invalid choice. Please try again.");
            None
        }
    }
}

pub fn run_quiz(difficulty: Difficulty, catalog: &EquationCatalog) {
    let mut session = QuizSession::start(difficulty, catalog);
    let mut feedback = String::new();
    loop {
        if session.current.is_none() {
            println!(
                "No equations available for difficulty '{}'.",
                session.difficulty.as_str()
            );
            break;
        }
        print_round(&session, &feedback);
        print_round_menu(&session);

        let choice = get_user_input();
        match choice.trim() {
            "1" => {
                if session.is_locked() {
                    feedback = ALREADY_SOLVED.to_string();
                } else {
                    enter_coefficients(&mut session);
                    feedback.clear();
                }
            }
            "2" => match session.check() {
                Some(outcome) => {
                    if outcome.balanced && session.auto_next {
                        println!(
                            "{}{} Preparando próximo desafio...{}",
                            GREEN, outcome.message, RESET
                        );
                        session.next_equation(catalog);
                        feedback.clear();
                    } else {
                        feedback = outcome.message;
                    }
                }
                None => feedback = ALREADY_SOLVED.to_string(),
            },
            "3" => {
                session.toggle_hint();
                feedback.clear();
            }
            "4" => match session.solve() {
                Some(message) => feedback = message,
                None => feedback = ALREADY_SOLVED.to_string(),
            },
            "5" => {
                session.next_equation(catalog);
                feedback.clear();
            }
            "6" => {
                if let Some(new_difficulty) = select_difficulty(catalog) {
                    session.set_difficulty(new_difficulty, catalog);
                    feedback.clear();
                }
            }
            "7" => show_history(&session),
            "8" => {
                session.auto_next = !session.auto_next;
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
    println!("\nPontuação final:");
    stats_table(session.score, &session.stats).printstd();
}

fn print_round(session: &QuizSession, feedback: &str) {
    let Some(equation) = session.current.as_ref() else {
        return;
    };
    println!();
    stats_table(session.score, &session.stats).printstd();
    println!(
        "\nDificuldade: {}{}{}",
        equation.difficulty.ansi_color(),
        equation.difficulty.label(),
        RESET
    );
    let (color, default_line) = match session.status {
        GameStatus::Playing => ("", "Insira os coeficientes para balancear a equação."),
        GameStatus::Correct => (GREEN, ""),
        GameStatus::Incorrect => (RED, ""),
        GameStatus::Solved => (CYAN, ""),
    };
    let line = if feedback.is_empty() {
        default_line
    } else {
        feedback
    };
    if !line.is_empty() {
        println!("{}{}{}", color, line, RESET);
    }
    println!("\n  {}\n", format_equation(equation, &session.coefficients));
    if session.show_hint {
        if let Some(table) = atom_count_table(equation, &session.coefficients) {
            println!("Contagem de Átomos:");
            table.printstd();
        }
    }
}

fn print_round_menu(session: &QuizSession) {
    println!("\x1b[33m1. Inserir coeficientes\x1b[0m");
    println!("\x1b[33m2. Verificar\x1b[0m");
    println!(
        "\x1b[33m3. {}\x1b[0m",
        if session.show_hint { "Esconder dica" } else { "Dica" }
    );
    println!("\x1b[33m4. Resolver\x1b[0m");
    println!("\x1b[33m5. Próxima\x1b[0m");
    println!("\x1b[33m6. Mudar dificuldade\x1b[0m");
    println!("\x1b[33m7. Histórico\x1b[0m");
    println!(
        "\x1b[33m8. Avançar automaticamente: {}\x1b[0m",
        if session.auto_next { "ligado" } else { "desligado" }
    );
    println!("\x1b[33m0. Encerrar sessão\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

/// Ask for every coefficient box in order. Enter keeps the current value of
/// a box, anything typed replaces it.
fn enter_coefficients(session: &mut QuizSession) {
    let Some(equation) = session.current.clone() else {
        return;
    };
    for (i, formula) in equation.reactants.iter().enumerate() {
        prompt_coefficient(session, Side::Reactants, i, formula);
    }
    for (i, formula) in equation.products.iter().enumerate() {
        prompt_coefficient(session, Side::Products, i, formula);
    }
}

fn prompt_coefficient(session: &mut QuizSession, side: Side, index: usize, formula: &str) {
    let current = match side {
        Side::Reactants => &session.coefficients.reactants[index],
        Side::Products => &session.coefficients.products[index],
    };
    if current.is_empty() {
        print!("{}Coeficiente para {}: {}", CYAN, formula, RESET);
    } else {
        print!(
            "{}Coeficiente para {} (Enter mantém '{}'): {}",
            CYAN, formula, current, RESET
        );
    }
    io::stdout().flush().unwrap();
    let value = get_user_input();
    let value = value.trim();
    if !value.is_empty() {
        session.set_coefficient(side, index, value);
    }
}

fn show_history(session: &QuizSession) {
    println!("\n=== Histórico de Equações ===");
    match history_table(&session.history) {
        Some(table) => table.printstd(),
        None => println!("Nenhuma equação resolvida ainda. Comece a jogar!"),
    }
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}

fn show_help_portuguese() {
    println!("\n=== Como Jogar (Português) ===");
    println!("{}", QUIZ_PT_HELPER);
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}

fn show_help_english() {
    println!("\n=== How to play (English) ===");
    println!("{}", QUIZ_ENG_HELPER);
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
