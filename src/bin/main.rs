use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use demo_core::config::DemoConfig;
use demo_core::persistence::{load_corpus_or_builtin, save_corpus};
use demo_core::{ClassificationTrace, DemoEngine};
use std::io::{stdin, stdout, Write};
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load()?;
    demo_core::logging::init(&config.log_level);

    let corpus = load_corpus_or_builtin(config.corpus_snapshot.as_deref())?;
    let mut engine = DemoEngine::new(corpus);
    let step_delay = Duration::from_millis(config.step_delay_ms);
    let mut status = String::new();

    loop {
        print_ui(&engine, &status)?;
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            ["exit"] => break,
            [] => {}
            ["try", category, text @ ..] => {
                let text = text.join(" ");
                match engine.classify(&text, category) {
                    Ok(trace) => play(&engine, &trace, step_delay)?,
                    Err(e) => status = format!("[ERROR] {e}"),
                }
            }
            ["add", category, text @ ..] => {
                status = match engine.corpus_mut().add_sample(category, &text.join(" ")) {
                    Ok(()) => format!("Added to '{category}'."),
                    Err(e) => format!("[ERROR] {e}"),
                };
            }
            ["edit", category, index, text @ ..] => {
                status = match index.parse::<usize>() {
                    Ok(index) => match engine.corpus_mut().edit_sample(category, index, &text.join(" ")) {
                        Ok(()) => format!("Edited {category} #{index}."),
                        Err(e) => format!("[ERROR] {e}"),
                    },
                    Err(_) => format!("[ERROR] '{index}' is not an index"),
                };
            }
            ["del", category, index] => {
                status = match index.parse::<usize>() {
                    Ok(index) => match engine.corpus_mut().remove_sample(category, index) {
                        Ok(removed) => format!("Removed '{removed}'."),
                        Err(e) => format!("[ERROR] {e}"),
                    },
                    Err(_) => format!("[ERROR] '{index}' is not an index"),
                };
            }
            [category, index] => match index.parse::<usize>() {
                Ok(index) => match engine.classify_sample(category, index) {
                    Ok(trace) => play(&engine, &trace, step_delay)?,
                    Err(e) => status = format!("[ERROR] {e}"),
                },
                Err(_) => status = format!("[ERROR] '{index}' is not an index"),
            },
            _ => status = "Unrecognized command.".to_string(),
        }
    }

    if let Some(path) = &config.corpus_snapshot {
        println!("\nSaving corpus...");
        match save_corpus(engine.corpus(), path) {
            Ok(()) => println!("Corpus saved to '{}'", path.display()),
            Err(e) => eprintln!("[ERROR] Could not save corpus: {e}"),
        }
    }
    Ok(())
}

fn print_ui(engine: &DemoEngine, status: &str) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "RNN Emotion Classification Demo".bold());
    println!("---------------------------------------------------------------");
    println!("'<category> <n>' classifies a sample, 'try <category> <text>' any text.");
    println!("'add', 'edit <category> <n> <text>', 'del <category> <n>'. 'exit' to quit.\n");

    let corpus = engine.corpus();
    for category in corpus.categories() {
        println!(
            "{} {} ({} samples)",
            category.label.clone().bold().cyan(),
            category.key,
            category.samples.len()
        );
        for (i, sample) in category.samples.iter().enumerate() {
            println!("  {:>2}: {}", i, sample);
        }
    }
    println!("\nVocabulary: {} characters", engine.vocabulary().len());

    if !status.is_empty() {
        println!("\n{}", status.yellow());
    }
    print!("\n> ");
    out.flush()
}

fn play(engine: &DemoEngine, trace: &ClassificationTrace, delay: Duration) -> std::io::Result<()> {
    let mut out = stdout();
    println!("\n{}", "Processing".bold());
    for step in engine.steps(trace) {
        thread::sleep(delay);
        let line = format!("  {} {}: {}", step.number, step.title, step.detail);
        if step.number == 5 {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
        out.flush()?;
    }
    print!("\nPress [Enter] to continue.");
    out.flush()?;
    let mut pause = String::new();
    stdin().read_line(&mut pause)?;
    Ok(())
}
