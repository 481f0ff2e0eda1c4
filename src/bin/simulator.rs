// Line protocol driver for a host UI process.
//
//   CLASSIFY <category> <text...>   classify free text
//   SAMPLE <category> <index>       classify a stored sample
//   ADD <category> <text...>        append a sample
//   EDIT <category> <index> <text...>
//   DELETE <category> <index>
//   CORPUS                          dump the corpus
//   EXIT                            save the snapshot (if configured) and quit
//
// Each request gets exactly one JSON line on stdout. Logs go to stderr.
use demo_core::config::DemoConfig;
use demo_core::persistence::{load_corpus_or_builtin, save_corpus};
use demo_core::{DemoEngine, DemoError};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load()?;
    demo_core::logging::init(&config.log_level);
    info!("demo pipe starting");

    let corpus = load_corpus_or_builtin(config.corpus_snapshot.as_deref())?;
    let mut engine = DemoEngine::new(corpus);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        let input = input.trim_end_matches('\r');
        if input.trim() == "EXIT" {
            info!("received EXIT");
            break;
        }
        let response = handle_command(input, &mut engine);
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    if let Some(path) = &config.corpus_snapshot {
        if let Err(e) = save_corpus(engine.corpus(), path) {
            error!("error saving corpus snapshot: {e}");
        }
    }
    info!("demo pipe shutting down");
    Ok(())
}

fn handle_command(input: &str, engine: &mut DemoEngine) -> Value {
    let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
    let result = match command {
        "CLASSIFY" => {
            let (category, text) = rest.split_once(' ').unwrap_or((rest, ""));
            engine
                .classify(text, category)
                .map(|trace| json!({ "trace": &trace, "steps": engine.steps(&trace) }))
        }
        "SAMPLE" => parse_index(rest).and_then(|(category, index)| {
            engine
                .classify_sample(category, index)
                .map(|trace| json!({ "trace": &trace, "steps": engine.steps(&trace) }))
        }),
        "ADD" => {
            let (category, text) = rest.split_once(' ').unwrap_or((rest, ""));
            engine
                .corpus_mut()
                .add_sample(category, text)
                .map(|()| json!({ "ok": true }))
        }
        "EDIT" => {
            let (head, text) = split_at_second_space(rest);
            parse_index(head).and_then(|(category, index)| {
                engine
                    .corpus_mut()
                    .edit_sample(category, index, text)
                    .map(|()| json!({ "ok": true }))
            })
        }
        "DELETE" => parse_index(rest).and_then(|(category, index)| {
            engine
                .corpus_mut()
                .remove_sample(category, index)
                .map(|removed| json!({ "ok": true, "removed": removed }))
        }),
        "CORPUS" => Ok(json!({ "corpus": engine.corpus() })),
        _ => {
            warn!(command, "unknown command");
            return json!({ "error": format!("unknown command '{command}'") });
        }
    };
    result.unwrap_or_else(|e| json!({ "error": e.to_string() }))
}

fn parse_index(args: &str) -> Result<(&str, usize), DemoError> {
    let (category, index) = args.trim().split_once(' ').unwrap_or((args.trim(), ""));
    let index = index
        .trim()
        .parse()
        .map_err(|_| DemoError::InvalidIndex(index.to_string()))?;
    Ok((category, index))
}

fn split_at_second_space(args: &str) -> (&str, &str) {
    match args.match_indices(' ').nth(1) {
        Some((pos, _)) => (&args[..pos], &args[pos + 1..]),
        None => (args, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_returns_trace_and_steps() {
        let mut engine = DemoEngine::with_builtin_corpus();
        let response = handle_command("CLASSIFY happy 开心", &mut engine);
        assert_eq!(response["trace"]["sequence"], json!([13, 9]));
        assert_eq!(response["trace"]["predicted"], "happy");
        assert_eq!(response["steps"][4]["detail"], "高兴");
    }

    #[test]
    fn classify_keeps_spaces_in_text() {
        let mut engine = DemoEngine::with_builtin_corpus();
        let response = handle_command("CLASSIFY sad a b", &mut engine);
        assert_eq!(response["trace"]["text"], "a b");
    }

    #[test]
    fn editing_commands_change_the_corpus() {
        let mut engine = DemoEngine::with_builtin_corpus();
        assert_eq!(handle_command("ADD sad 下雨了", &mut engine)["ok"], true);
        assert_eq!(handle_command("EDIT sad 11 下大雨了", &mut engine)["ok"], true);
        assert_eq!(engine.corpus().sample("sad", 11).unwrap(), "下大雨了");

        let response = handle_command("DELETE sad 11", &mut engine);
        assert_eq!(response["removed"], "下大雨了");
    }

    #[test]
    fn errors_are_reported_not_fatal() {
        let mut engine = DemoEngine::with_builtin_corpus();
        assert!(handle_command("SAMPLE sad 99", &mut engine)["error"].is_string());
        assert!(handle_command("SAMPLE sad x", &mut engine)["error"].is_string());
        assert!(handle_command("CLASSIFY bored hi", &mut engine)["error"].is_string());
        assert!(handle_command("JUMP", &mut engine)["error"].is_string());
    }

    #[test]
    fn sample_classifies_stored_text() {
        let mut engine = DemoEngine::with_builtin_corpus();
        let response = handle_command("SAMPLE angry 6", &mut engine);
        assert_eq!(response["trace"]["text"], "哼，真可恶");
        assert_eq!(response["trace"]["predicted"], "angry");
    }
}
