use crossterm::style::Stylize;
use serde_json::json;
use std::env;
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::Path;
use tashkeel_core::{
    inconsistencies, shaddalike, strip_harakat, strip_tashkeel, vocalized_similarity, vocalizedlike,
    EncodingMode, TashkeelToolkit,
};

const USAGE: &str = "Usage: tashkeel_repl [--config <path>] [--json]";

struct Options {
    config: Option<String>,
    json: bool,
}

fn parse_args() -> Options {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut options = Options { config: None, json: false };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--config" => match iter.next() {
                Some(path) => options.config = Some(path.clone()),
                None => {
                    eprintln!("ERROR: --config flag requires an argument.");
                    std::process::exit(1);
                }
            },
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => {
                eprintln!("ERROR: unknown argument '{}'\n{}", other, USAGE);
                std::process::exit(1);
            }
        }
    }
    options
}

fn main() {
    env_logger::init();
    let options = parse_args();

    let mut toolkit = match &options.config {
        Some(path) => TashkeelToolkit::from_config_file_or_default(Path::new(path)),
        None => TashkeelToolkit::new(),
    };

    if !options.json {
        print_banner(&toolkit);
    }

    let stdin = stdin();
    for line in stdin.lock().lines() {
        let input = match line {
            Ok(input) => input,
            Err(e) => {
                eprintln!("[ERROR] Could not read input: {}", e);
                break;
            }
        };
        let cmd = input.trim();
        if cmd == "exit" {
            break;
        }
        if cmd.is_empty() {
            continue;
        }

        let (command, args) = match cmd.strip_prefix(':') {
            Some(rest) => {
                let mut parts = rest.splitn(2, ' ');
                (parts.next().unwrap_or(""), parts.next().unwrap_or("").trim())
            }
            None => ("analyze", cmd),
        };

        let output = run_command(&mut toolkit, command, args);
        let written = if options.json {
            write_json(&mut stdout(), &output)
        } else {
            print_result(&output);
            stdout().flush()
        };
        if let Err(e) = written {
            eprintln!("[ERROR] Could not write output: {}", e);
            break;
        }
    }
}

fn run_command(toolkit: &mut TashkeelToolkit, command: &str, args: &str) -> serde_json::Value {
    let words: Vec<&str> = args.split_whitespace().collect();
    let two = |name: &str| two_args(&words, name);

    let result: Result<serde_json::Value, String> = match command {
        "analyze" => analyze(toolkit, args),
        "strip" => Ok(json!(strip_tashkeel(args))),
        "harakat" => Ok(json!(strip_harakat(args))),
        "separate" => toolkit
            .separate(args)
            .map(|(letters, marks)| json!({ "letters": letters, "marks": marks }))
            .map_err(|e| e.to_string()),
        "joint" => two("joint").and_then(|(letters, marks)| {
            toolkit.joint(letters, marks).map(|w| json!(w)).map_err(|e| e.to_string())
        }),
        "encode" => toolkit
            .encode(args)
            .map(|(letters, codes)| json!({ "letters": letters, "codes": codes.to_string() }))
            .map_err(|e| e.to_string()),
        "decode" => two("decode").and_then(|(letters, codes)| {
            toolkit.decode(letters, codes).map(|w| json!(w)).map_err(|e| e.to_string())
        }),
        "mode" => args
            .parse::<EncodingMode>()
            .map(|mode| {
                toolkit.set_encoding_mode(mode);
                json!(mode.to_string())
            })
            .map_err(|e| e.to_string()),
        "hamza" => Ok(json!(toolkit.normalize_hamza(args))),
        "reduce" => Ok(json!(toolkit.reduce(args))),
        "autocorrect" => Ok(json!(toolkit.autocorrect(args))),
        "check" => Ok(json!(inconsistencies(args))),
        "shaddalike" => two("shaddalike").map(|(a, b)| json!(shaddalike(a, b))),
        "similarity" => two("similarity").map(|(a, b)| {
            json!({ "score": vocalized_similarity(a, b), "vocalizedlike": vocalizedlike(a, b) })
        }),
        "wazn" => two("wazn").map(|(word, wazn)| {
            json!({ "waznlike": toolkit.waznlike(word, wazn), "root": toolkit.wazn_root(word, wazn) })
        }),
        "help" => Ok(json!(HELP)),
        other => Err(format!("unknown command ':{}', try :help", other)),
    };

    match result {
        Ok(value) => json!({ "command": command, "result": value }),
        Err(error) => json!({ "command": command, "error": error }),
    }
}

fn two_args<'a>(words: &[&'a str], name: &str) -> Result<(&'a str, &'a str), String> {
    match words {
        [a, b] => Ok((*a, *b)),
        _ => Err(format!(":{} takes two arguments", name)),
    }
}

fn analyze(toolkit: &TashkeelToolkit, word: &str) -> Result<serde_json::Value, String> {
    let (letters, marks) = toolkit.separate(word).map_err(|e| e.to_string())?;
    let (_, codes) = toolkit.encode(word).map_err(|e| e.to_string())?;
    Ok(json!({
        "letters": letters,
        "marks": marks,
        "codes": codes.to_string(),
        "reduced": toolkit.reduce(word),
        "autocorrected": toolkit.autocorrect(word),
    }))
}

const HELP: &str = "\
<word>                  separate, encode, reduce and autocorrect a word
:strip <text>           remove all tashkeel
:harakat <text>         remove harakat, keep shadda and tanwin
:separate <word>        split into letters and marks
:joint <letters> <marks>
:encode <word>          compact codes in the current mode
:decode <letters> <codes>
:mode character|decimal
:hamza <text>           normalize hamza forms
:reduce <word>          drop predictable marks
:autocorrect <text>     repair common mark errors
:check <word>           report shadda with sukun
:shaddalike <a> <b>
:similarity <a> <b>
:wazn <word> <wazn>
exit";

fn write_json(out: &mut impl Write, output: &serde_json::Value) -> io::Result<()> {
    writeln!(out, "{}", output)?;
    out.flush()
}

fn print_banner(toolkit: &TashkeelToolkit) {
    println!("{}", "Tashkeel REPL".bold());
    println!("---------------------------------------------------------------");
    println!("Type a vocalized word, or ':help' for commands. 'exit' to quit.");
    println!("Encoding mode: {}\n", toolkit.config().encoding_mode);
}

fn print_result(output: &serde_json::Value) {
    if let Some(error) = output.get("error").and_then(|e| e.as_str()) {
        println!("{} {}", "error:".red().bold(), error);
        return;
    }
    match output.get("result") {
        Some(serde_json::Value::String(text)) => println!("{} {}", "=>".green(), text),
        Some(serde_json::Value::Object(fields)) => {
            for (key, value) in fields {
                let shown = match value {
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                println!("  {:<14} {}", key.as_str().cyan(), shown);
            }
        }
        Some(other) => println!("{} {}", "=>".green(), other),
        None => {}
    }
}
