use sqldraft::document::SchemaDocument;
use std::env;
use std::fs;
use std::process;

const EMPTY_PLACEHOLDER: &str = "-- No tables defined yet. Add some tables to generate SQL.";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <schema.json> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -o, --output <file>   Output file (default: stdout)");
        process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input_path, e);
            process::exit(1);
        }
    };

    let document = match SchemaDocument::from_json(&input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut sql = document.generate_sql();
    if sql.trim().is_empty() {
        sql = format!("{}\n", EMPTY_PLACEHOLDER);
    }

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &sql) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => print!("{}", sql),
    }
}
