use std::{
    fs::read_to_string,
    io::{self, Read},
    process,
    time::Instant,
};

use clap::{App, Arg};
use toy::{
    display_error,
    driver::{Driver, DriverOptions, Summary, PROMPT},
    errors::errors::Error,
    lexer::lexer::Lexer,
    parser::{lookups::PrecedenceTable, parser::Parser},
};

fn main() {
    let matches = App::new("toy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parses toy language source into syntax trees")
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("file.toy")
                .help("Path to the source file to parse, reads stdin when omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ast")
                .short("a")
                .long("ast")
                .help("Print the tree of every parsed construct"),
        )
        .arg(
            Arg::with_name("binop")
                .short("b")
                .long("binop")
                .value_name("op=precedence")
                .help("Adds or overrides a binary operator precedence, e.g. /=40")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .get_matches();

    let mut precedence = PrecedenceTable::default();

    for binding in matches.values_of("binop").into_iter().flatten() {
        let inserted = PrecedenceTable::parse_binding(binding)
            .and_then(|(op, prec)| precedence.insert(op, prec));

        if let Err(error) = inserted {
            display_error(&error, None);
            process::exit(2);
        }
    }

    let show_ast = matches.is_present("ast");

    let result = match matches.value_of("file") {
        Some(file_path) => {
            let contents = read_to_string(file_path).unwrap_or_else(|error| {
                eprintln!("Failed to read {}: {}", file_path, error);
                process::exit(1);
            });

            let start = Instant::now();
            let lexer = Lexer::from_source(&contents, Some(file_path.to_string()));
            let options = DriverOptions {
                prompt: false,
                show_ast,
                source: Some(&contents),
            };

            let summary = run(lexer, precedence, options);
            println!("Parsed in {:?}", start.elapsed());
            summary
        }
        None => {
            let stdin = io::stdin();
            let lexer = Lexer::new(stdin.lock(), Some(String::from("stdin")));
            let options = DriverOptions {
                prompt: true,
                show_ast,
                source: None,
            };

            eprint!("{}", PROMPT);
            run(lexer, precedence, options)
        }
    };

    match result {
        Ok(summary) => {
            eprintln!();
            println!("{} parsed, {} failed", summary.parsed, summary.failed);
        }
        Err(error) => {
            display_error(&error, None);
            process::exit(1);
        }
    }
}

fn run<R: Read>(
    lexer: Lexer<R>,
    precedence: PrecedenceTable,
    options: DriverOptions<'_>,
) -> Result<Summary, Error> {
    let parser = Parser::with_precedence(lexer, precedence)?;
    let mut driver = Driver::new(parser);

    driver.run(&mut io::stdout().lock(), options)
}
