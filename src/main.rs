use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use arlang::{
    ast::printer::AstPrinter, display_error, lexer::lexer::tokenize, parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .expect("Expected a file path, not a directory")
        .to_string_lossy()
        .to_string();

    let start = Instant::now();

    let file_contents = read_to_string(&file_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(file_name));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), file_path);
        panic!()
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let parsed = parse(tokens.unwrap());

    println!("Parsed in {:?}", parse_start.elapsed());

    if parsed.is_err() {
        display_error(parsed.err().unwrap(), file_path);
        panic!()
    }

    for node in parsed.unwrap().iter() {
        println!("{}", AstPrinter.print_node(node));
    }

    println!("Total time: {:?}", start.elapsed());
}
