use chrono::NaiveDateTime;
use datetime_mask::{compile, default_baseline, parse_with_baseline};

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(pattern), Some(input)) = (args.next(), args.next()) else {
        eprintln!("usage: datetime_mask <pattern> <input> [baseline]");
        std::process::exit(2);
    };
    let baseline = match args.next() {
        Some(text) => match NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S") {
            Ok(baseline) => baseline,
            Err(e) => {
                eprintln!("invalid baseline {text:?}: {e}");
                std::process::exit(2);
            }
        },
        None => default_baseline(),
    };

    let tokens = compile(&pattern);
    let result = parse_with_baseline(&input, &tokens, baseline);
    if let Some(date) = result.date {
        println!("{}", tokens.format(&date));
    } else if result.is_pending() {
        println!("missing punctuation: {:?}", result.missing_punctuation);
        std::process::exit(1);
    } else {
        match result.failure {
            Some(failure) => println!("{failure}"),
            None => println!("no date"),
        }
        std::process::exit(1);
    }
}
