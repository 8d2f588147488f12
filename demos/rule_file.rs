use std::env;
use std::process::ExitCode;

use genruler::{parse_rule_file, Environment, Value};

const DEFAULT_RULE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/rules/shipping.rule");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_RULE.to_owned());
    let rule = match parse_rule_file(&path, Environment::builtin()) {
        Ok(rule) => rule,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let orders = [
        Value::Null
            .set("total", 120.0)
            .set("country", "US")
            .set("member", true),
        Value::Null.set("total", 35.5).set("country", "US"),
        Value::Null.set("total", 80_i64).set("country", "FR"),
    ];

    for order in &orders {
        match rule.apply(order) {
            Ok(result) => println!("{order} => {result}"),
            Err(err) => println!("{order} => error: {err}"),
        }
    }
    ExitCode::SUCCESS
}
