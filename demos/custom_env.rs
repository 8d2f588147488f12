use genruler::library::basic;
use genruler::{compute, parse_rule_with, ArgumentError, Environment, Rule, Value};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // The built-ins plus a root `greet` function
    let env = Environment::builtin()
        .to_builder()
        .function("greet", |args| {
            let name = match args.len() {
                0 => basic::field(vec!["name".into(), "World".into()])?,
                1 => args.into_iter().next().unwrap_or(Value::Null),
                got => {
                    return Err(ArgumentError::Arity {
                        function: "greet".into(),
                        expected: "0 to 1".into(),
                        got,
                    })
                }
            };
            Ok(Value::Rule(Rule::new(move |ctx| {
                Ok(Value::String(format!("Hello, {}!", compute(&name, ctx)?.to_text())))
            })))
        })
        .build();

    for source in [
        "(greet)",
        r#"(greet (string.lower (basic.field "shout")))"#,
        "(greet 1 2)",
        "(wave)",
    ] {
        match parse_rule_with(source, &env) {
            Ok(rule) => {
                let ctx = Value::map([("name", "Alice"), ("shout", "BOB")]);
                println!("{source} => {:?}", rule.apply(&ctx));
            }
            Err(err) => println!("{source} => error: {err}"),
        }
    }
}
