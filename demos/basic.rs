use genruler::{parse_rule, Value};

fn main() {
    // Compile once
    let rule = parse_rule(
        r#"(boolean.and
             (condition.ge (basic.field "age") 18)
             (condition.equal (basic.field "status") "active"))"#,
    )
    .expect("failed to compile rule");

    // Apply to any number of contexts
    for (age, status) in [(25_i64, "active"), (16, "active"), (40, "suspended")] {
        let ctx = Value::Null.set("age", age).set("status", status);
        match rule.apply(&ctx) {
            Ok(result) => println!("{ctx} => {result}"),
            Err(err) => println!("{ctx} => error: {err}"),
        }
    }
}
