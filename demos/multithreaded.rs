use std::sync::Arc;
use std::thread;

use genruler::{parse_rule, Value};

fn main() {
    let rule = Arc::new(
        parse_rule(
            r#"(boolean.and
                 (condition.ge (basic.field "age") 18)
                 (condition.equal (basic.field "status") "active"))"#,
        )
        .expect("failed to compile rule"),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let r = Arc::clone(&rule);
            thread::spawn(move || {
                let ctx = Value::Null
                    .set("age", 16_i64 + i64::from(i))
                    .set("status", "active");
                let result = r.apply(&ctx);
                println!("Thread {i}: {result:?}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
