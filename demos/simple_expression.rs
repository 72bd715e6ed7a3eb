use log::debug;

fn main() {
    pretty_env_logger::init();

    let expression = "-(x^2) + mix(x, y, 0.5) * sin(x*y)";
    let f = xyfunc::parse(expression).unwrap();
    debug!("parsed: {f:?}");

    for (x, y) in [(0.0, 0.0), (1.0, 2.0), (-1.5, 0.5), (3.0, -4.0)] {
        println!("f({x}, {y}) = {}", f.evaluate(x, y));
    }

    // Parse errors name what went wrong; nothing partial is returned.
    match xyfunc::parse("clamp(x, 0)") {
        Ok(_) => unreachable!(),
        Err(e) => println!("clamp(x, 0) rejected: {e}"),
    }
}
