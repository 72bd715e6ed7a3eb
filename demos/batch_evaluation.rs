fn main() {
    pretty_env_logger::init();

    // Parse once, evaluate over a whole grid without re-parsing.
    let f = xyfunc::parse("smoothstep(0, 1, sin(x)*cos(y))").unwrap();

    let n = 8;
    for i in 0..n {
        let x = f64::from(i) / f64::from(n - 1) * 3.0;
        let row: Vec<String> = (0..n)
            .map(|j| {
                let y = f64::from(j) / f64::from(n - 1) * 3.0;
                format!("{:6.3}", f.evaluate(x, y))
            })
            .collect();
        println!("{}", row.join(" "));
    }
}
