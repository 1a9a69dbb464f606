use std::process::exit;

use clap::Parser;

use sexagesimal::{Error, Sexagesimal};
use sexagesimal::data::sexagesimal::DEFAULT_PRECISION;
use sexagesimal::io::{import, Notation};

/// Converts numbers to and from sexagesimal notation, exactly.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Numbers to convert, such as `2:46:58.30:15`. Prints a demonstration when none are given.
    values: Vec<String>,
    /// Maximum number of fractional base 60 digits in the truncated rendering.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
    /// Read the values as decimal numbers, such as `9998.5`.
    #[arg(short, long, conflicts_with = "periodic_input")]
    decimal: bool,
    /// Read a parenthesized run of fractional digits as repeating forever.
    #[arg(long)]
    periodic_input: bool,
    /// Also print the sum, and the comparison of consecutive values.
    #[arg(short, long)]
    sum: bool,
}

fn main() {
    let opts: Opts = Opts::parse();

    let result = if opts.values.is_empty() {
        demonstration()
    } else {
        convert(&opts)
    };

    if let Err(error) = result {
        eprintln!("{}", error);
        exit(1);
    }
}

fn convert(opts: &Opts) -> Result<(), Error> {
    let notation = if opts.decimal {
        Notation::Decimal
    } else if opts.periodic_input {
        Notation::Periodic
    } else {
        Notation::Sexagesimal
    };

    let values = opts.values.iter()
        .map(|text| import(text, notation))
        .collect::<Result<Vec<_>, _>>()?;

    for value in &values {
        println!(
            "{} → {} → {}",
            value.display(opts.precision),
            value.to_decimal(),
            value.exact_periodic(),
        );
    }

    if opts.sum {
        let total = values.iter().sum::<Sexagesimal>();
        println!("sum: {}", total.display(opts.precision));
        for pair in values.windows(2) {
            println!("{} cmp {}: {:?}", pair[0], pair[1], pair[0].compare(&pair[1]));
        }
    }

    Ok(())
}

/// The conversions the notation was designed around.
fn demonstration() -> Result<(), Error> {
    let a = Sexagesimal::parse("2:46:58.30:15")?;
    println!("{} → {}", a, a.to_decimal());

    let b = Sexagesimal::from_fraction(1, 7)?;
    let e = Sexagesimal::parse("0.8:34:17")?;
    let f = Sexagesimal::parse("0.(8:34:17)")?;
    let g = Sexagesimal::parse_periodic("0.(8:34:17)")?;
    println!("{} → {} → {}", b.to_decimal(), b, b.exact_periodic());
    println!("{} → {}", e, e.to_decimal());
    println!("{} → {}", f, f.to_decimal());
    println!("{} → {} (periodic)", g.exact_periodic(), g.to_decimal());
    println!();

    let c = Sexagesimal::parse("1:30")?;
    let d = Sexagesimal::parse("2:15")?;
    println!("{} → {}", c, c.to_decimal());
    println!("{} → {}", d, d.to_decimal());
    println!("{} + {} = {}", c, d, &c + &d);

    let sum = c.to_integer() + d.to_integer();
    println!("{} + {} = {} → {}", c.to_integer(), d.to_integer(), sum, Sexagesimal::from_integer(sum.clone()));
    println!("{} / {} = {}", c, d, c.divide(&d)?);
    println!();

    println!("{:?}", c.compare(&d));

    Ok(())
}
