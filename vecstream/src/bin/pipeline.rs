//! Runs a representative stream pipeline over integers supplied on the command line.
//!
//! ```ignore
//! % cargo run --bin pipeline -- --log 1 2 2 3 4 3 100
//! ```

use vecstream::{stream_map, Config, Stream, Vector};

fn main() -> Result<(), String> {
    let mut opts = getopts::Options::new();
    Config::install_options(&mut opts);
    opts.optflag("h", "help", "print this help menu");

    let matches = opts.parse(std::env::args().skip(1)).map_err(|e| e.to_string())?;
    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: pipeline [options] VALUES..."));
        return Ok(());
    }

    let config = Config::from_env().apply_matches(&matches)?;

    let mut values = matches.free
        .iter()
        .map(|x| x.parse::<i64>().map_err(|e| format!("{:?}: {}", x, e)))
        .collect::<Result<Vector<_>, _>>()?;
    if values.is_empty() {
        values.add_args([1, 2, 2, 3, 4, 3, 100]);
    }

    let mut stream = values.stream();
    if let Some(logger) = config.logger(0) {
        stream = stream.with_logger(logger);
    }

    println!("values:   {}", values);
    println!("distinct: {}", stream.distinct().sort(|a, b| a < b).into_vector());
    println!("evens:    {}", stream.filter(|x, _| x % 2 == 0).into_vector());
    println!("sum:      {}", total(&stream)?);
    println!("max:      {}", stream.max(|a, b| a.cmp(b)).map_err(|e| e.to_string())?);
    println!("min:      {}", stream.min(|a, b| a.cmp(b)).map_err(|e| e.to_string())?);

    let labels = stream_map(&stream, |x, index| format!("{}#{}", index, x));
    println!("labels:   {}", labels.into_vector());

    Ok(())
}

/// Sums the stream, saturating at the bounds of `i64`.
fn total(stream: &Stream<i64>) -> Result<i64, String> {
    stream.reduce(|a, b| a.saturating_add(b)).map_err(|e| e.to_string())
}
