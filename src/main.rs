use std::collections::HashMap;
use std::env;

use rand::Rng;

use percolation::parameter_reader::{parse_value, ParameterReader};
use percolation::{linspace, EnsembleSweep, Lattice, LatticeKind, PercolationResults};


const PARAMETERS: [&str; 8] = [
    "size",
    "dimension",
    "lattice",
    "ensemble_size",
    "p_min",
    "p_max",
    "p_steps",
    "outputfile",
];

struct SweepParameters
{
    size: usize,
    dimension: usize,
    kind: LatticeKind,
    ensemble_size: usize,
    p_min: f64,
    p_max: f64,
    p_steps: usize,
    seed: Option<u64>,
}

impl SweepParameters
{
    fn parse(reader: &ParameterReader, params: &HashMap<&'static str, String>) -> percolation::Result<Self>
    {
        let seed = reader
            .get_optional("seed", ":")?
            .map(|s| parse_value("seed", &s))
            .transpose()?;

        Ok(Self
        {
            size:          parse_value("size", &params["size"])?,
            dimension:     parse_value("dimension", &params["dimension"])?,
            kind:          parse_value("lattice", &params["lattice"])?,
            ensemble_size: parse_value("ensemble_size", &params["ensemble_size"])?,
            p_min:         parse_value("p_min", &params["p_min"])?,
            p_max:         parse_value("p_max", &params["p_max"])?,
            p_steps:       parse_value("p_steps", &params["p_steps"])?,
            seed,
        })
    }
}

fn main()
{
    let args   = env::args().collect::<Vec<_>>();
    let reader = ParameterReader::build(&args, &PARAMETERS).unwrap_or_else(|e|
    {
        println!("Failed to create parameter reader: {e}");
        std::process::exit(1);
    });

    let params = reader.parse_parameters(":").unwrap_or_else(|e|
    {
        println!("Failed to read parameters: {e}");
        std::process::exit(1);
    });
    let sweep_params = SweepParameters::parse(&reader, &params).unwrap_or_else(|e|
    {
        println!("Failed to parse parameters: {e}");
        std::process::exit(1);
    });
    let SweepParameters { size, dimension, kind, ensemble_size, p_min, p_max, p_steps, seed } = sweep_params;
    let outputfile = params["outputfile"].clone();

    let seed = seed.unwrap_or_else(|| rand::rng().random());

    let lattice = Lattice::new(size, dimension, kind).unwrap_or_else(|e|
    {
        println!("Invalid lattice: {e}");
        std::process::exit(1);
    });
    let sweep = EnsembleSweep::new(lattice, ensemble_size, seed).unwrap_or_else(|e|
    {
        println!("Invalid ensemble: {e}");
        std::process::exit(1);
    });
    let probabilities = linspace(p_min, p_max, p_steps);

    println!("Launching {kind:?} percolation on a {size}^{dimension} lattice ({} elements) with ensemble size {ensemble_size}", lattice.n_total());
    println!("Using: {} p values from {p_min} to {p_max}, seed {seed}", probabilities.len());

    let time    = std::time::Instant::now();
    let results = sweep.run(&probabilities).unwrap_or_else(|e|
    {
        println!("Ensemble sweep failed: {e}");
        std::process::exit(1);
    });
    let elapsed_time = time.elapsed();

    println!("Time taken: {}s", elapsed_time.as_secs());

    PercolationResults::write_to_file(&outputfile, &lattice, &probabilities, &results, elapsed_time).unwrap_or_else(|err|
    {
        println!("Could not write to file: {err}");
        std::process::exit(1);
    });
    println!("File saved as {outputfile}");
}
