use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thrust_evo::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "thrust-evo")]
#[command(about = "Evolve a drone thrust schedule that climbs as high as possible without crashing")]
struct Cli {
    /// JSON config file; flags given on the command line override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    population_size: Option<usize>,
    #[arg(long)]
    genome_size: Option<usize>,
    #[arg(long)]
    mutation_rate: Option<f64>,
    #[arg(long)]
    num_generations: Option<usize>,
    #[arg(long)]
    crossing_probability: Option<f64>,
    /// Carry the best schedule unchanged into every generation
    ///
    /// `--elitism` alone turns it on; `--elitism false` overrides a config file.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    elitism: Option<bool>,
    #[arg(long, value_enum)]
    negative_fitness: Option<CliNegativeFitness>,
    #[arg(long, value_enum)]
    crossover_polarity: Option<CliPolarity>,
    #[arg(long)]
    seed: Option<u64>,
    /// Integration step bound per simulated flight
    #[arg(long)]
    max_steps: Option<usize>,
    /// Write the run result as JSON
    #[arg(long)]
    json_output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliNegativeFitness {
    Shift,
    Literal,
}

impl From<CliNegativeFitness> for NegativeFitnessPolicy {
    fn from(value: CliNegativeFitness) -> Self {
        match value {
            CliNegativeFitness::Shift => Self::Shift,
            CliNegativeFitness::Literal => Self::Literal,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliPolarity {
    DrawExceeds,
    DrawBelow,
}

impl From<CliPolarity> for CrossoverPolarity {
    fn from(value: CliPolarity) -> Self {
        match value {
            CliPolarity::DrawExceeds => Self::DrawExceeds,
            CliPolarity::DrawBelow => Self::DrawBelow,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> Result<GeneticConfig> {
        let mut config = match &self.config {
            Some(path) => GeneticConfig::from_path(path)?,
            None => GeneticConfig::default(),
        };

        if let Some(v) = self.population_size {
            config.population_size = v;
        }
        if let Some(v) = self.genome_size {
            config.genome_size = v;
        }
        if let Some(v) = self.mutation_rate {
            config.mutation_rate = v;
        }
        if let Some(v) = self.num_generations {
            config.num_generations = v;
        }
        if let Some(v) = self.crossing_probability {
            config.crossing_probability = v;
        }
        if let Some(v) = self.elitism {
            config.elitism = v;
        }
        if let Some(v) = self.negative_fitness {
            config.negative_fitness = v.into();
        }
        if let Some(v) = self.crossover_polarity {
            config.crossover_polarity = v.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

#[derive(Serialize)]
struct RunReport<'a> {
    config: &'a GeneticConfig,
    seed: u64,
    flight_params: &'a FlightParams,
    outcome: &'a FlightOutcome,
    result: &'a EvolutionResult,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = cli.resolve_config()?;

    // pin the seed so the report can reproduce the run
    let seed = config.seed.unwrap_or_else(rand::random);
    config.seed = Some(seed);

    let mut flight = FlightSimulation::new();
    if let Some(max_steps) = cli.max_steps {
        flight = flight.with_max_steps(max_steps);
    }

    let solver = GeneticSolver::builder()
        .config(config)
        .fitness(flight.clone())
        .build()?;

    println!("Parameters:");
    for (name, value) in solver.parameters() {
        println!("  {name:<22} {value}");
    }
    println!("  {:<22} {seed}", "seed");

    let mut rng = StdRng::seed_from_u64(seed);
    let result = solver.solve(None, &mut rng)?;
    let outcome = flight
        .simulate(&result.best_chromosome)
        .context("failed to re-fly the best schedule")?;

    println!();
    println!("Best schedule: {}", result.best_chromosome);
    println!("Best height:   {:.6}", outcome.max_height);
    println!("  Reward:      {:.6}", outcome.reward);
    println!("  Landing:     {:.6} m/s", outcome.final_velocity);
    println!("  Crashed:     {}", outcome.crashed);
    println!("  Steps:       {}", outcome.steps);
    println!();
    println!("{}", result.summary());

    if let Some(path) = cli.json_output {
        let report = RunReport {
            config: solver.config(),
            seed,
            flight_params: flight.params(),
            outcome: &outcome,
            result: &result,
        };
        let json = serde_json::to_vec_pretty(&report).context("failed to serialize run report")?;
        fs::write(&path, json)
            .with_context(|| format!("failed writing run report: {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
