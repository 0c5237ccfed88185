use clap::Parser;
use log::info;

use fuzzy_rs::algebra::Logic;
use fuzzy_rs::consequent::{Consequent, MamdaniConsequent, TakagiSugenoConsequent};
use fuzzy_rs::degree::MembershipDegree;
use fuzzy_rs::domain::Inputs;
use fuzzy_rs::grouping::{create_set_of_variables, SetKind, ShapeKind, VariableSetConfig};
use fuzzy_rs::term::Term;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Temperature, normalized to [0, 1].
    #[arg(value_name = "FLOAT", default_value = "0.8")]
    temperature: f64,

    /// Humidity, normalized to [0, 1].
    #[arg(value_name = "FLOAT", default_value = "0.2")]
    humidity: f64,

    /// Fuzzy logic: godel or lukasiewicz.
    #[clap(long, value_name = "LOGIC", default_value = "godel")]
    logic: Logic,

    /// Membership function shape: gaussian, triangular, trapezoidal.
    #[clap(long, value_name = "SHAPE", default_value = "gaussian")]
    shape: ShapeKind,

    /// Number of membership functions per variable.
    #[clap(long, value_name = "INT", default_value = "3")]
    n_mfs: usize,

    /// Use interval type-2 fuzzy sets.
    #[clap(long)]
    it2: bool,

    /// Enable debug logging.
    #[clap(long)]
    debug: bool,
}

fn peak(degree: &MembershipDegree) -> String {
    match degree {
        MembershipDegree::Scalars(values) => format!("{:.3}", values.iter().copied().fold(0.0, f64::max)),
        MembershipDegree::Intervals(values) => format!(
            "[{:.3}, {:.3}]",
            values.iter().map(|v| v.lower()).fold(0.0, f64::max),
            values.iter().map(|v| v.upper()).fold(0.0, f64::max)
        ),
        single => single.to_string(),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let config = VariableSetConfig {
        shape: args.shape,
        n_mfs: args.n_mfs,
        set_kind: if args.it2 { SetKind::It2 } else { SetKind::T1 },
        ..Default::default()
    };
    let set = create_set_of_variables(["temperature", "humidity", "watering"], &config)?;
    info!("Created {} variables with adjectives {:?}", set.variables.len(), set.adjectives);

    let low = set.adjectives[0];
    let medium = set.adjectives[set.adjectives.len() / 2];
    let high = set.adjectives[set.adjectives.len() - 1];

    let algebra = args.logic.algebra();
    let term = |variable: &str, adjective: &str| -> color_eyre::Result<Term> {
        let clause = set
            .clause(variable, adjective)
            .ok_or_else(|| color_eyre::eyre::eyre!("No clause {} is {}", variable, adjective))?;
        Ok(Term::new(algebra.clone(), clause.clone()))
    };

    let rules = [
        (term("temperature", high)? & term("humidity", low)?, high),
        (term("temperature", medium)? | term("humidity", medium)?, medium),
        (!term("temperature", high)? & term("humidity", high)?, low),
    ];

    let inputs = Inputs::from([
        ("temperature".to_string(), args.temperature),
        ("humidity".to_string(), args.humidity),
    ]);

    for (antecedent, adjective) in &rules {
        let firing = antecedent.evaluate(&inputs)?;
        let clause = set
            .clause("watering", adjective)
            .ok_or_else(|| color_eyre::eyre::eyre!("No clause watering is {}", adjective))?;
        let mut consequent = MamdaniConsequent::new(clause.clone());
        let cut = consequent.output(&firing)?;
        println!(
            "IF {} THEN watering is {}: firing = {}, cut peak = {}",
            antecedent,
            adjective,
            firing,
            peak(cut.values())
        );
    }

    let mut sugeno = TakagiSugenoConsequent::new(
        [("temperature", 0.7), ("humidity", -0.4)],
        0.3,
        set.variables[2].clone(),
    );
    println!("Takagi-Sugeno watering = {:.3}", sugeno.output(&inputs)?);

    Ok(())
}
